//! Protocol constants for SAME header/attention/EOM generation (47 CFR §11.31)

/// Synchronization/AGC byte repeated before every AFSK burst.
pub const PREAMBLE_BYTE: u8 = 0xAB;
/// Number of preamble byte repetitions before each burst.
pub const PREAMBLE_COUNT: usize = 16;

/// Marks the start of a SAME header.
pub const ASCII_START: &str = "ZCZC";
/// Marks the End-Of-Message trailer.
pub const ASCII_EOM: &str = "NNNN";

/// Length of the originator code field, e.g. "WXR".
pub const ORIGINATOR_CODE_LEN: usize = 3;
/// Length of the event code field, e.g. "TOR".
pub const EVENT_CODE_LEN: usize = 3;
/// Length of a single location code field (PSSCCC).
pub const LOCATION_CODE_LEN: usize = 6;
/// Maximum number of location codes permitted in a single header.
pub const LOCATION_CODES_MAX: usize = 31;
/// Length of the valid time period field (TTTT).
pub const VALID_TIME_LEN: usize = 4;
/// Length of the originator time field (JJJHHMM).
pub const ORIGINATOR_TIME_LEN: usize = 7;
/// Length of the callsign field, space-padded by the caller.
pub const CALLSIGN_LEN: usize = 8;

/// AFSK bit rate, mandated by 47 CFR §11.31.
pub const AFSK_BIT_RATE: f64 = 520.83;
/// AFSK MARK frequency (logical 1).
pub const AFSK_MARK_FREQ: f64 = 2083.3;
/// AFSK SPACE frequency (logical 0).
pub const AFSK_SPACE_FREQ: f64 = 1562.5;

/// First attention-signal tone.
pub const ATTN_FREQ_A: f64 = 853.0;
/// Second attention-signal tone.
pub const ATTN_FREQ_B: f64 = 960.0;
/// Minimum caller-specified attention signal duration, in seconds.
pub const ATTN_DURATION_MIN: u32 = 8;
/// Maximum caller-specified attention signal duration, in seconds.
pub const ATTN_DURATION_MAX: u32 = 25;

/// Duration of each silence phase, in seconds.
pub const SILENCE_DURATION_SECS: u32 = 1;

/// Length in bytes of the End-Of-Message burst (16-byte preamble + "NNNN").
pub const EOM_BYTES: usize = 20;

/// Upper bound on the serialized header length, in bytes (k = LOCATION_CODES_MAX).
pub const HEADER_BYTES_MAX: usize = 268;

/// Number of samples produced per call to the chunk driver.
pub const CHUNK_SAMPLES: usize = 4096;

/// Default sine LUT size (entries per period). Must be a power of two.
pub const DEFAULT_LUT_SIZE: usize = 1024;

/// Returns the caller-bounded attention signal duration range, `(min, max)`.
pub fn attn_sig_duration_bounds() -> (u32, u32) {
    (ATTN_DURATION_MIN, ATTN_DURATION_MAX)
}

/// Serialized header length for `k` location codes: `50 + 7k` bytes.
///
/// Derivation: 20-byte prelude + "ORG-" (4) + "EEE-" (4) + 7 bytes per
/// location code + "+TTTT-" (6) + "JJJHHMM-" (8) + "LLLLLLLL-" (9).
pub fn header_len_for_locations(k: usize) -> usize {
    50 + 7 * k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_len_formula_matches_scenarios() {
        assert_eq!(header_len_for_locations(2), 64);
        assert_eq!(header_len_for_locations(31), 267);
        assert_eq!(header_len_for_locations(1), 57);
    }

    #[test]
    fn duration_bounds_are_8_and_25() {
        assert_eq!(attn_sig_duration_bounds(), (8, 25));
    }
}

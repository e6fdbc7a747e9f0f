//! Renders a [`HeaderDescriptor`] into the canonical on-air byte sequence.
//!
//! ```text
//! frame      = preamble start org "-" eee "-" loc *("-" loc) "+" ttt "-" jjj "-" lll "-"
//! preamble   = 16 OCTET(0xAB)
//! start      = "ZCZC"
//! org        = 3 ALPHA            ; originator code
//! eee        = 3 ALPHA            ; event code
//! loc        = 6 DIGIT            ; location code PSSCCC
//! ttt        = 4 DIGIT            ; valid time period HHMM
//! jjj        = 7 DIGIT            ; originator time JJJHHMM
//! lll        = 8 CHAR             ; callsign, padded with spaces
//! ```

use same_core::constants::{ASCII_START, HEADER_BYTES_MAX, PREAMBLE_BYTE, PREAMBLE_COUNT};

use crate::header::HeaderDescriptor;

/// Serializes `desc` into `out`, returning the number of bytes written.
///
/// Idempotent: calling this twice with the same descriptor produces the
/// same bytes. Performs no character-class validation — every field in
/// `desc` is already known to hold exactly its declared length.
pub fn serialize(desc: &HeaderDescriptor, out: &mut [u8; HEADER_BYTES_MAX]) -> usize {
    let mut len = 0;

    for _ in 0..PREAMBLE_COUNT {
        out[len] = PREAMBLE_BYTE;
        len += 1;
    }
    len += push_bytes(out, len, ASCII_START.as_bytes());

    len += push_bytes(out, len, &desc.originator);
    out[len] = b'-';
    len += 1;

    len += push_bytes(out, len, &desc.event);
    out[len] = b'-';
    len += 1;

    let mut last_dash_index = len - 1;
    for code in desc.locations.as_slice() {
        len += push_bytes(out, len, code.as_bytes());
        out[len] = b'-';
        last_dash_index = len;
        len += 1;
    }
    // Overwrite the last written dash with '+', marking the end of the
    // location list.
    out[last_dash_index] = b'+';

    len += push_bytes(out, len, &desc.valid_time);
    out[len] = b'-';
    len += 1;

    len += push_bytes(out, len, &desc.originator_time);
    out[len] = b'-';
    len += 1;

    len += push_bytes(out, len, &desc.callsign);
    out[len] = b'-';
    len += 1;

    len
}

fn push_bytes(out: &mut [u8], at: usize, bytes: &[u8]) -> usize {
    out[at..at + bytes.len()].copy_from_slice(bytes);
    bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::LocationCode;
    use same_core::constants::{header_len_for_locations, ASCII_EOM, EOM_BYTES};

    fn loc(s: &str) -> LocationCode {
        LocationCode::new(s.as_bytes()).unwrap()
    }

    fn scenario_1() -> HeaderDescriptor {
        HeaderDescriptor::new(
            b"WXR",
            b"TOR",
            &[loc("048484"), loc("048024")],
            b"1000",
            b"1172221",
            b"WAEB/AM ",
            8,
        )
        .unwrap()
    }

    #[test]
    fn scenario_1_canonical_framing() {
        let desc = scenario_1();
        let mut buf = [0u8; same_core::constants::HEADER_BYTES_MAX];
        let len = serialize(&desc, &mut buf);

        assert_eq!(len, 64);
        assert_eq!(&buf[..16], &[0xABu8; 16][..]);
        assert_eq!(&buf[16..20], b"ZCZC");
        assert_eq!(
            &buf[20..64],
            b"WXR-TOR-048484-048024+1000-1172221-WAEB/AM -"
        );
    }

    #[test]
    fn scenario_2_maximum_locations() {
        let codes: Vec<LocationCode> = (0..31).map(|_| loc("048484")).collect();
        let desc =
            HeaderDescriptor::new(b"WXR", b"TOR", &codes, b"1000", b"1172221", b"WAEB/AM ", 8).unwrap();
        let mut buf = [0u8; same_core::constants::HEADER_BYTES_MAX];
        let len = serialize(&desc, &mut buf);
        assert_eq!(len, header_len_for_locations(31));
        assert_eq!(len, 267);
    }

    #[test]
    fn scenario_3_single_location() {
        let desc =
            HeaderDescriptor::new(b"WXR", b"TOR", &[loc("000000")], b"1000", b"1172221", b"WAEB/AM ", 8)
                .unwrap();
        let mut buf = [0u8; same_core::constants::HEADER_BYTES_MAX];
        let len = serialize(&desc, &mut buf);
        assert_eq!(len, 57);
    }

    #[test]
    fn preamble_and_start_bytes() {
        let desc = scenario_1();
        let mut buf = [0u8; same_core::constants::HEADER_BYTES_MAX];
        serialize(&desc, &mut buf);
        assert!(buf[..PREAMBLE_COUNT].iter().all(|&b| b == PREAMBLE_BYTE));
        assert_eq!(&buf[PREAMBLE_COUNT..PREAMBLE_COUNT + 4], ASCII_START.as_bytes());
    }

    #[test]
    fn plus_sign_precedes_valid_time() {
        let desc = scenario_1();
        let mut buf = [0u8; same_core::constants::HEADER_BYTES_MAX];
        serialize(&desc, &mut buf);
        // The byte before "1000" (the valid time period) must be '+'.
        let idx = buf.windows(4).position(|w| w == b"1000").unwrap();
        assert_eq!(buf[idx - 1], b'+');
    }

    #[quickcheck_macros::quickcheck]
    fn framing_length_follows_the_50_plus_7k_formula(k: usize) -> bool {
        let k = k % (same_core::constants::LOCATION_CODES_MAX + 1);
        let codes: Vec<LocationCode> = (0..k).map(|_| loc("048484")).collect();
        let desc = HeaderDescriptor::new(b"WXR", b"TOR", &codes, b"1000", b"1172221", b"WAEB/AM ", 8)
            .unwrap();
        let mut buf = [0u8; same_core::constants::HEADER_BYTES_MAX];
        let len = serialize(&desc, &mut buf);
        len == header_len_for_locations(k)
    }

    #[test]
    fn eom_buffer_is_preamble_plus_nnnn() {
        let mut eom = [0u8; EOM_BYTES];
        for b in eom.iter_mut().take(PREAMBLE_COUNT) {
            *b = PREAMBLE_BYTE;
        }
        eom[PREAMBLE_COUNT..].copy_from_slice(ASCII_EOM.as_bytes());
        assert_eq!(eom.len(), EOM_BYTES);
        assert_eq!(&eom[PREAMBLE_COUNT..], b"NNNN");
    }
}

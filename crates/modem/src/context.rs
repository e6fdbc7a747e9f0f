//! The public, single-owner, heap-free `GenerationContext` and its chunk
//! driver — the Rust-idiomatic analogue of `context_init`/`samples_gen`.

use same_core::constants::{AFSK_BIT_RATE, ASCII_EOM, CHUNK_SAMPLES, EOM_BYTES, HEADER_BYTES_MAX, PREAMBLE_BYTE, PREAMBLE_COUNT};
use same_core::sine::{SineOracle, SineOracleKind};
use same_frame::header::HeaderDescriptor;
use same_frame::serialize::serialize;

use crate::afsk::{AfskModulator, AfskState};
use crate::attention::{AttentionToneGenerator, AttnState};
use crate::sequence::{phase_budgets, PhaseKind, SequencePhase};
use crate::silence::SilenceGenerator;
use crate::{ModemError, Result};

fn build_eom_buffer() -> [u8; EOM_BYTES] {
    let mut buf = [0u8; EOM_BYTES];
    for b in buf.iter_mut().take(PREAMBLE_COUNT) {
        *b = PREAMBLE_BYTE;
    }
    buf[PREAMBLE_COUNT..].copy_from_slice(ASCII_EOM.as_bytes());
    buf
}

/// Mutable, single-owner, heap-free generation state for one SAME
/// header/attention/EOM sequence.
pub struct GenerationContext {
    /// Output buffer for the current chunk. Always exactly
    /// [`CHUNK_SAMPLES`] long; only the first value returned by
    /// [`GenerationContext::generate`] samples are meaningful on the
    /// final, short chunk.
    pub sample_data: [i16; CHUNK_SAMPLES],

    header_bytes: [u8; HEADER_BYTES_MAX],
    header_len: usize,
    eom_bytes: [u8; EOM_BYTES],

    phase: SequencePhase,
    phase_remaining: [u64; 14],
    total_samples: u64,

    afsk: AfskState,
    attn: AttnState,

    sample_rate: f64,
    samples_per_bit: u32,

    oracle: SineOracle,
}

impl GenerationContext {
    /// Configures a fresh context from a [`HeaderDescriptor`] and sample
    /// rate. Computes the serialized header, samples-per-bit, and every
    /// per-phase sample budget. `sample_rate` must be positive; 44100 is
    /// the tested default.
    pub fn new(desc: &HeaderDescriptor, sample_rate: f64, oracle: SineOracle) -> Result<Self> {
        if sample_rate <= 0.0 {
            return Err(ModemError::InvalidSampleRate { rate: sample_rate });
        }

        let mut header_bytes = [0u8; HEADER_BYTES_MAX];
        let header_len = serialize(desc, &mut header_bytes);

        // Nearest-integer rounding, not rounding up — recommended by the
        // design notes for the 44100 Hz case where both give 85.
        let samples_per_bit = (sample_rate / AFSK_BIT_RATE).round() as u32;

        let phase_remaining = phase_budgets(header_len, samples_per_bit, sample_rate, desc.attn_sig_duration);
        let total_samples = phase_remaining.iter().sum();

        Ok(Self {
            sample_data: [0i16; CHUNK_SAMPLES],
            header_bytes,
            header_len,
            eom_bytes: build_eom_buffer(),
            phase: SequencePhase::AfskHeader1,
            phase_remaining,
            total_samples,
            afsk: AfskState::new(),
            attn: AttnState::new(),
            sample_rate,
            samples_per_bit,
            oracle,
        })
    }

    pub fn is_done(&self) -> bool {
        self.phase.is_done()
    }

    pub fn engine(&self) -> SineOracleKind {
        self.oracle.kind()
    }

    pub fn engine_description(&self) -> &'static str {
        self.oracle.kind().description()
    }

    pub fn samples_per_bit(&self) -> u32 {
        self.samples_per_bit
    }

    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Total number of samples this context will produce across its
    /// entire lifetime, computed once at construction from the per-phase
    /// sample budgets. Useful for sizing a progress reporter up front.
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    pub fn current_phase(&self) -> SequencePhase {
        self.phase
    }

    /// Fills `self.sample_data` with up to [`CHUNK_SAMPLES`] samples,
    /// returning the count actually written. Returns fewer than
    /// `CHUNK_SAMPLES` only when the final phase completes mid-chunk; the
    /// caller should stop invoking [`GenerationContext::generate`] once
    /// [`GenerationContext::is_done`] is true.
    ///
    /// Calling this again after termination is a usage error, guarded by
    /// a debug assertion (present in debug builds, compiled out in
    /// release) rather than a `Result`, matching the distilled spec's
    /// "otherwise absent" assertion semantics for hot-path misuse.
    pub fn generate(&mut self) -> usize {
        debug_assert!(!self.is_done(), "samples_gen called on a terminal context");

        let mut written = 0;
        while written < CHUNK_SAMPLES {
            if self.phase.is_done() {
                break;
            }

            let sample = match self.phase.kind() {
                PhaseKind::HeaderBurst => AfskModulator::next_sample(
                    &mut self.afsk,
                    &self.header_bytes[..self.header_len],
                    self.sample_rate,
                    self.samples_per_bit,
                    &mut self.oracle,
                ),
                PhaseKind::EomBurst => AfskModulator::next_sample(
                    &mut self.afsk,
                    &self.eom_bytes,
                    self.sample_rate,
                    self.samples_per_bit,
                    &mut self.oracle,
                ),
                PhaseKind::Attention => {
                    AttentionToneGenerator::next_sample(&mut self.attn, self.sample_rate, &mut self.oracle)
                }
                PhaseKind::Silence => SilenceGenerator::next_sample(),
                PhaseKind::Done => unreachable!("checked above"),
            };

            self.sample_data[written] = sample;
            written += 1;

            let idx = self.phase.index().expect("active phase always has a budget index");
            self.phase_remaining[idx] -= 1;
            if self.phase_remaining[idx] == 0 {
                self.advance_phase();
            }
        }

        written
    }

    fn advance_phase(&mut self) {
        self.afsk.reset();
        if self.phase.kind() == PhaseKind::Attention {
            self.attn.reset();
        }
        self.phase = self.phase.next();
    }
}

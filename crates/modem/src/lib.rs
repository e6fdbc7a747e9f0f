//! same-modem - AFSK/attention-tone synthesis and the SAME sequence state
//! machine
//!
//! This crate owns the incremental sample-generation engine: the AFSK
//! bit-to-sample synthesizer, the attention-tone and silence generators,
//! the 14-phase sequence state machine, and the public, heap-free
//! [`context::GenerationContext`] that drives them all.

pub mod afsk;
pub mod attention;
pub mod context;
pub mod error;
pub mod sequence;
pub mod silence;

pub use error::{ModemError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        afsk::{AfskModulator, AfskState},
        attention::{AttentionToneGenerator, AttnState},
        context::GenerationContext,
        error::{ModemError, Result},
        sequence::{PhaseKind, SequencePhase},
        silence::SilenceGenerator,
    };
}

//! same-core - protocol constants, sine oracle, and DSP primitives
//!
//! This crate provides the leaf-level building blocks for SAME header
//! generation: the protocol constants from 47 CFR §11.31, the pluggable
//! sine oracle (LIBC / LUT / TAYLOR / APP), and the sample buffer / FFT
//! wrappers used by the rest of the workspace and its tests.

pub mod buffer;
pub mod constants;
pub mod error;
pub mod fft;
pub mod sine;

pub use error::{CoreError, Result};
pub use sine::{init_lut, SineOracle, SineOracleKind};

/// One-time, process-wide setup. Populates the sine LUT (a no-op for
/// contexts that never select the LUT variant). Idempotent and race-free.
pub fn init() {
    sine::init_lut(constants::DEFAULT_LUT_SIZE);
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        buffer::{ComplexBuffer, SampleBuffer},
        constants::*,
        error::{CoreError, Result},
        fft::{FftConfig, FftProcessor},
        sine::{SineOracle, SineOracleKind},
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let result = 2 + 2;
        assert_eq!(result, 4);
    }
}

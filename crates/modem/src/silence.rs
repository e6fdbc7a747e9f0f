//! Silence generation between header/attention/EOM bursts.

/// Emits zero samples. Stateless.
pub struct SilenceGenerator;

impl SilenceGenerator {
    pub fn next_sample() -> i16 {
        0
    }
}

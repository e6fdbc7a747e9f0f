//! Pluggable sine sample generation.
//!
//! Four interchangeable implementations of "one signed 16-bit sample of
//! `sin(2π·f·t)` scaled to full range", selected at runtime and carried
//! inline inside a [`SineOracle`] — never behind a `dyn` vtable on the
//! per-sample hot path.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::constants::DEFAULT_LUT_SIZE;

/// One static, process-wide sine lookup table, populated exactly once.
static LUT: OnceLock<Vec<i16>> = OnceLock::new();

/// Populates the process-wide sine LUT if not already populated. Idempotent
/// and race-free (backed by [`OnceLock`]). Safe to call from multiple
/// contexts/threads; only the first caller actually computes the table.
pub fn init_lut(size: usize) {
    LUT.get_or_init(|| build_lut(size));
}

fn build_lut(size: usize) -> Vec<i16> {
    (0..size)
        .map(|k| {
            let phase = 2.0 * PI * (k as f64) / (size as f64);
            (phase.sin() * 32767.0).round() as i16
        })
        .collect()
}

fn lut_table() -> &'static [i16] {
    LUT.get_or_init(|| build_lut(DEFAULT_LUT_SIZE))
}

/// Which sine oracle variant a [`SineOracle`] is currently configured as.
/// Reported by `gen_engine_get`/`gen_engine_desc_get` analogues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SineOracleKind {
    Libc,
    Lut,
    Taylor,
    App,
}

impl SineOracleKind {
    pub fn description(&self) -> &'static str {
        match self {
            SineOracleKind::Libc => "libc sin() call",
            SineOracleKind::Lut => "quarter-wave-equivalent lookup table with phase accumulator",
            SineOracleKind::Taylor => "3-term odd-power Taylor polynomial",
            SineOracleKind::App => "caller-supplied callback",
        }
    }
}

/// Per-tone LUT-mode phase accumulator state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LutPhase {
    phase: f64,
}

impl LutPhase {
    /// Samples the LUT at the current phase (with linear interpolation),
    /// then advances the accumulator by `f * N / sample_rate`, reducing
    /// modulo `N` by repeated subtraction (never `%`/`fmod`) to preserve
    /// sub-integer phase.
    fn sample(&mut self, f: f64, sample_rate: f64) -> i16 {
        let table = lut_table();
        let n = table.len();
        let idx = self.phase.floor() as usize % n;
        let next_idx = (idx + 1) % n;
        let frac = self.phase - self.phase.floor();
        let a = table[idx] as f64;
        let b = table[next_idx] as f64;
        let interpolated = a + (b - a) * frac;

        self.phase += f * (n as f64) / sample_rate;
        while self.phase >= n as f64 {
            self.phase -= n as f64;
        }
        while self.phase < 0.0 {
            self.phase += n as f64;
        }

        interpolated.round() as i16
    }
}

/// A sealed set of interchangeable sine sample generators, carried inline
/// in [`crate`]-dependent state machines so a single build exercises all
/// variants without per-sample dynamic dispatch.
pub enum SineOracle {
    /// `round(sin(2π·f·t) · 32767)`. Stateless.
    Libc,
    /// Lookup table with a per-tone phase accumulator. Two fixed slots
    /// cover every caller: AFSK drives slot 0 only, the attention tone
    /// generator drives both. A fixed array (not a `Vec`) keeps the oracle
    /// itself free of any hot-path-adjacent heap allocation.
    Lut { phases: [LutPhase; 2] },
    /// 3-term odd-power Taylor polynomial with domain reduction into `[0, π]`.
    Taylor,
    /// Caller-supplied `(t, f) -> i16` callback.
    App { callback: Box<dyn FnMut(f64, f64) -> i16 + Send> },
}

impl SineOracle {
    /// Construct a LIBC-variant oracle.
    pub fn libc() -> Self {
        SineOracle::Libc
    }

    /// Construct a LUT-variant oracle with two independent phase
    /// accumulators (tone slots 0 and 1).
    pub fn lut() -> Self {
        init_lut(DEFAULT_LUT_SIZE);
        SineOracle::Lut {
            phases: [LutPhase::default(), LutPhase::default()],
        }
    }

    /// Construct a Taylor-series-variant oracle.
    pub fn taylor() -> Self {
        SineOracle::Taylor
    }

    /// Construct an APP-variant oracle around a caller-supplied callback.
    pub fn app(callback: Box<dyn FnMut(f64, f64) -> i16 + Send>) -> Self {
        SineOracle::App { callback }
    }

    pub fn kind(&self) -> SineOracleKind {
        match self {
            SineOracle::Libc => SineOracleKind::Libc,
            SineOracle::Lut { .. } => SineOracleKind::Lut,
            SineOracle::Taylor => SineOracleKind::Taylor,
            SineOracle::App { .. } => SineOracleKind::App,
        }
    }

    /// Produces one full-scale `i16` sample of `sin(2π·f·t)`, using `tone`
    /// to select which phase accumulator to advance in LUT mode (ignored by
    /// every other variant).
    pub fn sample(&mut self, tone: usize, t: f64, f: f64, sample_rate: f64) -> i16 {
        match self {
            SineOracle::Libc => libc_sine(t, f),
            SineOracle::Lut { phases } => phases[tone].sample(f, sample_rate),
            SineOracle::Taylor => taylor_sine(t, f),
            SineOracle::App { callback } => callback(t, f),
        }
    }
}

fn libc_sine(t: f64, f: f64) -> i16 {
    ((2.0 * PI * f * t).sin() * 32767.0).round() as i16
}

/// 3-term odd-power Taylor series: `x − x³/6 + x⁵/120 − x⁷/5040`, with the
/// argument reduced into `[0, π]` and the sign tracked separately. One
/// upstream source variant stubs this branch to return zero; that stub is
/// a bug and is not reproduced here (see the distilled spec's open
/// questions).
fn taylor_sine(t: f64, f: f64) -> i16 {
    let raw = 2.0 * PI * f * t;
    let mut sign = if raw < 0.0 { -1.0 } else { 1.0 };
    let mut x = raw.abs() % (2.0 * PI);
    if x >= PI {
        sign = -sign;
        x -= PI;
    }

    let x2 = x * x;
    let x3 = x2 * x;
    let x5 = x3 * x2;
    let x7 = x5 * x2;
    let approx = x - x3 / 6.0 + x5 / 120.0 - x7 / 5040.0;

    (sign * approx * 32767.0).round() as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn libc_and_taylor_agree_within_tolerance() {
        for i in 0..1000 {
            let t = i as f64 / 1000.0;
            let f = 1700.0;
            let libc = libc_sine(t, f);
            let taylor = taylor_sine(t, f);
            assert!(
                (libc as i32 - taylor as i32).abs() <= 700,
                "t={t} libc={libc} taylor={taylor}"
            );
        }
    }

    #[test]
    fn lut_tracks_libc_within_two_percent_full_scale() {
        init_lut(1024);
        let sample_rate = 44100.0;
        let tolerance = (0.02 * 32767.0) as i32;
        for f in [1562.5_f64, 2083.3] {
            let mut oracle = SineOracle::lut();
            for i in 0..200 {
                let t = i as f64 / sample_rate;
                let lut_sample = oracle.sample(0, t, f, sample_rate);
                let libc_sample = libc_sine(t, f);
                assert!(
                    (lut_sample as i32 - libc_sample as i32).abs() <= tolerance,
                    "f={f} t={t} lut={lut_sample} libc={libc_sample}"
                );
            }
        }
    }

    #[test]
    fn lut_phase_wraps_without_fmod_drift() {
        let mut phase = LutPhase::default();
        // Large frequency forces many wraps; this must not panic or NaN.
        for _ in 0..10_000 {
            let s = phase.sample(19000.0, 44100.0);
            let _ = s;
        }
        assert!(phase.phase >= 0.0 && phase.phase < 1024.0);
    }

    #[test]
    fn app_variant_invokes_callback() {
        let mut oracle = SineOracle::app(Box::new(|_t, _f| 1234));
        assert_eq!(oracle.sample(0, 0.0, 1000.0, 44100.0), 1234);
        assert_eq!(oracle.kind(), SineOracleKind::App);
    }

    /// Sine-oracle equivalence: for any `(t, f)` with `f` in the AFSK MARK/
    /// SPACE range and `t` in `[0, 1]`, LUT-mode tracks LIBC-mode within 2%
    /// of full scale at `N = 1024` with linear interpolation. Drives the LUT
    /// oracle sample-by-sample from `t = 0` (matching how the phase
    /// accumulator is actually advanced in `GenerationContext`) rather than
    /// seeking directly to an arbitrary `t`.
    #[quickcheck_macros::quickcheck]
    fn lut_matches_libc_within_tolerance_property(f_choice: bool, steps: u8) -> bool {
        init_lut(1024);
        let sample_rate = 44100.0;
        let tolerance = (0.02 * 32767.0) as i32;
        let f = if f_choice { 1562.5_f64 } else { 2083.3_f64 };
        let steps = (steps as usize % 50) + 1; // at least one step, within [0, 1] s at 44100 Hz easily

        let mut oracle = SineOracle::lut();
        for i in 0..steps {
            let t = i as f64 / sample_rate;
            let lut_sample = oracle.sample(0, t, f, sample_rate);
            let libc_sample = libc_sine(t, f);
            if (lut_sample as i32 - libc_sample as i32).abs() > tolerance {
                return false;
            }
        }
        true
    }
}

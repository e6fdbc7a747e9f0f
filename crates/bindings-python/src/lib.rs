//! Python bindings for SAME/EAS header generation.
//!
//! Exposes just enough of `same-frame`/`same-modem` to build a header
//! descriptor and drive the chunk generator from Python: construction is
//! fallible and raises `ValueError`, generation itself cannot fail once a
//! context exists (mirroring the Rust API's own fallibility split).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use same_core::constants::attn_sig_duration_bounds as core_attn_sig_duration_bounds;
use same_core::sine::SineOracle;
use same_frame::header::{HeaderDescriptor, LocationCode};
use same_modem::context::GenerationContext;

fn oracle_for(engine: &str) -> PyResult<SineOracle> {
    match engine.to_ascii_lowercase().as_str() {
        "libc" => Ok(SineOracle::libc()),
        "lut" => Ok(SineOracle::lut()),
        "taylor" => Ok(SineOracle::taylor()),
        other => Err(PyValueError::new_err(format!(
            "unknown sine engine {other:?}; expected one of \"libc\", \"lut\", \"taylor\""
        ))),
    }
}

/// A caller-provided, immutable description of a SAME header.
#[pyclass(name = "HeaderDescriptor")]
struct PyHeaderDescriptor {
    inner: HeaderDescriptor,
}

#[pymethods]
impl PyHeaderDescriptor {
    #[new]
    fn new(
        originator: &str,
        event: &str,
        locations: Vec<String>,
        valid_time: &str,
        originator_time: &str,
        callsign: &str,
        attn_sig_duration: u32,
    ) -> PyResult<Self> {
        let codes: Vec<LocationCode> = locations
            .iter()
            .map(|loc| {
                LocationCode::new(loc.as_bytes())
                    .map_err(|e| PyValueError::new_err(format!("invalid location code {loc:?}: {e}")))
            })
            .collect::<PyResult<_>>()?;

        let inner = HeaderDescriptor::new(
            originator.as_bytes(),
            event.as_bytes(),
            &codes,
            valid_time.as_bytes(),
            originator_time.as_bytes(),
            callsign.as_bytes(),
            attn_sig_duration,
        )
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self { inner })
    }

    fn location_count(&self) -> usize {
        self.inner.locations.len()
    }

    fn attn_sig_duration(&self) -> u32 {
        self.inner.attn_sig_duration
    }
}

/// Drives the incremental chunk generator for one header/attention/EOM
/// sequence. Each call to `generate()` returns the next chunk of signed
/// 16-bit PCM samples as a Python list; `is_done()` reports termination.
#[pyclass(name = "GenerationContext")]
struct PyGenerationContext {
    inner: GenerationContext,
}

#[pymethods]
impl PyGenerationContext {
    #[new]
    #[pyo3(signature = (descriptor, sample_rate, engine="libc"))]
    fn new(descriptor: &PyHeaderDescriptor, sample_rate: f64, engine: &str) -> PyResult<Self> {
        let oracle = oracle_for(engine)?;
        let inner = GenerationContext::new(&descriptor.inner, sample_rate, oracle)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Produces the next chunk of samples, returning fewer than
    /// `CHUNK_SAMPLES` only on the final call before termination.
    fn generate(&mut self) -> Vec<i16> {
        let n = self.inner.generate();
        self.inner.sample_data[..n].to_vec()
    }

    fn is_done(&self) -> bool {
        self.inner.is_done()
    }

    fn samples_per_bit(&self) -> u32 {
        self.inner.samples_per_bit()
    }

    fn header_len(&self) -> usize {
        self.inner.header_len()
    }

    fn engine_description(&self) -> &'static str {
        self.inner.engine_description()
    }
}

/// Returns the caller-bounded attention signal duration range `(min, max)`.
#[pyfunction]
fn attn_sig_duration_bounds() -> (u32, u32) {
    core_attn_sig_duration_bounds()
}

/// One-time process-wide setup (populates the sine LUT). Idempotent; safe
/// to call more than once or not at all — the LUT variant self-initializes
/// on first use regardless.
#[pyfunction]
fn init() {
    same_core::init();
}

/// SAME/EAS header generation bindings.
#[pymodule]
fn same_py(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyHeaderDescriptor>()?;
    m.add_class::<PyGenerationContext>()?;
    m.add_function(wrap_pyfunction!(attn_sig_duration_bounds, m)?)?;
    m.add_function(wrap_pyfunction!(init, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("CHUNK_SAMPLES", same_core::constants::CHUNK_SAMPLES)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_for_rejects_unknown_engine() {
        assert!(oracle_for("bogus").is_err());
    }

    #[test]
    fn oracle_for_accepts_known_engines() {
        assert!(oracle_for("libc").is_ok());
        assert!(oracle_for("lut").is_ok());
        assert!(oracle_for("taylor").is_ok());
        assert!(oracle_for("LIBC").is_ok());
    }
}

//! Builds a [`HeaderDescriptor`] from a [`GenConfig`] and renders its full
//! AFSK/attention/EOM sequence to a WAV file, chunk by chunk.

use anyhow::{Context, Result};
use std::path::Path;

use same_core::sine::SineOracle;
use same_frame::header::{HeaderDescriptor, LocationCode};
use same_modem::context::GenerationContext;

use crate::config::{GenConfig, SineEngine};
use crate::common::ProgressReporter;

/// Builds the header descriptor for a [`GenConfig`], validating every
/// fixed-width field and location count through [`HeaderDescriptor::new`].
pub fn build_header(config: &GenConfig) -> Result<HeaderDescriptor> {
    let locations: Vec<LocationCode> = config
        .locations
        .iter()
        .map(|loc| {
            LocationCode::new(loc.as_bytes()).with_context(|| format!("invalid location code: {loc:?}"))
        })
        .collect::<Result<_>>()?;

    HeaderDescriptor::new(
        config.originator.as_bytes(),
        config.event.as_bytes(),
        &locations,
        config.valid_time.as_bytes(),
        config.originator_time.as_bytes(),
        config.callsign.as_bytes(),
        config.attn_sig_duration,
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

fn oracle_for(engine: SineEngine) -> SineOracle {
    match engine {
        SineEngine::Libc => SineOracle::libc(),
        SineEngine::Lut => SineOracle::lut(),
        SineEngine::Taylor => SineOracle::taylor(),
    }
}

/// Renders the full header/attention/EOM sequence described by `config`
/// to a 16-bit mono WAV file at `config.sample_rate`.
pub fn render_to_wav(config: &GenConfig, verbose: bool) -> Result<u64> {
    let descriptor = build_header(config)?;
    let oracle = oracle_for(config.engine);
    let mut ctx = GenerationContext::new(&descriptor, config.sample_rate, oracle)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: config.sample_rate.round() as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&config.output_file, spec)
        .with_context(|| format!("failed to create WAV file: {:?}", config.output_file))?;

    let mut reporter = ProgressReporter::new(ctx.total_samples(), verbose);
    let mut total_written: u64 = 0;

    while !ctx.is_done() {
        let n = ctx.generate();
        for &sample in &ctx.sample_data[..n] {
            writer.write_sample(sample)?;
        }
        total_written += n as u64;
        reporter.update(total_written);
    }
    reporter.complete();

    writer.finalize()?;
    tracing::info!("wrote {} samples to {:?}", total_written, config.output_file);

    Ok(total_written)
}

/// Reads a previously rendered WAV file back as signed 16-bit samples.
pub fn read_wav(path: &Path) -> Result<Vec<i16>> {
    let mut reader = hound::WavReader::open(path)
        .with_context(|| format!("failed to open WAV file: {:?}", path))?;

    let samples: std::result::Result<Vec<i16>, _> = reader.samples::<i16>().collect();
    samples.context("failed to read audio samples")
}

//! same-gen - render a SAME/EAS header/attention/EOM burst sequence to a
//! WAV file

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use same_tools::config::{GenConfig, SineEngine};
use same_tools::{init_logging, render_to_wav, GlobalConfig};

/// Render a SAME header burst sequence to a WAV file.
#[derive(Parser)]
#[command(name = "same-gen")]
#[command(about = "Render a SAME/EAS header, attention tone, and EOM sequence to WAV")]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalConfig,

    /// Load all other options from a TOML config file, ignoring the rest
    /// of the command line except `--verbose`.
    #[arg(long)]
    pub from_config: Option<PathBuf>,

    /// Output WAV file path
    #[arg(short, long, default_value = "same.wav")]
    pub output: PathBuf,

    /// Three-letter originator code (e.g. WXR, CIV, EAS)
    #[arg(long, default_value = "WXR")]
    pub originator: String,

    /// Three-letter event code (e.g. TOR, SVR, RWT)
    #[arg(long, default_value = "TOR")]
    pub event: String,

    /// Six-digit PSSCCC location codes, repeatable (1 to 31)
    #[arg(long = "location", required_unless_present = "from_config")]
    pub locations: Vec<String>,

    /// Four-digit valid time period (e.g. 0+0015, here just "0015")
    #[arg(long, default_value = "1000")]
    pub valid_time: String,

    /// Seven-digit originator time (JJJHHMM)
    #[arg(long, required_unless_present = "from_config")]
    pub originator_time: Option<String>,

    /// Eight-character station callsign, space-padded
    #[arg(long, required_unless_present = "from_config")]
    pub callsign: Option<String>,

    /// Attention-signal duration in seconds (8 to 25)
    #[arg(long, default_value_t = 8)]
    pub attn_sig_duration: u32,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 44100.0)]
    pub sample_rate: f64,

    /// Sine-wave generation engine
    #[arg(long, value_enum, default_value = "libc")]
    pub engine: EngineArg,

    /// Print progress every 10% of samples written
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum EngineArg {
    Libc,
    Lut,
    Taylor,
}

impl From<EngineArg> for SineEngine {
    fn from(e: EngineArg) -> Self {
        match e {
            EngineArg::Libc => SineEngine::Libc,
            EngineArg::Lut => SineEngine::Lut,
            EngineArg::Taylor => SineEngine::Taylor,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.global)?;

    let config = if let Some(path) = &args.from_config {
        GenConfig::from_file(path).with_context(|| format!("loading {path:?}"))?
    } else {
        GenConfig {
            output_file: args.output.clone(),
            originator: args.originator.clone(),
            event: args.event.clone(),
            locations: args.locations.clone(),
            valid_time: args.valid_time.clone(),
            originator_time: args
                .originator_time
                .clone()
                .context("--originator-time is required without --from-config")?,
            callsign: args
                .callsign
                .clone()
                .context("--callsign is required without --from-config")?,
            attn_sig_duration: args.attn_sig_duration,
            sample_rate: args.sample_rate,
            engine: args.engine.into(),
        }
    };

    tracing::info!(
        originator = %config.originator,
        event = %config.event,
        locations = config.locations.len(),
        "generating SAME header sequence"
    );

    let written = render_to_wav(&config, args.verbose)?;
    println!("wrote {written} samples to {:?}", config.output_file);

    Ok(())
}

//! same-info - report engine capabilities, protocol constants, and build
//! version information

use clap::Parser;

use same_core::constants::{attn_sig_duration_bounds, header_len_for_locations, AFSK_BIT_RATE, AFSK_MARK_FREQ, AFSK_SPACE_FREQ, ATTN_FREQ_A, ATTN_FREQ_B, LOCATION_CODES_MAX};
use same_core::sine::SineOracleKind;

#[derive(Parser)]
#[command(name = "same-info")]
#[command(about = "Show SAME/EAS protocol constants and engine capabilities")]
struct Args {
    /// Print the header length in bytes for a given number of locations
    #[arg(long)]
    locations: Option<usize>,
}

fn main() {
    let args = Args::parse();
    let build = same_build_helpers::get_version_info();

    println!("same-tools {}", build.version);
    if let Some(hash) = &build.git_hash {
        println!("  git: {hash}");
    }

    println!("\nProtocol constants:");
    println!("  AFSK bit rate:      {AFSK_BIT_RATE} baud");
    println!("  AFSK mark tone:     {AFSK_MARK_FREQ} Hz");
    println!("  AFSK space tone:    {AFSK_SPACE_FREQ} Hz");
    println!("  Attention tones:    {ATTN_FREQ_A} Hz + {ATTN_FREQ_B} Hz");
    let (min, max) = attn_sig_duration_bounds();
    println!("  Attention duration: {min}-{max} s");
    println!("  Max locations:      {LOCATION_CODES_MAX}");

    println!("\nSine oracles:");
    for kind in [SineOracleKind::Libc, SineOracleKind::Lut, SineOracleKind::Taylor, SineOracleKind::App] {
        println!("  {:?}: {}", kind, kind.description());
    }

    if let Some(k) = args.locations {
        println!("\nheader_len_for_locations({k}) = {}", header_len_for_locations(k));
    }
}

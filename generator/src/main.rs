use clap::Parser;
use std::path::PathBuf;
use wavecore::waveform::WaveformRequest;
use workflow::plan::BuildPlan;
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Waveform file generator for AWG test fixtures")]
struct Args {
    /// Number of samples in the waveform
    sample_count: usize,
    /// Comma-separated frequency factors layered over the base tone
    #[arg(value_delimiter = ',', required_unless_present = "dc")]
    frequency_factors: Vec<f64>,
    /// Peak value of the waveform
    #[arg(long, default_value_t = 32767)]
    amplitude: i32,
    /// Normalize the waveform onto the full amplitude range
    #[arg(short = 'n', long, default_value_t = false)]
    normalize: bool,
    /// Generate a DC waveform and ignore frequency factors
    #[arg(long, default_value_t = false)]
    dc: bool,
    /// Destination path; derived from the request when omitted.
    /// A `.bin` suffix selects binary output.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let request = WaveformRequest {
        sample_count: args.sample_count,
        frequency_factors: args.frequency_factors,
        amplitude: args.amplitude,
        normalize: args.normalize,
        dc_mode: args.dc,
    };

    let plan = BuildPlan::new(request, args.output);
    let runner = Runner::new(plan);
    let summary = runner.execute()?;

    println!("Waveform written to {}", summary.destination.display());
    Ok(())
}

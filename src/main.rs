use clap::Parser;
use glicko2_processor::{
    args::Args,
    model::{
        config::RatingConfig,
        glicko_model::Glicko2Model,
        period_processor::{load_config, load_period, PeriodProcessor}
    }
};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RatingConfig::default()
    };
    if let Some(tau) = args.tau {
        config.tau = tau;
    }

    let model = Glicko2Model::new(config)?;
    info!(tau = model.config.tau, input = %args.input.display(), "Loading rating period");

    let period = load_period(&args.input)?;
    let ratings = PeriodProcessor::new(model, args.mode)
        .with_progress(args.progress)
        .process(&period)?;

    println!("{}", serde_json::to_string_pretty(&ratings)?);
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use crate::model::structures::processing_mode::ProcessingMode;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Glicko-2 Processor",
    long_about = "Computes Glicko-2 rating updates for the players and matches of a rating period"
)]
pub struct Args {
    /// Path to a JSON rating period document, for example:
    ///
    /// {"players": {"alice": {"rating": 1500, "deviation": 200, "volatility": 0.06}, "bob": null},
    ///  "matches": [{"player": "alice", "opponent": "bob", "score": 1}]}
    ///
    /// Players mapped to null are unrated and start from 1500 / 350 / 0.06.
    #[arg(short, long, env = "GLICKO_INPUT", help = "Rating period JSON file")]
    pub input: PathBuf,

    /// JSON rating config (tau, convergence_tolerance, max_iterations,
    /// max_bracket_expansions). Missing fields keep their defaults.
    #[arg(short, long, env = "GLICKO_CONFIG", help = "Rating config JSON file")]
    pub config: Option<PathBuf>,

    /// Constrains the change in volatility over time. Reasonable values lie between 0.3 and 1.2.
    /// Overrides the tau from --config; defaults to 0.2 when neither is given.
    #[arg(short, long, env = "GLICKO_TAU", help = "System constant tau")]
    pub tau: Option<f64>,

    /// period: every player is rated once against all of their matches.
    /// sequential: matches are applied one at a time to both players.
    #[arg(short, long, value_enum, default_value_t = ProcessingMode::Period)]
    pub mode: ProcessingMode,

    /// Shows a progress bar on stderr
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub progress: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["glicko2-processor", "--input", "period.json"]).unwrap();

        assert_eq!(args.input, PathBuf::from("period.json"));
        assert_eq!(args.mode, ProcessingMode::Period);
        assert_eq!(args.config, None);
        assert!(!args.progress);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "glicko2-processor",
            "-i",
            "period.json",
            "--tau",
            "0.5",
            "--mode",
            "sequential",
            "--log-level",
            "warn"
        ])
        .unwrap();

        assert_eq!(args.tau, Some(0.5));
        assert_eq!(args.mode, ProcessingMode::Sequential);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_config_path() {
        let args = Args::try_parse_from(["glicko2-processor", "-i", "period.json", "-c", "rating.json"]).unwrap();

        assert_eq!(args.config, Some(PathBuf::from("rating.json")));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let result = Args::try_parse_from(["glicko2-processor", "-i", "period.json", "--mode", "pairwise"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}

use crate::commands::{configure, model, predict};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bedtimer")]
#[command(about = "A Rust-based bedtime prediction tool")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Predict(args) => {
                predict::handle_predict_command(config, &args)?;
            }
            Commands::Model => {
                model::handle_model_command(config)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command.clone())?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict a recommended bedtime
    Predict(PredictArgs),

    /// Show the loaded regression model
    Model,

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct PredictArgs {
    #[arg(short, long, help = "Desired wake-up time, e.g. 07:00 or 7:00 am")]
    pub wake: Option<String>,

    #[arg(short, long, help = "Desired amount of sleep in hours (4 to 12, steps of 0.25)")]
    pub sleep: Option<f64>,

    #[arg(short = 'C', long, help = "Daily coffee intake in cups (1 to 20)")]
    pub coffee: Option<u32>,

    #[arg(short, long)]
    pub format: Option<PredictFormat>,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum PredictFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_args_parsing() {
        let cli = Cli::try_parse_from([
            "bedtimer", "predict", "--wake", "06:30", "--sleep", "7.5", "--coffee", "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Predict(args) => {
                assert_eq!(args.wake, Some("06:30".to_string()));
                assert_eq!(args.sleep, Some(7.5));
                assert_eq!(args.coffee, Some(3));
                assert!(args.format.is_none());
            }
            _ => panic!("expected predict command"),
        }
    }

    #[test]
    fn test_predict_args_all_optional() {
        let cli = Cli::try_parse_from(["bedtimer", "predict"]).unwrap();
        match cli.command {
            Commands::Predict(args) => {
                assert!(args.wake.is_none());
                assert!(args.sleep.is_none());
                assert!(args.coffee.is_none());
            }
            _ => panic!("expected predict command"),
        }
    }

    #[test]
    fn test_json_format_flag() {
        let cli =
            Cli::try_parse_from(["bedtimer", "predict", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Predict(args) => {
                assert!(matches!(args.format, Some(PredictFormat::Json)));
            }
            _ => panic!("expected predict command"),
        }
    }
}

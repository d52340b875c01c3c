//! Command line arguments for both tools.

use clap::Parser;
use std::path::PathBuf;

use traj_render::{ConfigError, PlotConfig};

/// Trajectory animation
#[derive(Parser, Debug, Clone)]
#[command(name = "trajplot")]
#[command(about = "Animate entity trajectories from a simulation results CSV")]
pub struct PlotArgs {
    /// Save the animation instead of writing a still preview
    #[arg(short = 's', long = "save")]
    pub save: bool,

    /// Results CSV to read (overrides the config file)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file: the animation with -s, the preview otherwise
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// TOML plot configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Substring identifying entity columns
    #[arg(long)]
    pub entity_pattern: Option<String>,
}

impl PlotArgs {
    /// Loads the config file (or defaults) and applies flag overrides.
    pub fn resolve_config(&self) -> Result<PlotConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => PlotConfig::from_file(path)?,
            None => PlotConfig::default(),
        };

        if let Some(input) = &self.input {
            config.data.input = input.clone();
        }
        if let Some(pattern) = &self.entity_pattern {
            config.data.entity_pattern = pattern.clone();
        }
        if let Some(output) = &self.output {
            if self.save {
                config.animation.output = output.clone();
            } else {
                config.animation.preview_output = output.clone();
            }
        }

        Ok(config)
    }
}

/// Synthetic 3D demo plot
#[derive(Parser, Debug, Clone)]
#[command(name = "trajdemo")]
#[command(about = "Echo a CSV file and render a synthetic 3D helix demo plot")]
pub struct DemoArgs {
    /// CSV file to echo
    #[arg(long, default_value = "test.csv")]
    pub input: PathBuf,

    /// PNG to write
    #[arg(long, default_value = "trajectory_demo.png")]
    pub output: PathBuf,

    /// Random seed for the scatter cloud
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// TOML plot configuration (canvas and style sections apply)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl DemoArgs {
    pub fn resolve_config(&self) -> Result<PlotConfig, ConfigError> {
        match &self.config {
            Some(path) => PlotConfig::from_file(path),
            None => Ok(PlotConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_save_flag() {
        let args = PlotArgs::try_parse_from(["trajplot", "-s"]).unwrap();
        assert!(args.save);

        let args = PlotArgs::try_parse_from(["trajplot"]).unwrap();
        assert!(!args.save);
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = PlotArgs::try_parse_from(["trajplot", "-x"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unexpected_positional_is_usage_error() {
        let err = PlotArgs::try_parse_from(["trajplot", "results.csv"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_defaults_without_config() {
        let args = PlotArgs::try_parse_from(["trajplot"]).unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(config, PlotConfig::default());
    }

    #[test]
    fn test_output_override_follows_save_flag() {
        let args =
            PlotArgs::try_parse_from(["trajplot", "-s", "--output", "run.gif"]).unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(config.animation.output, PathBuf::from("run.gif"));

        let args = PlotArgs::try_parse_from(["trajplot", "--output", "still.png"]).unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(config.animation.preview_output, PathBuf::from("still.png"));
        assert_eq!(config.animation.output, PathBuf::from("trajectory_animation.gif"));
    }

    #[test]
    fn test_input_and_pattern_overrides() {
        let args = PlotArgs::try_parse_from([
            "trajplot",
            "--input",
            "runs/cw.csv",
            "--entity-pattern",
            "Target",
        ])
        .unwrap();
        let config = args.resolve_config().unwrap();

        assert_eq!(config.data.input, PathBuf::from("runs/cw.csv"));
        assert_eq!(config.data.entity_pattern, "Target");
    }

    #[test]
    fn test_demo_defaults() {
        let args = DemoArgs::try_parse_from(["trajdemo"]).unwrap();

        assert_eq!(args.input, PathBuf::from("test.csv"));
        assert_eq!(args.output, PathBuf::from("trajectory_demo.png"));
        assert_eq!(args.seed, 42);
    }
}

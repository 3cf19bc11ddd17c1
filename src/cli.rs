// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "wavefolio")]
#[command(about = "Section navigator over an animated wireframe wave", long_about = None)]
pub struct Cli {
    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Faster camera and wave motion (disables smooth transitions)
    #[arg(long)]
    pub snappy: bool,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Show frame statistics in the overlay
    #[arg(long)]
    pub stats: bool,

    /// JSON settings file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective settings as JSON and exit
    #[arg(long = "print-config")]
    pub print_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["wavefolio"]);
        assert!(!cli.dark);
        assert!(!cli.snappy);
        assert!(!cli.no_ui);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "wavefolio",
            "--dark",
            "--snappy",
            "--no-ui",
            "--stats",
            "--config",
            "settings.json",
        ]);
        assert!(cli.dark && cli.snappy && cli.no_ui && cli.stats);
        assert_eq!(cli.config, Some(PathBuf::from("settings.json")));
    }
}

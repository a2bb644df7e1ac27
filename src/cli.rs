//! Command-line interface for the console game.

use clap::Parser;

/// Console tic-tac-toe: pass-and-play or against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Seed for the computer's moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer think time in milliseconds (0 disables the pause)
    #[arg(long)]
    pub think_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.config, std::path::PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.seed, None);
        assert_eq!(cli.think_ms, None);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--seed",
            "3",
            "--think-ms",
            "0",
            "-c",
            "x.toml",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(3));
        assert_eq!(cli.think_ms, Some(0));
        assert_eq!(cli.config, std::path::PathBuf::from("x.toml"));
    }
}

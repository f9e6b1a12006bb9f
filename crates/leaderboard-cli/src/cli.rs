use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "leaderboard")]
#[command(about = "Score log and leaderboard for the paddle game")]
pub struct Cli {
    /// TOML config file (missing file means defaults)
    #[arg(short, long, default_value = "leaderboard.toml", env = "LEADERBOARD_CONFIG")]
    pub config: PathBuf,

    /// Directory holding the leaderboard file (overrides the config)
    #[arg(long, env = "LEADERBOARD_SCORES_DIR")]
    pub scores_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a finished run and show where it landed
    Save {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, allow_hyphen_values = true)]
        score: f64,

        /// Steps played in the run
        #[arg(long, default_value_t = 0)]
        steps: u64,
    },
    /// Show the average score and the top 10
    Board {
        /// Also report the rank of this score
        #[arg(short, long, allow_hyphen_values = true)]
        score: Option<f64>,

        /// Also report the best standing of this player
        #[arg(short, long)]
        player: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Export every ranked entry
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List stored runs in the order they were played
    History {
        /// Only runs by this player
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Score a recorded session (`action,reward,done` per line) and save it
    Replay {
        #[arg(short, long)]
        name: String,

        /// Session file
        #[arg(short, long)]
        input: PathBuf,

        /// Step budget counted from the first FIRE (<= 0 is free play)
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        steps: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_save() {
        let cli = Cli::try_parse_from([
            "leaderboard", "save", "--name", "Alice", "--score", "30", "--steps", "500",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("leaderboard.toml"));
        match cli.command {
            Command::Save { name, score, steps } => {
                assert_eq!(name, "Alice");
                assert_eq!(score, 30.0);
                assert_eq!(steps, 500);
            }
            _ => panic!("expected save"),
        }
    }

    #[test]
    fn test_parse_save_negative_score() {
        let cli =
            Cli::try_parse_from(["leaderboard", "save", "-n", "Bob", "-s", "-2.5"]).unwrap();
        match cli.command {
            Command::Save { score, steps, .. } => {
                assert_eq!(score, -2.5);
                assert_eq!(steps, 0);
            }
            _ => panic!("expected save"),
        }
    }

    #[test]
    fn test_parse_board_json() {
        let cli = Cli::try_parse_from([
            "leaderboard",
            "--scores-dir",
            "runs",
            "board",
            "--score",
            "45",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.scores_dir, Some(PathBuf::from("runs")));
        match cli.command {
            Command::Board {
                score,
                player,
                format,
            } => {
                assert_eq!(score, Some(45.0));
                assert_eq!(player, None);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected board"),
        }
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from([
            "leaderboard", "replay", "-n", "Bob", "-i", "run.txt", "--steps", "-5",
        ])
        .unwrap();
        match cli.command {
            Command::Replay { name, input, steps } => {
                assert_eq!(name, "Bob");
                assert_eq!(input, PathBuf::from("run.txt"));
                assert_eq!(steps, -5);
            }
            _ => panic!("expected replay"),
        }

        let cli = Cli::try_parse_from(["leaderboard", "replay", "-n", "Bob", "-i", "run.txt"])
            .unwrap();
        assert!(matches!(cli.command, Command::Replay { steps: -1, .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric_score() {
        assert!(Cli::try_parse_from(["leaderboard", "save", "-n", "A", "-s", "lots"]).is_err());
    }
}

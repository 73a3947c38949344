use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis match statistics")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the report server
    Serve {
        /// Port number (defaults to the configured server port, 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Store a scraped batch (JSON) in the database
    Import {
        /// Path to the scraped batch file
        file: PathBuf,
    },
    /// Print a player's statistics and write the HTML report
    Report {
        /// Player name exactly as stored
        player: String,
        /// First match date to include, YYYY-MM-DD (defaults to 2018-01-01)
        #[arg(short, long)]
        start: Option<NaiveDate>,
        /// Last match date to include, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        end: Option<NaiveDate>,
        /// HTML output path (defaults to analyses/<player>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remove duplicate match rows
    Dedup,
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_with_range() {
        let cli = Cli::try_parse_from([
            "tennis_match_stats",
            "report",
            "Anna de Vries",
            "--start",
            "2022-01-01",
            "-e",
            "2022-12-31",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Command::Report {
                player: "Anna de Vries".to_string(),
                start: NaiveDate::from_ymd_opt(2022, 1, 1),
                end: NaiveDate::from_ymd_opt(2022, 12, 31),
                output: None,
            }
        );
    }

    #[test]
    fn test_serve_without_port() {
        let cli = Cli::try_parse_from(["tennis_match_stats", "serve"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: None });
    }

    #[test]
    fn test_serve_explicit_port() {
        let cli = Cli::try_parse_from(["tennis_match_stats", "serve", "-p", "8080"]).unwrap();
        assert_eq!(cli.command, Command::Serve { port: Some(8080) });
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let result = Cli::try_parse_from(["tennis_match_stats", "report", "Anna", "--start", "01/02/2022"]);
        assert!(result.is_err());
    }
}

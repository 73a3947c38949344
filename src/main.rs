use anyhow::Result;

use tennis_match_stats::cli::Command;
use tennis_match_stats::{
    handle_completions, handle_dedup, handle_import, handle_report, handle_serve, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Import { file } => handle_import(file),
        Command::Report {
            player,
            start,
            end,
            output,
        } => handle_report(player, *start, *end, output.as_deref()),
        Command::Dedup => handle_dedup(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

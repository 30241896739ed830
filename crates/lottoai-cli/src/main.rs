#![forbid(unsafe_code)]

mod cmd;
mod config;
mod history;
mod output;

use clap::{CommandFactory, Parser, Subcommand};
use history::{JsonFileHistory, MemoryHistory};
use output::{CliError, OutputMode};
use std::env;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "lottoai: personal Lotto/SuperEnalotto combinations and numerology profiles",
    long_about = "Deterministic, for entertainment only: the same name, birth date, day and game \
                  always give the same numbers. Nothing leaves this machine."
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Generate the personal combination",
        long_about = "Generate the combination for a name, birth date, reference date and game.",
        after_help = "EXAMPLES:\n    # Today's Lotto numbers\n    lottoai generate \"Mario Rossi\" --dob 1980-05-12\n\n    # SuperEnalotto for a given day, saved to history\n    lottoai generate \"Mario Rossi\" --dob 1980-05-12 --date 2024-01-01 --game superenalotto --save\n\n    # Emit machine-readable output\n    lottoai generate \"Mario Rossi\" --dob 1980-05-12 --json"
    )]
    Generate(cmd::generate::GenerateArgs),

    #[command(
        about = "Show the numerology profile",
        long_about = "Compute Life Path, Expression, Soul Urge, Personality, Day Number and Personal Year.",
        after_help = "EXAMPLES:\n    lottoai profile \"Mario Rossi\" --dob 1980-05-12\n    lottoai profile \"Mario Rossi\" --dob 1980-05-12 --date 2030-01-01 --json"
    )]
    Profile(cmd::profile::ProfileArgs),

    #[command(about = "Manage saved combinations")]
    History {
        #[command(subcommand)]
        command: cmd::history::HistoryCommand,
    },

    #[command(
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    lottoai completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("LOTTOAI_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "lottoai=debug,info"
        } else {
            "lottoai=info,warn"
        })
    });

    let format = env::var("LOTTOAI_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli, output: OutputMode, user_config: &config::UserConfig) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(ref args) => {
            let game = user_config.generate.game;
            if args.save {
                let mut store = JsonFileHistory::new(config::history_path(user_config)?);
                cmd::generate::run_generate(args, game, &mut store, output)
            } else {
                cmd::generate::run_generate(args, game, &mut MemoryHistory::default(), output)
            }
        }
        Commands::Profile(ref args) => cmd::profile::run_profile(args, output),
        Commands::History { ref command } => {
            let mut store = JsonFileHistory::new(config::history_path(user_config)?);
            debug!(path = %store.path().display(), "history store");
            cmd::history::run_history(command, &mut store, output)
        }
        Commands::Completions(args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let user_config = match config::load_user_config() {
        Ok(cfg) => cfg,
        Err(err) => {
            let mode = output::resolve_output_mode(cli.format, cli.json, None);
            let cli_err = CliError::with_code(
                format!("{err:#}"),
                lottoai_core::ErrorCode::ConfigParseError,
            );
            let _ = output::render_error(mode, &cli_err);
            return ExitCode::FAILURE;
        }
    };

    let output =
        output::resolve_output_mode(cli.format, cli.json, user_config.output.as_deref());
    if cli.verbose {
        info!(?output, "verbose mode enabled");
    }

    match run(cli, output, &user_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(error = ?err, "command failed");
            let _ = output::render_error(output, &CliError::from_anyhow(&err));
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_flag_parses_before_subcommand() {
        let cli = Cli::parse_from(["lottoai", "--json", "profile", "Mario", "--dob", "1980-05-12"]);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Profile(_)));
    }

    #[test]
    fn format_flag_after_subcommand() {
        let cli = Cli::parse_from([
            "lottoai",
            "generate",
            "Mario Rossi",
            "--dob",
            "1980-05-12",
            "--format",
            "text",
        ]);
        assert_eq!(cli.format, Some(OutputMode::Text));
    }

    #[test]
    fn generate_flags_parse() {
        let cli = Cli::parse_from([
            "lottoai",
            "generate",
            "Mario Rossi",
            "--dob",
            "1980-05-12",
            "--date",
            "2024-01-01",
            "--game",
            "superenalotto",
            "--save",
            "--profile",
        ]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.name, "Mario Rossi");
        assert_eq!(args.date.as_deref(), Some("2024-01-01"));
        assert_eq!(args.game.as_deref(), Some("superenalotto"));
        assert!(args.save && args.profile);
    }

    #[test]
    fn history_remove_takes_index() {
        let cli = Cli::parse_from(["lottoai", "history", "remove", "2"]);
        let Commands::History {
            command: cmd::history::HistoryCommand::Remove(args),
        } = cli.command
        else {
            panic!("expected history remove");
        };
        assert_eq!(args.index, 2);
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}

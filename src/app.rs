//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the round pipeline (generate + score)
//! - prints summaries/plots or hands over to the TUI
//! - writes optional exports
//! - calls the feedback narrator when asked

use clap::Parser;

use crate::cli::{Command, PlotArgs, RoundArgs};
use crate::domain::{NarratorConfig, SessionConfig, UserEstimate};
use crate::error::AppError;
use crate::narrator::NarratorClient;

pub mod pipeline;

/// Entry point for the `bell` binary.
pub fn run() -> Result<(), AppError> {
    // `bell` and `bell --seed 7` should behave like `bell tui ...`, but clap
    // requires a subcommand name. Rewrite the argv list explicitly before
    // parsing instead of fighting clap with default-subcommand tricks.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Tui(args) => crate::tui::run(args),
        Command::Check(args) => {
            init_logging();
            handle_check(args)
        }
        Command::Plot(args) => {
            init_logging();
            handle_plot(args)
        }
    }
}

/// Install the tracing subscriber for non-TUI commands.
///
/// Logs go to stderr so piped summaries/plots stay clean; the TUI skips this
/// entirely because the alternate screen owns the terminal.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_check(args: RoundArgs) -> Result<(), AppError> {
    let config = session_config_from_args(&args);
    let estimate = UserEstimate::new(args.center, args.spread);
    let round = pipeline::run_round(&config, estimate)?;

    print!(
        "{}",
        crate::report::format_check_summary(&round.dataset, round.estimate, &round.score, &config)
    );
    if config.reveal {
        print!(
            "{}",
            crate::report::format_reveal(round.empirical, round.dataset.truth)
        );
    }

    println!("{}", crate::report::canned_message(&round.score));

    // The narrator only elaborates on failures; a pass keeps the canned
    // congratulation. Narrator trouble degrades to a visible line, never an
    // aborted check.
    if config.narrate && !round.score.verdict.is_pass() {
        match narrate(&config, &round) {
            Ok(text) => println!("\n{text}"),
            Err(err) => println!("\nNarrator unavailable: {err}"),
        }
    }

    if config.plot {
        let plot = crate::plot::render_ascii_plot(
            &round.histogram,
            &round.curve,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_samples {
        crate::io::write_samples_csv(path, &round.dataset)?;
    }
    if let Some(path) = &config.export_round {
        crate::io::write_round_json(path, &pipeline::to_round_file(&round))?;
    }

    Ok(())
}

fn narrate(config: &SessionConfig, round: &pipeline::RoundOutput) -> Result<String, AppError> {
    let client = NarratorClient::from_env(config.narrator.clone())?;
    client.narrate(round.estimate, round.empirical, &round.score)
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let round = crate::io::read_round_json(&args.round)?;

    let plot = crate::plot::render_ascii_plot_from_round_file(&round, args.width, args.height);

    println!("{plot}");
    Ok(())
}

pub fn session_config_from_args(args: &RoundArgs) -> SessionConfig {
    let mut config = SessionConfig::with_seed(args.seed);
    config.sample_count = args.sample_count;
    config.bins = args.bins;
    config.threshold_pct = args.threshold;
    config.narrator = NarratorConfig {
        model: args.model.clone(),
        max_tokens: args.max_tokens,
        temperature: args.temperature,
    };
    config.plot = args.plot && !args.no_plot;
    config.plot_width = args.width;
    config.plot_height = args.height;
    config.export_samples = args.export.clone();
    config.export_round = args.export_round.clone();
    config.reveal = args.reveal;
    config.narrate = args.narrate;
    config
}

/// Rewrite argv so `bell` defaults to `bell tui`.
///
/// Rules:
/// - `bell`                      -> `bell tui`
/// - `bell --seed 7 ...`         -> `bell tui --seed 7 ...`
/// - `bell --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "tui" | "check" | "plot");
    if is_subcommand {
        return argv;
    }

    // A leading flag means "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_becomes_tui() {
        assert_eq!(rewrite_args(argv(&["bell"])), argv(&["bell", "tui"]));
    }

    #[test]
    fn leading_flag_routes_to_tui() {
        assert_eq!(
            rewrite_args(argv(&["bell", "--seed", "7"])),
            argv(&["bell", "tui", "--seed", "7"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(argv(&["bell", "check", "--center", "1.2"])),
            argv(&["bell", "check", "--center", "1.2"])
        );
        assert_eq!(rewrite_args(argv(&["bell", "--help"])), argv(&["bell", "--help"]));
    }

    #[test]
    fn config_from_args_carries_flags() {
        let args = RoundArgs::parse_from([
            "check", "--seed", "9", "--bins", "20", "--threshold", "10", "--narrate", "--no-plot",
        ]);
        let config = session_config_from_args(&args);
        assert_eq!(config.seed, 9);
        assert_eq!(config.bins, 20);
        assert_eq!(config.threshold_pct, 10.0);
        assert!(config.narrate);
        assert!(!config.plot);
    }
}

//! Main application orchestrator.
//!
//! Coordinates a single run:
//! 1. Initializes logging.
//! 2. Loads and validates the campus map.
//! 3. Builds the output sink (console plus speech, or console only when muted).
//! 4. Picks the query source: the command-line query, or one line from stdin
//!    after the listening prompt.
//! 5. Delegates the query cycle to `processing::handle_query`.
//!
//! Adheres to command-line arguments like `quiet` for controlling verbosity.

use super::cli::Cli;
use super::error::AppError;
use super::logger;
use super::processing::{self, QueryOutcome};
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph;
use crate::speech::{
    CommandSynthesizer, ConsoleSink, DualSink, FixedQuerySource, LineQuerySource, MutedSynthesizer,
    OutputSink, QuerySource, SpeechSynthesizer, LISTENING_PROMPT,
};
use std::io::{self, BufRead};

/// Runs the application based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` when the campus map fails validation or the console
/// cannot be written. Input and resolution failures are reported to the user
/// and end the run normally.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // The run continues without the verbose log.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = run_query_cycle(&cli, quiet_mode);

    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[FATAL] {}", e);
    }
    // Final flush of the verbose log before exiting.
    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }

    result
}

fn run_query_cycle(cli: &Cli, quiet_mode: bool) -> Result<(), AppError> {
    let campus = graph::campus()?;
    verbose_println!(
        quiet_mode,
        "Campus map loaded with {} locations.",
        campus.len()
    );

    let mut sink = DualSink::new(ConsoleSink::stdout(), build_synthesizer(cli), quiet_mode);
    let mut source = select_source(cli.query.as_deref(), io::stdin().lock(), &mut sink)?;

    let outcome = processing::handle_query(source.as_mut(), campus, &mut sink, quiet_mode)?;
    match &outcome {
        QueryOutcome::Reported { start, end, paths } => verbose_println!(
            quiet_mode,
            "\nDone: {} path(s) reported from {} to {}.",
            paths,
            start,
            end
        ),
        other => verbose_println!(quiet_mode, "\nDone: {:?}.", other),
    }
    if sink.speech_failures() > 0 {
        verbose_eprintln!(
            quiet_mode,
            "[WARNING] {} line(s) could not be spoken.",
            sink.speech_failures()
        );
    }

    Ok(())
}

/// Speech backend for the run: muted, or the configured TTS program with its
/// extra arguments ahead of the text.
pub(super) fn build_synthesizer(cli: &Cli) -> Box<dyn SpeechSynthesizer> {
    if cli.mute {
        return Box::new(MutedSynthesizer);
    }
    Box::new(
        cli.tts_args
            .iter()
            .fold(CommandSynthesizer::new(&cli.tts_command), |synth, arg| {
                synth.arg(arg)
            }),
    )
}

/// Uses the command-line query when there is one. Otherwise announces the
/// listening prompt on `sink` and reads one line from `reader`.
pub(super) fn select_source<'a, R: BufRead + 'a>(
    query: Option<&str>,
    reader: R,
    sink: &mut dyn OutputSink,
) -> io::Result<Box<dyn QuerySource + 'a>> {
    match query {
        Some(query) => Ok(Box::new(FixedQuerySource::new(query))),
        None => {
            sink.emit_line(LISTENING_PROMPT)?;
            Ok(Box::new(LineQuerySource::new(reader)))
        }
    }
}

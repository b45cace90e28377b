use std::io::{self, Cursor};

use clap::Parser;
use rstest::rstest;

use super::error::AppError;
use super::orchestrator::{build_synthesizer, select_source};
use super::processing::{handle_query, report_paths, QueryOutcome, RESOLUTION_FAILURE_MESSAGE};
use super::Cli;
use crate::graph::{campus, GraphBuilder, GraphError, NodeId};
use crate::path::RenderError;
use crate::speech::{
    FixedQuerySource, InputError, OutputSink, QuerySource, SpeechError, LISTENING_PROMPT,
};

/// Records lines per channel: `emit` lines go to text and speech, `print` to text only.
#[derive(Default)]
struct RecordingSink {
    text: Vec<String>,
    spoken: Vec<String>,
}

impl OutputSink for RecordingSink {
    fn emit_line(&mut self, line: &str) -> std::io::Result<()> {
        self.text.push(line.to_string());
        self.spoken.push(line.to_string());
        Ok(())
    }

    fn print_line(&mut self, line: &str) -> std::io::Result<()> {
        self.text.push(line.to_string());
        Ok(())
    }
}

/// Fails every read with the same capture error.
struct FailingSource(fn() -> InputError);

impl QuerySource for FailingSource {
    fn read_query(&mut self) -> Result<String, InputError> {
        Err((self.0)())
    }
}

#[test]
fn resolved_query_reports_every_path() {
    let mut source = FixedQuerySource::new("from the Main gate to Parking Area 1");
    let mut sink = RecordingSink::default();

    let outcome = handle_query(&mut source, campus().unwrap(), &mut sink, true).unwrap();

    assert_eq!(
        outcome,
        QueryOutcome::Reported {
            start: NodeId::from("A"),
            end: NodeId::from("E"),
            paths: 1,
        }
    );
    assert_eq!(
        sink.text,
        [
            "You said: from the Main gate to Parking Area 1",
            "Path 1: Main gate -> Tuck Shop -> Parking Area 1",
        ]
    );
    assert_eq!(sink.spoken, ["Path 1: Main gate -> Tuck Shop -> Parking Area 1"]);
}

#[rstest]
#[case::one_location("how far is the Library")]
#[case::no_location("hello there")]
fn unresolved_query_stops_before_enumeration(#[case] query: &str) {
    let mut source = FixedQuerySource::new(query);
    let mut sink = RecordingSink::default();

    let outcome = handle_query(&mut source, campus().unwrap(), &mut sink, true).unwrap();

    assert_eq!(outcome, QueryOutcome::Unresolved);
    assert_eq!(sink.spoken, [RESOLUTION_FAILURE_MESSAGE]);
    assert_eq!(sink.text.last().map(String::as_str), Some(RESOLUTION_FAILURE_MESSAGE));
}

#[rstest]
#[case(|| InputError::NoInput, "No input detected. Please try again.")]
#[case(|| InputError::Unrecognized, "Sorry, I did not understand that.")]
#[case(
    || InputError::ServiceUnavailable(io::Error::new(io::ErrorKind::Other, "offline")),
    "Sorry, there was an issue with the speech recognition service."
)]
fn input_failure_is_announced(#[case] failure: fn() -> InputError, #[case] message: &str) {
    let mut source = FailingSource(failure);
    let mut sink = RecordingSink::default();

    let outcome = handle_query(&mut source, campus().unwrap(), &mut sink, true).unwrap();

    assert_eq!(outcome, QueryOutcome::NoQuery);
    assert_eq!(sink.text, [message]);
    assert_eq!(sink.spoken, [message]);
}

#[test]
fn disconnected_locations_report_no_path() {
    let graph = GraphBuilder::new()
        .node("A", "North Gate")
        .node("B", "South Gate")
        .build()
        .unwrap();
    let mut source = FixedQuerySource::new("North Gate to South Gate");
    let mut sink = RecordingSink::default();

    let outcome = handle_query(&mut source, &graph, &mut sink, true).unwrap();

    assert!(matches!(outcome, QueryOutcome::Reported { paths: 0, .. }));
    assert_eq!(sink.spoken, ["No path found."]);
}

#[test]
fn unknown_identifier_is_a_configuration_fault() {
    let mut sink = RecordingSink::default();

    let err = report_paths(
        &NodeId::from("A"),
        &NodeId::from("ZZ"),
        campus().unwrap(),
        &mut sink,
        true,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        AppError::Graph(GraphError::NodeNotFound(ref id)) if id.as_str() == "ZZ"
    ));
    assert!(sink.text.is_empty());
}

#[test]
fn stdin_query_is_prompted_before_it_is_echoed() {
    let mut sink = RecordingSink::default();
    let mut source =
        select_source(None, Cursor::new("Main gate to Parking Area 1\n"), &mut sink).unwrap();

    let outcome = handle_query(source.as_mut(), campus().unwrap(), &mut sink, true).unwrap();

    assert!(matches!(outcome, QueryOutcome::Reported { paths: 1, .. }));
    assert_eq!(
        sink.text,
        [
            LISTENING_PROMPT,
            "You said: Main gate to Parking Area 1",
            "Path 1: Main gate -> Tuck Shop -> Parking Area 1",
        ]
    );
    assert_eq!(
        sink.spoken,
        [LISTENING_PROMPT, "Path 1: Main gate -> Tuck Shop -> Parking Area 1"]
    );
}

#[test]
fn command_line_query_skips_the_prompt() {
    let mut sink = RecordingSink::default();
    let mut source =
        select_source(Some("Library to Main gate"), Cursor::new(""), &mut sink).unwrap();

    assert!(sink.text.is_empty());
    assert_eq!(source.read_query().unwrap(), "Library to Main gate");
}

#[test]
fn muted_run_never_launches_a_program() {
    let cli = Cli::parse_from([
        "campus-paths",
        "--mute",
        "--tts-command",
        "campus-paths-no-such-tts",
    ]);
    assert!(build_synthesizer(&cli).speak("Path 1: Main gate").is_ok());
}

#[test]
fn configured_tts_command_is_launched() {
    let cli = Cli::parse_from(["campus-paths", "--tts-command", "campus-paths-no-such-tts"]);
    let err = build_synthesizer(&cli).speak("Path 1: Main gate").unwrap_err();
    assert!(matches!(
        err,
        SpeechError::Launch { ref program, .. } if program == "campus-paths-no-such-tts"
    ));
}

#[cfg(unix)]
#[test]
fn tts_args_are_passed_before_the_text() {
    let cli = Cli::parse_from(["campus-paths", "--tts-command", "true", "--tts-arg", "-v"]);
    assert!(build_synthesizer(&cli).speak("Path 1: Main gate").is_ok());
}

#[test]
fn fatal_errors_display_as_sentences() {
    let render = AppError::from(RenderError::Io(io::Error::new(io::ErrorKind::Other, "disk full")));
    assert_eq!(render.to_string(), "Could not write the path listing: disk full.");

    let graph = AppError::from(GraphError::NodeNotFound(NodeId::from("ZZ")));
    assert_eq!(graph.to_string(), "Location 'ZZ' is not part of the campus map.");

    let console = AppError::from(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
    assert_eq!(console.to_string(), "Could not write to the console: broken pipe.");
}

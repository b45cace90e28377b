use std::io::{self, Stdout, Write};

use super::synth::SpeechSynthesizer;
use crate::app::verbose_eprintln;

/// Receives user-facing lines in the order they are produced.
pub trait OutputSink {
    /// Relays a line to every channel the sink drives.
    fn emit_line(&mut self, line: &str) -> io::Result<()>;

    /// Relays a line to the textual channel only.
    fn print_line(&mut self, line: &str) -> io::Result<()>;
}

/// Writes lines to a text stream, stdout by default.
pub struct ConsoleSink<W = Stdout> {
    writer: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        self.print_line(line)
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}

/// Prints every line, then speaks it.
///
/// Console output always happens first. A speech failure is logged and
/// counted but never stops or reorders the console listing.
pub struct DualSink<W = Stdout> {
    console: ConsoleSink<W>,
    synth: Box<dyn SpeechSynthesizer>,
    quiet: bool,
    speech_failures: usize,
}

impl<W: Write> DualSink<W> {
    pub fn new(console: ConsoleSink<W>, synth: Box<dyn SpeechSynthesizer>, quiet: bool) -> Self {
        Self {
            console,
            synth,
            quiet,
            speech_failures: 0,
        }
    }

    /// Number of lines that could not be spoken.
    pub fn speech_failures(&self) -> usize {
        self.speech_failures
    }
}

impl<W: Write> OutputSink for DualSink<W> {
    fn emit_line(&mut self, line: &str) -> io::Result<()> {
        self.console.print_line(line)?;
        if let Err(e) = self.synth.speak(line) {
            self.speech_failures += 1;
            verbose_eprintln!(self.quiet, "[SPEECH] Could not speak \"{}\": {}", line, e);
        }
        Ok(())
    }

    fn print_line(&mut self, line: &str) -> io::Result<()> {
        self.console.print_line(line)
    }
}

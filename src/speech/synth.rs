use std::process::{Command, Stdio};

use super::error::SpeechError;

/// Speaks a line of text aloud.
pub trait SpeechSynthesizer {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError>;
}

/// Speaks through an external text-to-speech program such as `espeak`.
///
/// The program is run once per line, with the line as its last argument, and
/// waited on so lines are spoken in the order they are emitted.
#[derive(Debug, Clone)]
pub struct CommandSynthesizer {
    program: String,
    args: Vec<String>,
}

impl CommandSynthesizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Adds an argument placed before the spoken text.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }
}

impl SpeechSynthesizer for CommandSynthesizer {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| SpeechError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(SpeechError::Exit {
                program: self.program.clone(),
                status,
            })
        }
    }
}

/// Drops every line. Used when speech output is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutedSynthesizer;

impl SpeechSynthesizer for MutedSynthesizer {
    fn speak(&mut self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}

use std::process::ExitStatus;
use thiserror::Error;

/// Error type for query capture.
///
/// The `Display` text of every variant is the sentence relayed to the user.
#[derive(Error, Debug)]
pub enum InputError {
    /// Nothing was heard before the source gave up.
    #[error("No input detected. Please try again.")]
    NoInput,

    /// Input arrived but could not be turned into text.
    #[error("Sorry, I did not understand that.")]
    Unrecognized,

    /// The capture backend itself failed.
    #[error("Sorry, there was an issue with the speech recognition service.")]
    ServiceUnavailable(#[source] std::io::Error),
}

/// Error type for speech synthesis.
#[derive(Error, Debug)]
pub enum SpeechError {
    /// Error when the speech program cannot be started.
    #[error("Failed to launch speech program '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Error when the speech program reports failure.
    #[error("Speech program '{program}' exited with {status}")]
    Exit { program: String, status: ExitStatus },
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Lists every walking route between two campus locations named in a query.", long_about = None)]
pub struct Cli {
    /// Query naming two locations, e.g. "Main gate to Library". Read from stdin when omitted.
    pub query: Option<String>,

    /// Suppress the verbose log file.
    #[clap(short, long)]
    pub quiet: bool,

    /// File receiving verbose output.
    #[clap(long, default_value = "campus_paths.log")]
    pub log_file: PathBuf,

    /// Print results without speaking them.
    #[clap(long)]
    pub mute: bool,

    /// Text-to-speech program run once per spoken line.
    #[clap(long, default_value = "espeak")]
    pub tts_command: String,

    /// Extra argument for the text-to-speech program (repeatable).
    #[clap(long = "tts-arg", allow_hyphen_values = true)]
    pub tts_args: Vec<String>,
}

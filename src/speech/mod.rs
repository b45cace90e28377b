// error module
mod error;
// input module
mod input;
// sink module
mod sink;
// synth module
mod synth;


//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the speech modules.
//─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
pub use error::{InputError, SpeechError};
pub use input::{FixedQuerySource, LineQuerySource, QuerySource, LISTENING_PROMPT};
pub use sink::{ConsoleSink, DualSink, OutputSink};
pub use synth::{CommandSynthesizer, MutedSynthesizer, SpeechSynthesizer};

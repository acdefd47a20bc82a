pub mod adapter;
pub mod commands;
pub mod registry;

pub use adapter::{RecognitionAdapter, SpeechRecognizer, SpeechSynthesizer, VoiceState};
pub use commands::{registry_for, VoiceCommand};
pub use registry::{normalize, CommandPhrase, CommandRegistry};

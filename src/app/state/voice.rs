use crate::voice::VoiceState;

/// What the footer shows about speech input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoiceStatus {
    pub state: VoiceState,
    pub last_heard: Option<String>,
    pub matched: bool,
    pub unavailable_reason: Option<String>,
}

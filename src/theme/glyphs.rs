// Powerline separators need a patched font; everything else is plain Unicode.
pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const MIC: &str = "\u{25c9}";
pub const MIC_OFF: &str = "\u{25cb}";
pub const MIC_IDLE: &str = "\u{25ce}";
pub const SUCCESS: &str = "\u{2714}";
pub const ERROR: &str = "\u{2718}";
pub const INFO: &str = "\u{2139}";
pub const SELECTED: &str = "\u{258c}";

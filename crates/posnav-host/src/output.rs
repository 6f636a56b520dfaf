//! Output Channels
//!
//! Synthesized speech and the tone generator.

use crate::span::{TextSpan, TextUnit};

/// Why a piece of speech is being produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechReason {
    /// A short notification message
    Message,
    /// The caret moved and its new line is being read
    CaretMove,
}

/// Delivery channel selected by the triggering command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    Speech,
    Tone,
}

/// Synthesized speech output
pub trait Speech {
    /// Speak a short notification message
    fn message(&self, text: &str);

    /// Speak the text covered by a span
    fn speak_span(&self, span: &dyn TextSpan, unit: TextUnit, reason: SpeechReason);

    /// Cancel any queued speech output
    fn cancel(&self);
}

/// Tone generator
pub trait ToneSink {
    fn beep(&self, frequency_hz: f64, duration_ms: u32);
}

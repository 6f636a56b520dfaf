//! posnav Host Abstraction
//!
//! Everything the position reporter consumes from its screen-reader
//! host, expressed as capability traits.
//!
//! Features:
//! - Control roles and focus targets
//! - Text spans (caret/content ranges with unit-based movement)
//! - Output channels (speech, tones)
//! - Non-blocking entry/error dialogs
//! - Deferred execution on the UI thread

pub mod dialog;
pub mod element;
pub mod host;
pub mod mock;
pub mod output;
pub mod role;
pub mod sched;
pub mod span;

pub use dialog::{DialogReply, Dialogs, PromptRequest};
pub use element::{FocusTarget, GroupPosition};
pub use host::Host;
pub use output::{OutputChannel, Speech, SpeechReason, ToneSink};
pub use role::Role;
pub use sched::{Job, Scheduler};
pub use span::{SpanError, SpanKind, TextSpan, TextUnit};

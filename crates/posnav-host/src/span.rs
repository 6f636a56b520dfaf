//! Text Spans
//!
//! An opaque cursor/range over a control's textual content. A span pair
//! (whole content + caret point) is requested fresh for every command
//! invocation; spans are never cached across commands.

use std::rc::Rc;

use crate::element::FocusTarget;

/// Chunking granularity for span operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUnit {
    Character,
    Line,
}

/// Which position a new span should cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// The entire content of the control
    All,
    /// A zero-length span at the caret
    Caret,
}

/// Recoverable failures signalled by the host for span operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("operation not supported for this control type")]
    Unsupported,

    #[error("underlying control is no longer available")]
    Gone,
}

/// A range over a control's text content.
///
/// Offsets are in characters from the start of the content. Line chunks
/// are newline-terminated pieces; callers that need a line count add 1
/// for the final unterminated line.
pub trait TextSpan {
    /// Text currently covered by the span
    fn text(&self) -> String;

    /// Covered text chunked by unit
    fn chunks(&self, unit: TextUnit) -> Vec<String>;

    fn start_offset(&self) -> usize;

    fn end_offset(&self) -> usize;

    fn set_end_offset(&mut self, offset: usize);

    /// Truncate this span down to the text preceding `other`'s start
    fn align_end_to_start(&mut self, other: &dyn TextSpan) {
        self.set_end_offset(other.start_offset());
    }

    /// Independent copy of this span
    fn duplicate(&self) -> Box<dyn TextSpan>;

    /// Collapse to the span start, move by `count` units and anchor the
    /// resulting zero-length position there. Returns the number of
    /// units actually moved.
    fn move_from_start(&mut self, unit: TextUnit, count: i64) -> Result<i64, SpanError>;

    /// Grow the span to cover one full unit around its position
    fn expand(&mut self, unit: TextUnit);

    /// Make the span's position the control's caret
    fn commit_caret(&mut self) -> Result<(), SpanError>;

    /// The element this span was created from. May become None when the
    /// span crosses an asynchronous boundary (dialog teardown).
    fn element(&self) -> Option<Rc<dyn FocusTarget>>;

    /// Reattach the span to an element after its reference was lost
    fn rebind(&mut self, element: Rc<dyn FocusTarget>);
}

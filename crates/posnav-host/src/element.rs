//! Focus Targets
//!
//! Capability interface over the control that currently holds input
//! focus. Optional capabilities return None instead of being probed by
//! attribute presence.

use std::rc::Rc;

use crate::role::Role;
use crate::span::{SpanError, SpanKind, TextSpan};

/// Host-provided position-in-group metadata for an item among its
/// similar siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupPosition {
    /// 1-based index of the item in the group
    pub index_in_group: u32,
    /// Number of similar items in the group
    pub similar_in_group: u32,
}

/// A control as seen by the reporter
pub trait FocusTarget {
    /// Stable identity, used to find the element among its siblings
    fn id(&self) -> u64;

    fn role(&self) -> Role;

    /// Position-in-group metadata, when the host exposes it
    fn group_position(&self) -> Option<GroupPosition> {
        None
    }

    /// Positive child identifier assigned by the host, when available
    fn child_id(&self) -> Option<u32> {
        None
    }

    fn parent(&self) -> Option<Rc<dyn FocusTarget>> {
        None
    }

    fn children(&self) -> Vec<Rc<dyn FocusTarget>> {
        Vec::new()
    }

    fn child_count(&self) -> usize {
        self.children().len()
    }

    /// The document abstraction wrapping this element while it is
    /// actively intercepting input. None when there is no such wrapper
    /// or it is in pass-through mode; text queries then go to the
    /// element itself.
    fn interceptor(&self) -> Option<Rc<dyn FocusTarget>> {
        None
    }

    /// Create a span over this control's content. `Err(Unsupported)`
    /// signals "not a text control" and is recovered by callers.
    fn make_span(&self, kind: SpanKind) -> Result<Box<dyn TextSpan>, SpanError>;
}

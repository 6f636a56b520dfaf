//! Preparation
//!
//! Shared first step of every text command: obtain the caret span and
//! the whole-content span for the focused control, redirecting to an
//! actively intercepting document abstraction when one is present.

use std::rc::Rc;

use posnav_host::{FocusTarget, SpanKind, TextSpan};

use crate::PositionReporter;

impl PositionReporter {
    /// Returns `(current, total)` spans, or None when the command does
    /// not apply here. Speaks at most one notification: "Caret not
    /// found" when the control has no caret, "No text" when it is
    /// empty. An element that supports no content span at all fails
    /// silently; that just means this is not a text control.
    pub(crate) fn prepare(
        &self,
        element: Rc<dyn FocusTarget>,
    ) -> Option<(Box<dyn TextSpan>, Box<dyn TextSpan>)> {
        let target = element.interceptor().unwrap_or(element);

        let total = match target.make_span(SpanKind::All) {
            Ok(span) => span,
            Err(_) => return None,
        };
        let current = match target.make_span(SpanKind::Caret) {
            Ok(span) => span,
            Err(_) => {
                self.host.speech().message("Caret not found");
                return None;
            }
        };
        if total.text().is_empty() {
            self.host.speech().message("No text");
            return None;
        }
        Some((current, total))
    }
}

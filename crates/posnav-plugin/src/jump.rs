//! Caret Relocation
//!
//! The final step behind both jump dialogs: move a span by the target
//! offset, commit it as the caret and read the landing line.

use posnav_host::{SpeechReason, TextSpan, TextUnit};

use crate::PositionReporter;

impl PositionReporter {
    /// Move the caret `offset` units from the span's start. The span
    /// has crossed a dialog boundary by the time this runs; its element
    /// reference may have been dropped and is then rebound to whatever
    /// holds focus now. Unsupported moves are silent no-ops.
    pub(crate) fn jump(&self, offset: f64, mut span: Box<dyn TextSpan>, unit: TextUnit) {
        if span.element().is_none() {
            let Some(focus) = self.host.focus() else {
                return;
            };
            span.rebind(focus);
        }

        self.host.speech().cancel();
        if span.move_from_start(unit, offset as i64).is_err() {
            return;
        }
        if span.commit_caret().is_err() {
            return;
        }
        span.expand(TextUnit::Line);
        self.host.caret_moved(&*span);
        self.host
            .speech()
            .speak_span(&*span, TextUnit::Line, SpeechReason::CaretMove);
        tracing::debug!("caret moved {} {:?} units from start", offset, unit);
    }
}

//! Host Surface
//!
//! The bundle of host services a command handler works against.

use std::rc::Rc;

use crate::dialog::Dialogs;
use crate::element::FocusTarget;
use crate::output::{Speech, ToneSink};
use crate::sched::Scheduler;
use crate::span::TextSpan;

/// The screen-reader host environment
pub trait Host {
    /// The control currently holding input focus
    fn focus(&self) -> Option<Rc<dyn FocusTarget>>;

    fn speech(&self) -> &dyn Speech;

    fn tones(&self) -> &dyn ToneSink;

    fn dialogs(&self) -> &dyn Dialogs;

    fn scheduler(&self) -> &dyn Scheduler;

    /// Caret-move bookkeeping hook; called after a span was committed
    /// as the new caret position
    fn caret_moved(&self, span: &dyn TextSpan);
}

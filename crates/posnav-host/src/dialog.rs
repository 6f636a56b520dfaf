//! Dialog Primitives
//!
//! Non-blocking modal entry and error dialogs. The command handler
//! registers a completion callback and returns immediately; the
//! callback runs on the UI thread when the user closes the dialog.

/// A request to show a modal text-entry dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub title: String,
    pub message: String,
}

/// How the user closed an entry dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogReply {
    /// Confirmed with the entered value
    Submitted(String),
    Cancelled,
}

/// Modal dialog surface of the host
pub trait Dialogs {
    /// Show a modal entry dialog; `on_close` runs when it is dismissed
    fn text_entry(&self, request: PromptRequest, on_close: Box<dyn FnOnce(DialogReply)>);

    /// Show a modal error box
    fn error_box(&self, message: &str);
}

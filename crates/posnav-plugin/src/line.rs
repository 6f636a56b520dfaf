//! Jump-to-Line
//!
//! Prompts for a target line number, showing the current and maximum
//! line first, and relocates the caret on confirmation.

use posnav_host::{DialogReply, PromptRequest, TextUnit};

use crate::{parse_bounded, PositionReporter};

impl PositionReporter {
    pub(crate) fn jump_to_line(&self) {
        let Some(element) = self.host.focus() else {
            return;
        };
        let Some((current, mut total)) = self.prepare(element) else {
            return;
        };

        // Line chunks are newline-terminated, so the final unterminated
        // line is accounted for by the + 1.
        let line_count = total.chunks(TextUnit::Line).len() as u64 + 1;
        let full = total.duplicate();
        total.align_end_to_start(&*current);
        let line_before_caret = total.chunks(TextUnit::Line).len() as u64 + 1;

        let reporter = self.clone();
        self.host.dialogs().text_entry(
            PromptRequest {
                title: "Jump to line".to_string(),
                message: format!(
                    "You are here: {} You can't go further than: {}",
                    line_before_caret, line_count,
                ),
            },
            Box::new(move |reply| {
                let DialogReply::Submitted(value) = reply else {
                    return;
                };
                let Some(line) = parse_bounded(&value, 1, line_count) else {
                    let inner = reporter.clone();
                    reporter.host.scheduler().defer(Box::new(move || {
                        inner.host.dialogs().error_box("Wrong value.");
                    }));
                    return;
                };
                let inner = reporter.clone();
                reporter.host.scheduler().defer_settled(Box::new(move || {
                    inner.jump((line - 1) as f64, full, TextUnit::Line);
                }));
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use posnav_host::mock::{MockElement, MockHost, TextBuffer};
    use posnav_host::DialogReply;

    use crate::{Command, PositionReporter};

    fn focused_field(host: &MockHost, text: &str, caret: usize) -> Rc<TextBuffer> {
        let buffer = TextBuffer::new(text, caret);
        host.focus_element(MockElement::text_field(buffer.clone()));
        buffer
    }

    #[test]
    fn test_prompt_shows_current_and_max_line() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());
        // Caret on the second line of three.
        focused_field(&host, "first\nsecond\nthird", 7);

        reporter.invoke(Command::JumpToLine, 0);
        let prompt = &host.dialogs.prompts()[0];
        assert_eq!(prompt.title, "Jump to line");
        assert_eq!(prompt.message, "You are here: 2 You can't go further than: 3");
    }

    #[test]
    fn test_jump_to_line_moves_caret_and_speaks_line() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());
        let buffer = focused_field(&host, "first\nsecond\nthird", 0);

        host.dialogs.push_reply(DialogReply::Submitted("3".to_string()));
        reporter.invoke(Command::JumpToLine, 0);
        host.scheduler.run_all();

        assert_eq!(buffer.caret(), 13);
        let spoken = host.speech.spoken();
        assert_eq!(spoken.len(), 1);
        assert_eq!(spoken[0].0.trim_end(), "third");
        assert_eq!(host.caret_moves().len(), 1);
    }

    #[test]
    fn test_jump_to_line_rejects_bad_values() {
        for bad in ["0", "-1", "abc", "4"] {
            let host = MockHost::new();
            let reporter = PositionReporter::new(host.clone());
            let buffer = focused_field(&host, "first\nsecond\nthird", 0);

            host.dialogs.push_reply(DialogReply::Submitted(bad.to_string()));
            reporter.invoke(Command::JumpToLine, 0);
            host.scheduler.run_all();

            assert_eq!(
                host.dialogs.errors(),
                vec!["Wrong value."],
                "value {bad:?} should be rejected"
            );
            assert_eq!(buffer.caret(), 0, "value {bad:?} must not move the caret");
        }
    }

    #[test]
    fn test_jump_uses_untruncated_span() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());
        // Caret mid-document; the jump target is past it, which only
        // works if the full span survives the truncation.
        let buffer = focused_field(&host, "a\nb\nc\nd", 2);

        host.dialogs.push_reply(DialogReply::Submitted("4".to_string()));
        reporter.invoke(Command::JumpToLine, 0);
        host.scheduler.run_all();

        assert_eq!(buffer.caret(), 6);
    }

    #[test]
    fn test_jump_to_line_on_empty_field() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());
        focused_field(&host, "", 0);

        reporter.invoke(Command::JumpToLine, 0);
        assert_eq!(host.speech.messages(), vec!["No text"]);
        assert!(host.dialogs.prompts().is_empty());
    }
}

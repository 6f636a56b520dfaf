//! Text-Field Reporting and Jump-to-Percent
//!
//! The report-or-jump command for text controls. A single press reports
//! the caret position as a percentage plus word counts; a double press
//! opens the jump-to-percent dialog instead.

use posnav_host::{DialogReply, OutputChannel, PromptRequest, TextUnit};

use crate::{parse_bounded, PositionReporter, TONE_MS};

impl PositionReporter {
    /// Shared handler behind the speech and tone report commands.
    /// `show_dialog` selects the double-press behavior.
    pub(crate) fn report_or_jump(&self, channel: OutputChannel, show_dialog: bool) {
        let Some(element) = self.host.focus() else {
            return;
        };
        if element.role().is_list_item() {
            if show_dialog {
                // Jumping by percentage within a list is unsupported.
                return;
            }
            self.report_list_position(&element, channel);
            return;
        }

        let Some((current, mut total)) = self.prepare(element) else {
            return;
        };
        let total_chars = total.text().chars().count() as f64;

        if show_dialog {
            let reporter = self.clone();
            self.host.dialogs().text_entry(
                PromptRequest {
                    title: "Jump to percent".to_string(),
                    message: "Enter a percentage to jump to".to_string(),
                },
                Box::new(move |reply| {
                    let DialogReply::Submitted(value) = reply else {
                        return;
                    };
                    let Some(percent) = parse_bounded(&value, 0, 100) else {
                        let inner = reporter.clone();
                        reporter.host.scheduler().defer(Box::new(move || {
                            inner.host.dialogs().error_box(
                                "Wrong value. You can enter a percentage between 0 and 100.",
                            );
                        }));
                        return;
                    };
                    let target = percent as f64 * (total_chars - 1.0) / 100.0;
                    let inner = reporter.clone();
                    // The caret must not move until the host has torn the
                    // dialog down and restored focus.
                    reporter.host.scheduler().defer_settled(Box::new(move || {
                        inner.jump(target, total, TextUnit::Character);
                    }));
                }),
            );
            return;
        }

        let total_words = total.text().split_whitespace().count();
        total.align_end_to_start(&*current);
        let before_caret = total.text();
        let words_before = before_caret.split_whitespace().count();
        let chars_before = before_caret.chars().count() as f64;

        match channel {
            OutputChannel::Speech => {
                self.host.speech().message(&format!(
                    "{} percent word {} of {}",
                    (chars_before / total_chars * 100.0) as u64,
                    words_before,
                    total_words,
                ));
            }
            OutputChannel::Tone => {
                self.host
                    .tones()
                    .beep(chars_before / total_chars * 3000.0, TONE_MS);
            }
        }
    }
}

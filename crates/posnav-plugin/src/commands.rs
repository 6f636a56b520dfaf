//! Command Table
//!
//! The keyboard commands this plugin registers with the host, and the
//! repeat-count gating between reporting and showing a jump dialog.
//! The host's gesture layer owns press debouncing and hands each
//! handler the tracked repeat count.

use posnav_host::OutputChannel;

use crate::PositionReporter;

pub const CATEGORY_SYSTEM_CARET: &str = "System caret";

/// A registrable keyboard command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Once: speak the position. Twice: jump-to-percent dialog.
    ReportOrJumpSpeech,
    /// Once: beep the position. Twice: jump-to-percent dialog.
    ReportOrJumpTone,
    /// Jump-to-line dialog.
    JumpToLine,
}

/// Registration metadata for one command
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    pub command: Command,
    pub gesture: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

impl PositionReporter {
    /// The commands the host should bind
    pub fn descriptors() -> Vec<CommandDescriptor> {
        vec![
            CommandDescriptor {
                command: Command::ReportOrJumpSpeech,
                gesture: "sr+shift+p",
                description: "Press once to have the percentage in the text or on the \
                              list reported in speech. Press twice to display a dialog \
                              allowing you to jump to the given percentage in the \
                              currently focused text field",
                category: CATEGORY_SYSTEM_CARET,
            },
            CommandDescriptor {
                command: Command::ReportOrJumpTone,
                gesture: "sr+alt+p",
                description: "Press once to have the percentage in the text or on the \
                              list reported as a beep. Press twice to display a dialog \
                              allowing you to jump to the given percentage in the \
                              currently focused text field",
                category: CATEGORY_SYSTEM_CARET,
            },
            CommandDescriptor {
                command: Command::JumpToLine,
                gesture: "sr+shift+j",
                description: "Displays a dialog allowing you to jump to the given line \
                              number in the currently focused text field",
                category: CATEGORY_SYSTEM_CARET,
            },
        ]
    }

    /// Entry point for a gesture event. `repeat_count` is 0 for a
    /// single press and 1 for a double press within the host's timing
    /// window; further repeats are ignored.
    pub fn invoke(&self, command: Command, repeat_count: u32) {
        match command {
            Command::ReportOrJumpSpeech => {
                if repeat_count <= 1 {
                    self.report_or_jump(OutputChannel::Speech, repeat_count == 1);
                }
            }
            Command::ReportOrJumpTone => {
                if repeat_count <= 1 {
                    self.report_or_jump(OutputChannel::Tone, repeat_count == 1);
                }
            }
            Command::JumpToLine => self.jump_to_line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table() {
        let descriptors = PositionReporter::descriptors();
        assert_eq!(descriptors.len(), 3);
        assert!(descriptors
            .iter()
            .all(|d| d.category == CATEGORY_SYSTEM_CARET));

        let gestures: Vec<_> = descriptors.iter().map(|d| d.gesture).collect();
        assert_eq!(gestures, vec!["sr+shift+p", "sr+alt+p", "sr+shift+j"]);
    }
}

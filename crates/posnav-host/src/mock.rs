//! In-Memory Host
//!
//! A single-threaded mock of the host environment used by the plugin
//! tests. Output channels record what was produced, dialogs reply from
//! a script, and the scheduler queues jobs until drained.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::dialog::{DialogReply, Dialogs, PromptRequest};
use crate::element::{FocusTarget, GroupPosition};
use crate::host::Host;
use crate::output::{Speech, SpeechReason, ToneSink};
use crate::role::Role;
use crate::sched::{Job, Scheduler};
use crate::span::{SpanError, SpanKind, TextSpan, TextUnit};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Shared text content with a caret, offsets in characters
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: RefCell<String>,
    caret: Cell<usize>,
}

impl TextBuffer {
    pub fn new(text: &str, caret: usize) -> Rc<Self> {
        let buffer = Rc::new(Self {
            text: RefCell::new(text.to_string()),
            caret: Cell::new(0),
        });
        buffer.set_caret(caret);
        buffer
    }

    pub fn len(&self) -> usize {
        self.text.borrow().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.borrow().is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret.get()
    }

    pub fn set_caret(&self, offset: usize) {
        self.caret.set(offset.min(self.len()));
    }

    pub fn snapshot(&self) -> String {
        self.text.borrow().clone()
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.text
            .borrow()
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }
}

/// A span over a [`TextBuffer`]
#[derive(Clone)]
pub struct MockSpan {
    buffer: Rc<TextBuffer>,
    start: usize,
    end: usize,
    element: Option<Rc<dyn FocusTarget>>,
}

impl MockSpan {
    /// Span covering the whole buffer
    pub fn over_all(buffer: Rc<TextBuffer>, element: Option<Rc<dyn FocusTarget>>) -> Self {
        let end = buffer.len();
        Self { buffer, start: 0, end, element }
    }

    /// Zero-length span at the buffer's caret
    pub fn at_caret(buffer: Rc<TextBuffer>, element: Option<Rc<dyn FocusTarget>>) -> Self {
        let caret = buffer.caret();
        Self { buffer, start: caret, end: caret, element }
    }

    /// Drop the element backreference, simulating the loss that can
    /// occur when a span crosses a dialog boundary
    pub fn clear_element(&mut self) {
        self.element = None;
    }
}

impl TextSpan for MockSpan {
    fn text(&self) -> String {
        self.buffer.slice(self.start, self.end)
    }

    fn chunks(&self, unit: TextUnit) -> Vec<String> {
        match unit {
            TextUnit::Character => self.text().chars().map(String::from).collect(),
            TextUnit::Line => self
                .text()
                .split_inclusive('\n')
                .filter(|chunk| chunk.ends_with('\n'))
                .map(String::from)
                .collect(),
        }
    }

    fn start_offset(&self) -> usize {
        self.start
    }

    fn end_offset(&self) -> usize {
        self.end
    }

    fn set_end_offset(&mut self, offset: usize) {
        self.end = offset.min(self.buffer.len());
        if self.end < self.start {
            self.start = self.end;
        }
    }

    fn duplicate(&self) -> Box<dyn TextSpan> {
        Box::new(self.clone())
    }

    fn move_from_start(&mut self, unit: TextUnit, count: i64) -> Result<i64, SpanError> {
        let text: Vec<char> = self.buffer.snapshot().chars().collect();
        let start = self.start.min(text.len());
        let (pos, moved) = match unit {
            TextUnit::Character => {
                let target = (start as i64 + count).clamp(0, text.len() as i64) as usize;
                (target, target as i64 - start as i64)
            }
            TextUnit::Line => {
                let mut pos = start;
                let mut moved = 0i64;
                while moved < count {
                    match text[pos..].iter().position(|&c| c == '\n') {
                        Some(i) => {
                            pos += i + 1;
                            moved += 1;
                        }
                        None => break,
                    }
                }
                (pos, moved)
            }
        };
        self.start = pos;
        self.end = pos;
        Ok(moved)
    }

    fn expand(&mut self, unit: TextUnit) {
        let text: Vec<char> = self.buffer.snapshot().chars().collect();
        let pos = self.start.min(text.len());
        match unit {
            TextUnit::Character => {
                self.start = pos;
                self.end = (pos + 1).min(text.len());
            }
            TextUnit::Line => {
                self.start = text[..pos]
                    .iter()
                    .rposition(|&c| c == '\n')
                    .map(|i| i + 1)
                    .unwrap_or(0);
                self.end = text[pos..]
                    .iter()
                    .position(|&c| c == '\n')
                    .map(|i| pos + i + 1)
                    .unwrap_or(text.len());
            }
        }
    }

    fn commit_caret(&mut self) -> Result<(), SpanError> {
        self.buffer.set_caret(self.start);
        Ok(())
    }

    fn element(&self) -> Option<Rc<dyn FocusTarget>> {
        self.element.clone()
    }

    fn rebind(&mut self, element: Rc<dyn FocusTarget>) {
        self.element = Some(element);
    }
}

/// An element in the mock control hierarchy
pub struct MockElement {
    id: u64,
    role: Role,
    buffer: Option<Rc<TextBuffer>>,
    self_ref: Weak<MockElement>,
    group: Cell<Option<GroupPosition>>,
    child_id: Cell<Option<u32>>,
    caret_supported: Cell<bool>,
    parent: RefCell<Weak<MockElement>>,
    children: RefCell<Vec<Rc<MockElement>>>,
    interceptor: RefCell<Option<Rc<MockElement>>>,
}

impl MockElement {
    fn build(role: Role, buffer: Option<Rc<TextBuffer>>) -> Rc<Self> {
        Rc::new_cyclic(|me| Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            role,
            buffer,
            self_ref: me.clone(),
            group: Cell::new(None),
            child_id: Cell::new(None),
            caret_supported: Cell::new(true),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            interceptor: RefCell::new(None),
        })
    }

    /// Element with the given role and no text content
    pub fn new(role: Role) -> Rc<Self> {
        Self::build(role, None)
    }

    /// Editable text control over a buffer
    pub fn text_field(buffer: Rc<TextBuffer>) -> Rc<Self> {
        Self::build(Role::EditableText, Some(buffer))
    }

    /// Document control over a buffer, usable as an interceptor
    pub fn document(buffer: Rc<TextBuffer>) -> Rc<Self> {
        Self::build(Role::Document, Some(buffer))
    }

    pub fn list_item() -> Rc<Self> {
        Self::build(Role::ListItem, None)
    }

    pub fn set_group(&self, group: GroupPosition) {
        self.group.set(Some(group));
    }

    pub fn set_child_id(&self, id: u32) {
        self.child_id.set(Some(id));
    }

    pub fn set_caret_supported(&self, supported: bool) {
        self.caret_supported.set(supported);
    }

    /// Wrap this element in an actively intercepting document
    pub fn set_interceptor(&self, interceptor: Rc<MockElement>) {
        *self.interceptor.borrow_mut() = Some(interceptor);
    }

    /// Attach children, wiring their parent references back to `self`
    pub fn adopt(self: &Rc<Self>, children: Vec<Rc<MockElement>>) {
        for child in &children {
            *child.parent.borrow_mut() = Rc::downgrade(self);
        }
        self.children.borrow_mut().extend(children);
    }
}

impl FocusTarget for MockElement {
    fn id(&self) -> u64 {
        self.id
    }

    fn role(&self) -> Role {
        self.role
    }

    fn group_position(&self) -> Option<GroupPosition> {
        self.group.get()
    }

    fn child_id(&self) -> Option<u32> {
        self.child_id.get()
    }

    fn parent(&self) -> Option<Rc<dyn FocusTarget>> {
        self.parent
            .borrow()
            .upgrade()
            .map(|parent| parent as Rc<dyn FocusTarget>)
    }

    fn children(&self) -> Vec<Rc<dyn FocusTarget>> {
        self.children
            .borrow()
            .iter()
            .map(|child| child.clone() as Rc<dyn FocusTarget>)
            .collect()
    }

    fn child_count(&self) -> usize {
        self.children.borrow().len()
    }

    fn interceptor(&self) -> Option<Rc<dyn FocusTarget>> {
        self.interceptor
            .borrow()
            .clone()
            .map(|interceptor| interceptor as Rc<dyn FocusTarget>)
    }

    fn make_span(&self, kind: SpanKind) -> Result<Box<dyn TextSpan>, SpanError> {
        let buffer = self.buffer.clone().ok_or(SpanError::Unsupported)?;
        if kind == SpanKind::Caret && !self.caret_supported.get() {
            return Err(SpanError::Unsupported);
        }
        let element = self
            .self_ref
            .upgrade()
            .map(|element| element as Rc<dyn FocusTarget>);
        Ok(Box::new(match kind {
            SpanKind::All => MockSpan::over_all(buffer, element),
            SpanKind::Caret => MockSpan::at_caret(buffer, element),
        }))
    }
}

/// Recording speech output
#[derive(Default)]
pub struct MockSpeech {
    messages: RefCell<Vec<String>>,
    spoken: RefCell<Vec<(String, SpeechReason)>>,
    cancels: Cell<u32>,
}

impl MockSpeech {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn spoken(&self) -> Vec<(String, SpeechReason)> {
        self.spoken.borrow().clone()
    }

    pub fn cancel_count(&self) -> u32 {
        self.cancels.get()
    }
}

impl Speech for MockSpeech {
    fn message(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }

    fn speak_span(&self, span: &dyn TextSpan, _unit: TextUnit, reason: SpeechReason) {
        self.spoken.borrow_mut().push((span.text(), reason));
    }

    fn cancel(&self) {
        self.cancels.set(self.cancels.get() + 1);
    }
}

/// Recording tone generator
#[derive(Default)]
pub struct MockTones {
    beeps: RefCell<Vec<(f64, u32)>>,
}

impl MockTones {
    pub fn beeps(&self) -> Vec<(f64, u32)> {
        self.beeps.borrow().clone()
    }
}

impl ToneSink for MockTones {
    fn beep(&self, frequency_hz: f64, duration_ms: u32) {
        self.beeps.borrow_mut().push((frequency_hz, duration_ms));
    }
}

/// Scripted dialogs. Each entry dialog consumes the next queued reply,
/// defaulting to Cancelled; prompts and error boxes are recorded.
#[derive(Default)]
pub struct MockDialogs {
    replies: RefCell<VecDeque<DialogReply>>,
    prompts: RefCell<Vec<PromptRequest>>,
    errors: RefCell<Vec<String>>,
}

impl MockDialogs {
    pub fn push_reply(&self, reply: DialogReply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn prompts(&self) -> Vec<PromptRequest> {
        self.prompts.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl Dialogs for MockDialogs {
    fn text_entry(&self, request: PromptRequest, on_close: Box<dyn FnOnce(DialogReply)>) {
        self.prompts.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or(DialogReply::Cancelled);
        on_close(reply);
    }

    fn error_box(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// Queueing scheduler; jobs run when the test drains the queue
#[derive(Default)]
pub struct MockScheduler {
    queue: RefCell<Vec<Job>>,
}

impl MockScheduler {
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Drain the queue, including jobs enqueued by running jobs
    pub fn run_all(&self) {
        loop {
            let jobs: Vec<Job> = self.queue.borrow_mut().drain(..).collect();
            if jobs.is_empty() {
                break;
            }
            for job in jobs {
                job();
            }
        }
    }
}

impl Scheduler for MockScheduler {
    fn defer(&self, job: Job) {
        self.queue.borrow_mut().push(job);
    }

    fn defer_settled(&self, job: Job) {
        self.queue.borrow_mut().push(job);
    }
}

/// The assembled mock host
#[derive(Default)]
pub struct MockHost {
    focus: RefCell<Option<Rc<dyn FocusTarget>>>,
    pub speech: MockSpeech,
    pub tones: MockTones,
    pub dialogs: MockDialogs,
    pub scheduler: MockScheduler,
    caret_moves: RefCell<Vec<String>>,
}

impl MockHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn focus_element(&self, element: Rc<dyn FocusTarget>) {
        *self.focus.borrow_mut() = Some(element);
    }

    pub fn clear_focus(&self) {
        *self.focus.borrow_mut() = None;
    }

    /// Span texts passed to the caret-move hook, in order
    pub fn caret_moves(&self) -> Vec<String> {
        self.caret_moves.borrow().clone()
    }
}

impl Host for MockHost {
    fn focus(&self) -> Option<Rc<dyn FocusTarget>> {
        self.focus.borrow().clone()
    }

    fn speech(&self) -> &dyn Speech {
        &self.speech
    }

    fn tones(&self) -> &dyn ToneSink {
        &self.tones
    }

    fn dialogs(&self) -> &dyn Dialogs {
        &self.dialogs
    }

    fn scheduler(&self) -> &dyn Scheduler {
        &self.scheduler
    }

    fn caret_moved(&self, span: &dyn TextSpan) {
        self.caret_moves.borrow_mut().push(span.text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_text_and_alignment() {
        let buffer = TextBuffer::new("one two three", 4);
        let field = MockElement::text_field(buffer.clone());

        let mut total = field.make_span(SpanKind::All).unwrap();
        let current = field.make_span(SpanKind::Caret).unwrap();
        assert_eq!(total.text(), "one two three");
        assert_eq!(current.text(), "");

        total.align_end_to_start(&*current);
        assert_eq!(total.text(), "one ");
    }

    #[test]
    fn test_line_chunks_are_newline_terminated() {
        let buffer = TextBuffer::new("first\nsecond\nthird", 0);
        let span = MockSpan::over_all(buffer, None);
        assert_eq!(span.chunks(TextUnit::Line), vec!["first\n", "second\n"]);

        let empty = MockSpan::over_all(TextBuffer::new("", 0), None);
        assert!(empty.chunks(TextUnit::Line).is_empty());
    }

    #[test]
    fn test_move_by_characters_clamps() {
        let buffer = TextBuffer::new("hello", 0);
        let mut span = MockSpan::over_all(buffer.clone(), None);

        assert_eq!(span.move_from_start(TextUnit::Character, 3).unwrap(), 3);
        assert_eq!(span.start_offset(), 3);
        assert_eq!(span.end_offset(), 3);

        assert_eq!(span.move_from_start(TextUnit::Character, 99).unwrap(), 2);
        assert_eq!(span.start_offset(), 5);
    }

    #[test]
    fn test_move_by_lines_and_expand() {
        let buffer = TextBuffer::new("first\nsecond\nthird", 0);
        let mut span = MockSpan::over_all(buffer.clone(), None);

        assert_eq!(span.move_from_start(TextUnit::Line, 2).unwrap(), 2);
        assert_eq!(span.start_offset(), 13);

        span.expand(TextUnit::Line);
        assert_eq!(span.text(), "third");

        span.commit_caret().unwrap();
        assert_eq!(buffer.caret(), 13);
    }

    #[test]
    fn test_make_span_failures() {
        let plain = MockElement::new(Role::Generic);
        assert_eq!(
            plain.make_span(SpanKind::All).err(),
            Some(SpanError::Unsupported)
        );

        let field = MockElement::text_field(TextBuffer::new("text", 0));
        field.set_caret_supported(false);
        assert!(field.make_span(SpanKind::All).is_ok());
        assert_eq!(
            field.make_span(SpanKind::Caret).err(),
            Some(SpanError::Unsupported)
        );
    }

    #[test]
    fn test_adopt_wires_parents() {
        let list = MockElement::new(Role::List);
        let item = MockElement::list_item();
        list.adopt(vec![item.clone()]);

        assert_eq!(list.child_count(), 1);
        assert_eq!(item.parent().unwrap().id(), list.id());
    }

    #[test]
    fn test_scheduler_runs_nested_jobs() {
        let host = MockHost::new();
        let inner_host = host.clone();
        host.scheduler.defer(Box::new(move || {
            inner_host
                .scheduler
                .defer(Box::new(|| {}));
        }));

        host.scheduler.run_all();
        assert_eq!(host.scheduler.pending(), 0);
    }
}

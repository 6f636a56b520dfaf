//! Deferred Execution
//!
//! UI-thread deferral primitives. Handlers run to completion on the
//! event thread; anything that must wait for the host's own dialog
//! teardown or focus restoration is scheduled through these.

/// A deferred unit of work
pub type Job = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run a job after the current event cycle completes
    fn defer(&self, job: Job);

    /// Run a job once the host's dialog-closing and focus-restoration
    /// sequence has settled. Hosts may implement this with a short
    /// fixed delay; relocating the caret earlier risks it being
    /// overridden or acting on a stale focus target.
    fn defer_settled(&self, job: Job);
}

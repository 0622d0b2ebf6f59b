//! The readers/writer gate: counter state, blocking acquisition with
//! broadcast wakeups, and the release paths that enforce the counter
//! invariants.

use crate::handle::{ReadHandle, WriteHandle};
use crate::prelude::{
    codes, fmt, trace, Arc, Condvar, Duration, Error, ErrorCategory, Mutex, Result,
};

/// Configuration for a [`ReaderWriterGate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateOptions {
    /// Enables transition logging plus per-handle misuse diagnostics and
    /// leak detection. Off by default; the plain gate does no bookkeeping
    /// beyond its two counters.
    pub debug: bool,
}

/// The two grant counters. Invariant: at most one of `readers` and `writer`
/// is non-zero, and `writer` never exceeds 1.
#[derive(Debug, Default)]
struct GateState {
    readers: usize,
    writer: usize,
}

/// Shared internals of a gate. Handles keep this alive via `Arc` so a grant
/// can outlive the `ReaderWriterGate` value it came from and be released
/// from any thread.
pub(crate) struct GateInner {
    /// Counter state; every read/modify/write happens under this mutex.
    state: Mutex<GateState>,
    /// Waiters for both directions; every release broadcasts, and each
    /// woken waiter re-tests its predicate.
    cond: Condvar,
    pub(crate) debug: bool,
}

impl GateInner {
    pub(crate) fn acquire_read(&self) {
        let mut state = self.state.lock();
        while state.writer > 0 {
            self.cond.wait(&mut state);
        }
        state.readers += 1;
        if self.debug {
            trace!("read grant acquired (readers={})", state.readers);
        }
    }

    pub(crate) fn acquire_write(&self) {
        let mut state = self.state.lock();
        while state.readers > 0 || state.writer > 0 {
            self.cond.wait(&mut state);
        }
        state.writer = 1;
        if self.debug {
            trace!("write grant acquired");
        }
    }

    pub(crate) fn try_read(&self) -> bool {
        let mut state = self.state.lock();
        if state.writer > 0 {
            return false;
        }
        state.readers += 1;
        if self.debug {
            trace!("read grant acquired without waiting (readers={})", state.readers);
        }
        true
    }

    pub(crate) fn try_write(&self) -> bool {
        let mut state = self.state.lock();
        if state.readers > 0 || state.writer > 0 {
            return false;
        }
        state.writer = 1;
        if self.debug {
            trace!("write grant acquired without waiting");
        }
        true
    }

    pub(crate) fn release_read(&self) {
        let mut state = self.state.lock();
        assert!(
            state.readers > 0,
            "read grant released with no readers outstanding"
        );
        state.readers -= 1;
        if self.debug {
            trace!("read grant released (readers={})", state.readers);
        }
        // Wake every waiter; the ones whose predicate still fails go back
        // to sleep.
        self.cond.notify_all();
    }

    pub(crate) fn release_write(&self) {
        let mut state = self.state.lock();
        assert!(
            state.writer > 0,
            "write grant released with no writer outstanding"
        );
        state.writer = 0;
        if self.debug {
            trace!("write grant released");
        }
        self.cond.notify_all();
    }
}

/// A gate granting either many concurrent readers or one exclusive writer.
///
/// The gate is created once per protected resource and lives as long as the
/// resource. Cloning is cheap and yields another face of the same gate:
/// clones share counters and waiters.
///
/// Grants are explicit [`ReadHandle`] / [`WriteHandle`] tokens, released by
/// calling [`release`](ReadHandle::release), not by dropping, and not
/// necessarily on the thread that acquired them. Releasing a grant the gate
/// does not hold is a programmer error and panics; see the handle docs for
/// how debug mode softens handle-level misuse into logged warnings.
///
/// There is no fairness or FIFO ordering between waiting readers and
/// writers, and no way to time out or cancel a blocked acquisition.
///
/// ```
/// use std::thread;
/// use rwgate_sync::ReaderWriterGate;
///
/// let gate = ReaderWriterGate::new();
/// let writer = gate.acquire_write();
/// assert!(gate.try_read().is_none());
///
/// // Grants are not thread-affine: another thread may release.
/// let t = thread::spawn(move || writer.release());
/// t.join().unwrap();
/// assert!(!gate.has_writer());
/// ```
#[derive(Clone)]
pub struct ReaderWriterGate {
    inner: Arc<GateInner>,
}

impl ReaderWriterGate {
    /// Creates a gate with default options (debug mode off).
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(GateOptions::default())
    }

    /// Creates a gate with the given options.
    #[must_use]
    pub fn with_options(options: GateOptions) -> Self {
        Self {
            inner: Arc::new(GateInner {
                state: Mutex::new(GateState::default()),
                cond: Condvar::new(),
                debug: options.debug,
            }),
        }
    }

    /// Acquires a read grant, blocking while a writer holds the gate.
    ///
    /// Readers never block each other; any number may hold concurrently.
    /// The wait cannot be timed out or cancelled.
    #[must_use = "the grant must be released explicitly"]
    pub fn acquire_read(&self) -> ReadHandle {
        self.inner.acquire_read();
        ReadHandle::new(Arc::clone(&self.inner))
    }

    /// Acquires the write grant, blocking while any reader or another
    /// writer holds the gate.
    ///
    /// Exactly one writer holds at a time. The wait cannot be timed out or
    /// cancelled, and continuous read pressure can starve it.
    #[must_use = "the grant must be released explicitly"]
    pub fn acquire_write(&self) -> WriteHandle {
        self.inner.acquire_write();
        WriteHandle::new(Arc::clone(&self.inner))
    }

    /// Attempts to acquire a read grant without waiting.
    #[must_use]
    pub fn try_read(&self) -> Option<ReadHandle> {
        self.inner
            .try_read()
            .then(|| ReadHandle::new(Arc::clone(&self.inner)))
    }

    /// Attempts to acquire the write grant without waiting.
    #[must_use]
    pub fn try_write(&self) -> Option<WriteHandle> {
        self.inner
            .try_write()
            .then(|| WriteHandle::new(Arc::clone(&self.inner)))
    }

    /// Timed read acquisition. Not implemented: the gate supports only
    /// indefinite blocking or the non-waiting [`try_read`](Self::try_read).
    ///
    /// # Errors
    ///
    /// Always returns an [`ErrorCategory::NotSupported`] error, without
    /// waiting.
    pub fn read_timeout(&self, _timeout: Duration) -> Result<ReadHandle> {
        Err(Error::new(
            ErrorCategory::NotSupported,
            codes::UNSUPPORTED_OPERATION,
            "timed read acquisition is not implemented",
        ))
    }

    /// Timed write acquisition. Not implemented: the gate supports only
    /// indefinite blocking or the non-waiting [`try_write`](Self::try_write).
    ///
    /// # Errors
    ///
    /// Always returns an [`ErrorCategory::NotSupported`] error, without
    /// waiting.
    pub fn write_timeout(&self, _timeout: Duration) -> Result<WriteHandle> {
        Err(Error::new(
            ErrorCategory::NotSupported,
            codes::UNSUPPORTED_OPERATION,
            "timed write acquisition is not implemented",
        ))
    }

    /// Number of read grants currently held. A snapshot; stale as soon as
    /// it returns.
    #[must_use]
    pub fn readers(&self) -> usize {
        self.inner.state.lock().readers
    }

    /// Whether the write grant is currently held. A snapshot; stale as soon
    /// as it returns.
    #[must_use]
    pub fn has_writer(&self) -> bool {
        self.inner.state.lock().writer > 0
    }
}

impl Default for ReaderWriterGate {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReaderWriterGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("ReaderWriterGate")
            .field("readers", &state.readers)
            .field("writer", &state.writer)
            .field("debug", &self.inner.debug)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_unlocked() {
        let gate = ReaderWriterGate::new();
        assert_eq!(gate.readers(), 0);
        assert!(!gate.has_writer());
    }

    #[test]
    fn test_read_grants_stack() {
        let gate = ReaderWriterGate::new();
        let r1 = gate.acquire_read();
        let r2 = gate.acquire_read();
        assert_eq!(gate.readers(), 2);
        r1.release();
        assert_eq!(gate.readers(), 1);
        r2.release();
        assert_eq!(gate.readers(), 0);
    }

    #[test]
    fn test_write_grant_excludes_everything() {
        let gate = ReaderWriterGate::new();
        let w = gate.acquire_write();
        assert!(gate.has_writer());
        assert!(gate.try_read().is_none());
        assert!(gate.try_write().is_none());
        w.release();
        assert!(!gate.has_writer());

        let r = gate.acquire_read();
        assert!(gate.try_write().is_none());
        r.release();
    }

    #[test]
    fn test_try_variants_succeed_on_idle_gate() {
        let gate = ReaderWriterGate::new();
        let r = gate.try_read().unwrap();
        r.release();
        let w = gate.try_write().unwrap();
        w.release();
    }

    #[test]
    fn test_timed_acquisition_is_unsupported() {
        let gate = ReaderWriterGate::new();
        let err = gate.read_timeout(Duration::from_millis(5)).unwrap_err();
        assert!(err.is_unsupported());
        let err = gate.write_timeout(Duration::from_millis(5)).unwrap_err();
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_clones_share_state() {
        let gate = ReaderWriterGate::new();
        let face = gate.clone();
        let r = gate.acquire_read();
        assert_eq!(face.readers(), 1);
        r.release();
        assert_eq!(face.readers(), 0);
    }

    #[test]
    fn test_gate_debug_format() {
        let gate = ReaderWriterGate::with_options(GateOptions { debug: true });
        let r = gate.acquire_read();
        let rendered = format!("{gate:?}");
        assert!(rendered.contains("readers: 1"));
        assert!(rendered.contains("debug: true"));
        r.release();
    }

    #[test]
    #[should_panic(expected = "read grant released with no readers outstanding")]
    fn test_read_release_below_zero_panics() {
        let gate = ReaderWriterGate::new();
        let r = gate.acquire_read();
        r.release();
        r.release();
    }

    #[test]
    #[should_panic(expected = "write grant released with no writer outstanding")]
    fn test_write_release_below_zero_panics() {
        let gate = ReaderWriterGate::new();
        let w = gate.acquire_write();
        w.release();
        w.release();
    }
}

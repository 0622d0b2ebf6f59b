//! Grant handles for the readers/writer gate.
//!
//! A handle is a token for one held acquisition. It is `Send` but
//! deliberately not `Sync`: a grant can be moved to and released from any
//! thread, which is how the gate supports hand-off patterns a thread-affine
//! lock cannot express.

use crate::gate::GateInner;
use crate::prelude::{fmt, warn, Arc, Backtrace, Cell};

/// Debug-mode bookkeeping for one handle: a re-entry counter plus the
/// backtrace captured when the handle was created. Diagnostics only; never
/// consulted for locking decisions.
struct AcquireRecord {
    entries: Cell<u32>,
    origin: Backtrace,
}

impl AcquireRecord {
    fn new() -> Self {
        Self {
            entries: Cell::new(1),
            origin: Backtrace::force_capture(),
        }
    }

    /// Re-acquisition of a grant that is already held. Logs and advances
    /// the re-entry counter so matched releases unwind correctly; returns
    /// whether the caller should skip the gate.
    fn reentered(&self, kind: &str) -> bool {
        let held = self.entries.get();
        if held == 0 {
            return false;
        }
        warn!(
            "{kind} grant acquired while already held ({held} entries); created at:\n{}",
            self.origin
        );
        self.entries.set(held + 1);
        true
    }

    fn mark_held(&self) {
        self.entries.set(1);
    }

    /// Unwinds one entry. Returns whether this release should reach the
    /// gate counters; a release with nothing held is logged, not raised.
    fn released(&self, kind: &str) -> bool {
        let held = self.entries.get();
        if held == 0 {
            warn!(
                "{kind} grant released while not held; created at:\n{}",
                self.origin
            );
            return false;
        }
        self.entries.set(held - 1);
        held == 1
    }

    /// Leak detection at disposal. Returns whether a force-release of the
    /// gate is owed.
    fn leaked(&self, kind: &str) -> bool {
        let held = self.entries.get();
        if held == 0 {
            return false;
        }
        warn!(
            "{kind} grant dropped while still held; force-releasing (created at:\n{})",
            self.origin
        );
        self.entries.set(0);
        true
    }
}

/// A grant of shared access to a gate.
///
/// Created already-held by [`ReaderWriterGate::acquire_read`] or
/// [`ReaderWriterGate::try_read`]. Release it with [`release`](Self::release);
/// dropping does not release (except as debug-mode leak recovery, which
/// logs). Any thread may release the grant, not just the acquiring one.
///
/// [`ReaderWriterGate::acquire_read`]: crate::gate::ReaderWriterGate::acquire_read
/// [`ReaderWriterGate::try_read`]: crate::gate::ReaderWriterGate::try_read
#[must_use = "a grant is only returned by releasing its handle"]
#[clippy::has_significant_drop]
pub struct ReadHandle {
    gate: Arc<GateInner>,
    record: Option<AcquireRecord>,
}

/// A grant of exclusive access to a gate.
///
/// Created already-held by [`ReaderWriterGate::acquire_write`] or
/// [`ReaderWriterGate::try_write`]. Release it with [`release`](Self::release);
/// dropping does not release (except as debug-mode leak recovery, which
/// logs). Any thread may release the grant, not just the acquiring one.
///
/// [`ReaderWriterGate::acquire_write`]: crate::gate::ReaderWriterGate::acquire_write
/// [`ReaderWriterGate::try_write`]: crate::gate::ReaderWriterGate::try_write
#[must_use = "a grant is only returned by releasing its handle"]
#[clippy::has_significant_drop]
pub struct WriteHandle {
    gate: Arc<GateInner>,
    record: Option<AcquireRecord>,
}

impl ReadHandle {
    pub(crate) fn new(gate: Arc<GateInner>) -> Self {
        let record = gate.debug.then(AcquireRecord::new);
        Self { gate, record }
    }

    /// Re-acquires this grant after a [`release`](Self::release), blocking
    /// like [`ReaderWriterGate::acquire_read`].
    ///
    /// On a debug gate, acquiring a handle that is still held logs a
    /// warning with the handle's creation backtrace and leaves the gate
    /// counters untouched. On a plain gate the call simply stacks another
    /// read grant.
    ///
    /// [`ReaderWriterGate::acquire_read`]: crate::gate::ReaderWriterGate::acquire_read
    pub fn acquire(&self) {
        if let Some(record) = &self.record {
            if record.reentered("read") {
                return;
            }
            self.gate.acquire_read();
            record.mark_held();
        } else {
            self.gate.acquire_read();
        }
    }

    /// Releases the grant and wakes all waiters.
    ///
    /// # Panics
    ///
    /// Panics if the gate holds no read grant (double release). On a debug
    /// gate the handle's own counter intercepts first: the misuse is logged
    /// with the creation backtrace and the gate is left untouched.
    pub fn release(&self) {
        if let Some(record) = &self.record {
            if record.released("read") {
                self.gate.release_read();
            }
        } else {
            self.gate.release_read();
        }
    }
}

impl WriteHandle {
    pub(crate) fn new(gate: Arc<GateInner>) -> Self {
        let record = gate.debug.then(AcquireRecord::new);
        Self { gate, record }
    }

    /// Re-acquires this grant after a [`release`](Self::release), blocking
    /// like [`ReaderWriterGate::acquire_write`].
    ///
    /// On a debug gate, acquiring a handle that is still held logs a
    /// warning with the handle's creation backtrace and leaves the gate
    /// counters untouched. On a plain gate the call delegates to the gate
    /// unconditionally; the gate is not reentrant, so re-acquiring a held
    /// write grant deadlocks.
    ///
    /// [`ReaderWriterGate::acquire_write`]: crate::gate::ReaderWriterGate::acquire_write
    pub fn acquire(&self) {
        if let Some(record) = &self.record {
            if record.reentered("write") {
                return;
            }
            self.gate.acquire_write();
            record.mark_held();
        } else {
            self.gate.acquire_write();
        }
    }

    /// Releases the grant and wakes all waiters.
    ///
    /// # Panics
    ///
    /// Panics if the gate holds no write grant (double release). On a debug
    /// gate the handle's own counter intercepts first: the misuse is logged
    /// with the creation backtrace and the gate is left untouched.
    pub fn release(&self) {
        if let Some(record) = &self.record {
            if record.released("write") {
                self.gate.release_write();
            }
        } else {
            self.gate.release_write();
        }
    }
}

impl Drop for ReadHandle {
    fn drop(&mut self) {
        if let Some(record) = &self.record {
            if record.leaked("read") {
                self.gate.release_read();
            }
        }
    }
}

impl Drop for WriteHandle {
    fn drop(&mut self) {
        if let Some(record) = &self.record {
            if record.leaked("write") {
                self.gate.release_write();
            }
        }
    }
}

impl fmt::Debug for ReadHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ReadHandle");
        if let Some(record) = &self.record {
            s.field("entries", &record.entries.get());
        }
        s.finish_non_exhaustive()
    }
}

impl fmt::Debug for WriteHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("WriteHandle");
        if let Some(record) = &self.record {
            s.field("entries", &record.entries.get());
        }
        s.finish_non_exhaustive()
    }
}

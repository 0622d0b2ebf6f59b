//! Formal verification for the gate using Kani.
//!
//! This module contains proofs that verify the counter invariants of the
//! gate on single-threaded traces. These proofs only run with Kani and are
//! isolated from normal compilation and testing.

// Only compile Kani verification code when documentation is being generated
// or when explicitly running cargo kani. This prevents interference with
// coverage testing.
#[cfg(any(doc, kani))]
pub mod kani_verification {
    //! Kani proof harnesses for the gate's counter invariants.

    use crate::gate::ReaderWriterGate;

    /// Verify that read grants stack and unwind without disturbing the
    /// writer counter
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(4))]
    pub fn verify_gate_read_grants() {
        let gate = ReaderWriterGate::new();
        let r1 = gate.acquire_read();
        let r2 = gate.acquire_read();
        assert_eq!(gate.readers(), 2);
        assert!(!gate.has_writer());
        r1.release();
        assert_eq!(gate.readers(), 1);
        r2.release();
        assert_eq!(gate.readers(), 0);
    }

    /// Verify that a held write grant excludes both directions
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(3))]
    pub fn verify_gate_write_exclusion() {
        let gate = ReaderWriterGate::new();
        let w = gate.acquire_write();
        assert!(gate.has_writer());
        assert_eq!(gate.readers(), 0);
        assert!(gate.try_read().is_none());
        assert!(gate.try_write().is_none());
        w.release();
        assert!(!gate.has_writer());
    }

    /// Verify that the non-waiting variants perform the same transitions as
    /// the blocking ones on an uncontended gate
    #[cfg_attr(kani, kani::proof)]
    #[cfg_attr(kani, kani::unwind(3))]
    pub fn verify_gate_try_transitions() {
        let gate = ReaderWriterGate::new();
        if let Some(r) = gate.try_read() {
            assert_eq!(gate.readers(), 1);
            r.release();
        }
        assert_eq!(gate.readers(), 0);
        if let Some(w) = gate.try_write() {
            assert!(gate.has_writer());
            w.release();
        }
        assert!(!gate.has_writer());
    }
}

// Expose the verification module in docs but not for normal compilation
#[cfg(any(doc, kani))]
pub use kani_verification::*;

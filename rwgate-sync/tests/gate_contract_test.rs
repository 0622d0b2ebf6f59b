//! Cross-thread contract tests for the readers/writer gate.
//!
//! These exercise the blocking behavior with real threads: short sleeps
//! give a blocked thread time to demonstrate that it is in fact blocked,
//! and atomic flags record progress.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rwgate_sync::ReaderWriterGate;

#[test]
fn test_readers_do_not_block_each_other() {
    let gate = ReaderWriterGate::new();
    let mut workers = vec![];

    for _ in 0..5 {
        let gate_clone = gate.clone();
        workers.push(thread::spawn(move || {
            let grant = gate_clone.acquire_read();
            thread::sleep(Duration::from_millis(10));
            grant.release();
        }));
    }

    for worker in workers {
        worker.join().unwrap();
    }
    assert_eq!(gate.readers(), 0);
}

#[test]
fn test_writer_blocks_readers() {
    let gate = ReaderWriterGate::new();
    let writer_ready = Arc::new(AtomicBool::new(false));
    let reader_finished = Arc::new(AtomicBool::new(false));

    let gate_writer = gate.clone();
    let writer_ready_clone = Arc::clone(&writer_ready);
    let writer = thread::spawn(move || {
        let grant = gate_writer.acquire_write();
        writer_ready_clone.store(true, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        grant.release();
    });

    while !writer_ready.load(Ordering::SeqCst) {
        thread::yield_now();
    }

    let gate_reader = gate.clone();
    let reader_finished_clone = Arc::clone(&reader_finished);
    let reader = thread::spawn(move || {
        let grant = gate_reader.acquire_read();
        grant.release();
        reader_finished_clone.store(true, Ordering::SeqCst);
    });

    thread::sleep(Duration::from_millis(10));
    assert!(
        !reader_finished.load(Ordering::SeqCst),
        "reader should be blocked by the writer"
    );

    writer.join().unwrap();
    reader.join().unwrap();
    assert!(
        reader_finished.load(Ordering::SeqCst),
        "reader should have finished after the writer released"
    );
}

#[test]
fn test_writer_blocks_second_writer() {
    let gate = ReaderWriterGate::new();
    let first = gate.acquire_write();

    let gate_second = gate.clone();
    let second_acquired = Arc::new(AtomicBool::new(false));
    let second_acquired_clone = Arc::clone(&second_acquired);
    let second = thread::spawn(move || {
        let grant = gate_second.acquire_write();
        second_acquired_clone.store(true, Ordering::SeqCst);
        grant.release();
    });

    thread::sleep(Duration::from_millis(20));
    assert!(
        !second_acquired.load(Ordering::SeqCst),
        "second writer should wait for the first"
    );

    first.release();
    second.join().unwrap();
    assert!(second_acquired.load(Ordering::SeqCst));
    assert!(!gate.has_writer());
}

#[test]
fn test_writer_waits_for_all_readers() {
    let gate = ReaderWriterGate::new();
    let r1 = gate.acquire_read();
    let r2 = gate.acquire_read();
    assert_eq!(gate.readers(), 2);

    let gate_writer = gate.clone();
    let writer_acquired = Arc::new(AtomicBool::new(false));
    let writer_acquired_clone = Arc::clone(&writer_acquired);
    let writer = thread::spawn(move || {
        let grant = gate_writer.acquire_write();
        writer_acquired_clone.store(true, Ordering::SeqCst);
        grant.release();
    });

    thread::sleep(Duration::from_millis(20));
    assert!(
        !writer_acquired.load(Ordering::SeqCst),
        "writer should wait while two readers hold"
    );

    r1.release();
    thread::sleep(Duration::from_millis(20));
    assert!(
        !writer_acquired.load(Ordering::SeqCst),
        "writer should wait for the last reader"
    );

    r2.release();
    writer.join().unwrap();
    assert!(writer_acquired.load(Ordering::SeqCst));
}

#[test]
fn test_try_read_fails_under_writer_then_acquire_succeeds() {
    let gate = ReaderWriterGate::new();

    let writer = gate.acquire_write();
    assert!(gate.try_read().is_none());

    writer.release();
    let reader = gate.acquire_read();
    assert_eq!(gate.readers(), 1);
    reader.release();
}

#[test]
fn test_grant_released_from_another_thread() {
    let gate = ReaderWriterGate::new();
    let grant = gate.acquire_write();

    let releaser = thread::spawn(move || {
        grant.release();
    });
    releaser.join().unwrap();

    assert!(!gate.has_writer());
    let reader = gate.acquire_read();
    reader.release();
}

//! Routine-level crash tests.
//!
//! A fault routine's job is to kill whatever process runs it, so every
//! test here forks a child, runs exactly one routine in it, and asserts
//! on the termination class the parent observes. The accepted signal
//! sets are deliberately a little wide where the runtime gets a say
//! (the stack guard page is reported through an abort on some setups,
//! and allocators differ in whether the overrun store or the free
//! detects the damage).

#![cfg(unix)]

use rusty_fork::{fork, rusty_fork_id};

/// Fork a child, run `routine` in it, and assert the child was killed
/// by one of `accepted`.
fn expect_fatal_signal<F>(test_name: &str, accepted: &[i32], routine: F)
where
    F: FnOnce(),
{
    fork(
        test_name,
        rusty_fork_id!(),
        |_| {},
        |child, _| {
            let status = child.wait().expect("wait on forked child");
            let signal = status.unix_signal().unwrap_or_else(|| {
                panic!(
                    "routine survived: child exited with {:?} instead of a signal",
                    status.code()
                )
            });
            assert!(
                accepted.contains(&signal),
                "child died with signal {} (accepted: {:?})",
                signal,
                accepted
            );
        },
        routine,
    )
    .expect("failed to fork test child");
}

#[test]
fn null_write_dies_with_segv() {
    expect_fatal_signal(
        "null_write_dies_with_segv",
        &[libc::SIGSEGV],
        crashgen::routines::null_write,
    );
}

#[test]
fn wild_write_dies_with_access_violation() {
    expect_fatal_signal(
        "wild_write_dies_with_access_violation",
        &[libc::SIGSEGV, libc::SIGBUS],
        crashgen::routines::wild_write,
    );
}

#[test]
fn stack_overflow_kills_the_child() {
    expect_fatal_signal(
        "stack_overflow_kills_the_child",
        &[libc::SIGSEGV, libc::SIGBUS, libc::SIGABRT],
        crashgen::routines::stack_overflow,
    );
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
#[test]
fn divide_by_zero_dies_with_sigfpe() {
    expect_fatal_signal(
        "divide_by_zero_dies_with_sigfpe",
        &[libc::SIGFPE],
        crashgen::routines::divide_by_zero,
    );
}

// aarch64's udiv does not trap; the routine falls back to checked
// division, whose panic unwinds the child's test harness instead of
// raising a signal.
#[cfg(target_arch = "aarch64")]
#[test]
fn divide_by_zero_panics_without_a_trapping_divider() {
    fork(
        "divide_by_zero_panics_without_a_trapping_divider",
        rusty_fork_id!(),
        |_| {},
        |child, _| {
            let status = child.wait().expect("wait on forked child");
            assert_eq!(status.unix_signal(), None, "expected a panic, not a signal");
            assert_ne!(status.code(), Some(0), "divide by zero must not succeed");
        },
        || crashgen::routines::divide_by_zero(),
    )
    .expect("failed to fork test child");
}

#[test]
fn illegal_instruction_dies_with_sigill() {
    expect_fatal_signal(
        "illegal_instruction_dies_with_sigill",
        &[libc::SIGILL],
        || {
            // An Err here means the region could not be set up, in
            // which case the child survives and the parent assertion
            // reports it.
            let _ = crashgen::routines::illegal_instruction();
        },
    );
}

#[test]
fn heap_overrun_is_fatal() {
    expect_fatal_signal(
        "heap_overrun_is_fatal",
        &[libc::SIGABRT, libc::SIGSEGV],
        crashgen::routines::heap_overrun,
    );
}

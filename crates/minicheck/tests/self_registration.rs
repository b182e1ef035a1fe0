#![cfg(feature = "harness")]

use std::sync::atomic::{AtomicBool, Ordering};

fn double(x: i32) -> i32 {
    x * 2
}

#[minicheck::test_case]
fn doubling_small() {
    minicheck::check_eq!(4, double(2));
    minicheck::require_eq!(6, double(3));
}

#[minicheck::test_case]
fn doubling_negations() {
    minicheck::require_ne!(7, double(3));
    minicheck::check_ne!(5, double(2));
}

#[minicheck::test_case]
fn boolean_checks() {
    minicheck::check_true!(double(4) == 8);
    minicheck::require_false!(double(4) == 9);
}

static SECOND_HALF_RAN: AtomicBool = AtomicBool::new(false);

#[minicheck::test_case]
fn known_bad_check() {
    minicheck::check_eq!(5, double(2));
    SECOND_HALF_RAN.store(true, Ordering::SeqCst);
}

#[test]
fn declared_cases_are_collected_and_run() {
    // All four #[test_case] functions above end up in the registry without
    // any central listing; exactly one of them records one failed check.
    let first = minicheck::run_all_tests();
    assert_eq!(first, 1);
    assert_eq!(minicheck::tests_ran(), 4);
    assert_eq!(minicheck::tests_failed(), 1);
    assert!(SECOND_HALF_RAN.load(Ordering::SeqCst));

    // A second run resets the counters instead of accumulating, and the
    // registry gains no duplicate entries.
    let second = minicheck::run_all_tests();
    assert_eq!(second, first);
    assert_eq!(minicheck::tests_ran(), 4);
    assert_eq!(minicheck::tests_failed(), 1);
}

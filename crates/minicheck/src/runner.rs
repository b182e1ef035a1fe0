use crate::{registry, report::Printer, TestEntry};

/// Run the given test entries in order and report the results.
///
/// Run-scoped counters are reset first, so repeated invocations yield the
/// same result for the same entries. Each body runs sequentially on the
/// caller's thread; a fatal check returns from the body and the loop simply
/// continues with the next entry.
///
/// The return value is the total number of failed *checks* across the run,
/// not the number of failed tests: a body with three failing checks
/// contributes three. Zero means every check in every body held.
pub fn run_tests(entries: &[TestEntry]) -> usize {
    registry::reset();
    let printer = Printer::new();

    for entry in entries {
        let before = registry::begin_test(entry.name());
        printer.test_starting(entry.name());
        entry.invoke();
        let failed = registry::end_test(before);
        printer.test_ended(entry.name(), failed);
    }

    printer.summary(registry::tests_ran(), registry::tests_failed());
    registry::failed_checks()
}

/// Run every test case registered with `#[test_case]`.
///
/// Registration happens at link time, so the collection is complete before
/// any user code runs and never gains duplicates across repeated calls.
#[cfg(feature = "harness")]
pub fn run_all_tests() -> usize {
    run_tests(&*crate::harness::TEST_CASES)
}

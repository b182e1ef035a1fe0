use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex, PoisonError,
};

/// A registered test case: a display name paired with its body.
///
/// Entries are usually created by `#[test_case]` and live in statics for the
/// whole process; they are never removed from the registry, only re-run.
pub struct TestEntry {
    name: &'static str,
    body: fn(),
}

impl TestEntry {
    /// Create a test entry from a name and a zero-argument body.
    pub const fn new(name: &'static str, body: fn()) -> Self {
        Self { name, body }
    }

    /// Return the display name of this test case.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn invoke(&self) {
        (self.body)();
    }
}

static FAILED_CHECKS: AtomicUsize = AtomicUsize::new(0);
static TESTS_RAN: AtomicUsize = AtomicUsize::new(0);
static TESTS_FAILED: AtomicUsize = AtomicUsize::new(0);

const NO_TEST: &str = "<no test>";

static CURRENT_TEST: Mutex<&'static str> = Mutex::new(NO_TEST);

/// Zero the run-scoped counters.
///
/// The registered entries are untouched; only the failed-checks, tests-ran
/// and tests-failed counters are reset. Called at the start of every run.
pub fn reset() {
    FAILED_CHECKS.store(0, Ordering::SeqCst);
    TESTS_RAN.store(0, Ordering::SeqCst);
    TESTS_FAILED.store(0, Ordering::SeqCst);
}

/// Total number of failed checks recorded since the last [`reset`].
pub fn failed_checks() -> usize {
    FAILED_CHECKS.load(Ordering::SeqCst)
}

/// Number of test bodies started since the last [`reset`].
pub fn tests_ran() -> usize {
    TESTS_RAN.load(Ordering::SeqCst)
}

/// Number of test bodies that recorded at least one failed check since the
/// last [`reset`].
pub fn tests_failed() -> usize {
    TESTS_FAILED.load(Ordering::SeqCst)
}

pub(crate) fn record_failed_check() {
    FAILED_CHECKS.fetch_add(1, Ordering::SeqCst);
}

/// Mark `name` as the running test and return the failed-checks snapshot.
pub(crate) fn begin_test(name: &'static str) -> usize {
    TESTS_RAN.fetch_add(1, Ordering::SeqCst);
    *lock_current() = name;
    failed_checks()
}

/// Judge the test against the snapshot taken by `begin_test`.
///
/// Returns `true` if any check failed while the body ran.
pub(crate) fn end_test(before: usize) -> bool {
    *lock_current() = NO_TEST;
    let failed = failed_checks() > before;
    if failed {
        TESTS_FAILED.fetch_add(1, Ordering::SeqCst);
    }
    failed
}

pub(crate) fn current_test() -> &'static str {
    *lock_current()
}

fn lock_current() -> std::sync::MutexGuard<'static, &'static str> {
    CURRENT_TEST.lock().unwrap_or_else(PoisonError::into_inner)
}

#![cfg(feature = "harness")]

use crate::registry::TestEntry;
use linkme::distributed_slice;

/// The link-time collection of every `#[test_case]` in the final binary.
///
/// Element order is the link order: stable for a given build, deterministic
/// within one compilation unit, unspecified across units.
#[doc(hidden)]
#[distributed_slice]
pub static TEST_CASES: [TestEntry] = [..];

#[doc(hidden)] // private API.
#[macro_export]
macro_rules! __test_case_entry {
    ( $item:item ) => {
        #[$crate::_harness_reexports::distributed_slice(
            $crate::_harness_reexports::TEST_CASES
        )]
        #[linkme(crate = $crate::_harness_reexports::linkme)]
        $item
    };
}

#[doc(hidden)]
pub fn main() {
    let failed_checks = crate::runner::run_all_tests();
    std::process::exit(failed_checks as i32);
}

/// Generate the main function for running the test application.
///
/// The process exits with the total failed-check count, so zero means
/// success. Note that exit statuses are truncated to a byte on most
/// platforms; a run with 256 failed checks would exit with status 0.
#[macro_export]
macro_rules! test_harness {
    () => {
        fn main() {
            $crate::_harness_reexports::main()
        }
    };
}

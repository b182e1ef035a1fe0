/*!
A minimal self-registering unit testing framework.

Test cases are declared anywhere with [`#[test_case]`](macro@test_case) and
collected at link time, without a central registry file. A single entry
point runs them all in sequence and reports the results on standard output,
with failure messages pointing at the exact check that did not hold.

```no_run
use minicheck::{check_eq, require_ne};

fn double(x: i32) -> i32 {
    x * 2
}

#[minicheck::test_case]
fn doubling() {
    check_eq!(4, double(2));
    require_ne!(7, double(3));
}

fn main() {
    std::process::exit(minicheck::run_all_tests() as i32);
}
```

The `main` above can also be generated with [`test_harness!()`](crate::test_harness).
!*/

#![doc(html_root_url = "https://docs.rs/minicheck/0.1.0")]
#![deny(missing_docs)]

mod checks;
#[cfg(feature = "harness")]
mod harness;
mod registry;
mod report;
mod runner;

pub use crate::registry::{failed_checks, reset, tests_failed, tests_ran, TestEntry};
pub use crate::runner::run_tests;

#[cfg(feature = "harness")]
pub use crate::runner::run_all_tests;

/// Declare a test case and register it for execution.
pub use minicheck_macros::test_case;

/// Re-exported items for the check macros.
#[doc(hidden)]
pub mod _internal {
    pub use crate::checks::report_check_failure;
}

/// Re-exported items for test_harness!() and __test_case_entry!()
#[cfg(feature = "harness")]
#[doc(hidden)]
pub mod _harness_reexports {
    pub use crate::harness::{main, TEST_CASES};
    pub use linkme::{self, distributed_slice};
}

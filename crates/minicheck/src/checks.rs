//! The check primitives used inside test bodies.
//!
//! Each comparison comes in two severities: `check_*` records a failure and
//! lets the body continue, `require_*` records the failure and returns from
//! the enclosing body. Neither panics; a failed check is a recorded fact,
//! not a runtime error.

use crate::{registry, report};

#[doc(hidden)]
pub fn report_check_failure(file: &'static str, line: u32, expr: &'static str) {
    registry::record_failed_check();
    report::check_failure(file, registry::current_test(), line, expr);
}

/// Check that two expressions compare equal. Records a failure and continues
/// on violation.
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {
        if !(($lhs) == ($rhs)) {
            $crate::_internal::report_check_failure(
                ::core::file!(),
                ::core::line!(),
                ::core::concat!(::core::stringify!($lhs), " == ", ::core::stringify!($rhs)),
            );
        }
    };
}

/// Check that two expressions compare unequal. Records a failure and
/// continues on violation.
#[macro_export]
macro_rules! check_ne {
    ($lhs:expr, $rhs:expr) => {
        if ($lhs) == ($rhs) {
            $crate::_internal::report_check_failure(
                ::core::file!(),
                ::core::line!(),
                ::core::concat!(::core::stringify!($lhs), " != ", ::core::stringify!($rhs)),
            );
        }
    };
}

/// Check that an expression is `true`. Records a failure and continues on
/// violation.
#[macro_export]
macro_rules! check_true {
    ($cond:expr) => {
        if !($cond) {
            $crate::_internal::report_check_failure(
                ::core::file!(),
                ::core::line!(),
                ::core::concat!("!", ::core::stringify!($cond)),
            );
        }
    };
}

/// Check that an expression is `false`. Records a failure and continues on
/// violation.
#[macro_export]
macro_rules! check_false {
    ($cond:expr) => {
        if $cond {
            $crate::_internal::report_check_failure(
                ::core::file!(),
                ::core::line!(),
                ::core::stringify!($cond),
            );
        }
    };
}

/// Check that two expressions compare equal. Records a failure and returns
/// from the enclosing test body on violation.
#[macro_export]
macro_rules! require_eq {
    ($lhs:expr, $rhs:expr) => {
        if !(($lhs) == ($rhs)) {
            $crate::_internal::report_check_failure(
                ::core::file!(),
                ::core::line!(),
                ::core::concat!(::core::stringify!($lhs), " == ", ::core::stringify!($rhs)),
            );
            return;
        }
    };
}

/// Check that two expressions compare unequal. Records a failure and returns
/// from the enclosing test body on violation.
#[macro_export]
macro_rules! require_ne {
    ($lhs:expr, $rhs:expr) => {
        if ($lhs) == ($rhs) {
            $crate::_internal::report_check_failure(
                ::core::file!(),
                ::core::line!(),
                ::core::concat!(::core::stringify!($lhs), " != ", ::core::stringify!($rhs)),
            );
            return;
        }
    };
}

/// Check that an expression is `true`. Records a failure and returns from
/// the enclosing test body on violation.
#[macro_export]
macro_rules! require_true {
    ($cond:expr) => {
        if !($cond) {
            $crate::_internal::report_check_failure(
                ::core::file!(),
                ::core::line!(),
                ::core::concat!("!", ::core::stringify!($cond)),
            );
            return;
        }
    };
}

/// Check that an expression is `false`. Records a failure and returns from
/// the enclosing test body on violation.
#[macro_export]
macro_rules! require_false {
    ($cond:expr) => {
        if $cond {
            $crate::_internal::report_check_failure(
                ::core::file!(),
                ::core::line!(),
                ::core::stringify!($cond),
            );
            return;
        }
    };
}

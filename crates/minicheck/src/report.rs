use console::{Style, StyledObject, Term};
use std::io::Write as _;

/// Prints run progress and the final summary to standard output.
///
/// Every record is flushed immediately so that failure reports emitted from
/// inside test bodies interleave in execution order. Styling is forced on;
/// color in this design is unconditional.
pub(crate) struct Printer {
    term: Term,
    style: Style,
}

impl Printer {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::buffered_stdout(),
            style: Style::new().force_styling(true),
        }
    }

    fn styled<D>(&self, val: D) -> StyledObject<D> {
        self.style.apply_to(val)
    }

    pub(crate) fn test_starting(&self, name: &str) {
        let _ = writeln!(&self.term, "{} {}", self.styled("Testing").green(), name);
        let _ = self.term.flush();
    }

    pub(crate) fn test_ended(&self, name: &str, failed: bool) {
        let verb = if failed {
            self.styled("Tested").red()
        } else {
            self.styled("Tested").green()
        };
        let _ = writeln!(&self.term, "{} {}", verb, name);
        let _ = self.term.flush();
    }

    pub(crate) fn summary(&self, ran: usize, tests_failed: usize) {
        let _ = writeln!(&self.term, "{}", self.summary_line(ran, tests_failed));
        let _ = self.term.flush();
    }

    // Counts stay plain text; only the verdict word carries color.
    fn summary_line(&self, ran: usize, tests_failed: usize) -> String {
        if tests_failed > 0 {
            format!(
                "Ran {} tests and {} {}",
                ran,
                tests_failed,
                self.styled("failed").red()
            )
        } else {
            format!("Ran {} tests and {}", ran, self.styled("none failed").green())
        }
    }
}

/// Emit the one-line failure report for a check.
///
/// The line goes to standard output, uncolored, regardless of terminal
/// support: `Test failed: <file>.<test>.<line>: <expression>`.
pub(crate) fn check_failure(file: &'static str, test: &str, line: u32, expr: &'static str) {
    let term = Term::buffered_stdout();
    let _ = writeln!(&term, "Test failed: {}.{}.{}: {}", file, test, line, expr);
    let _ = term.flush();
}

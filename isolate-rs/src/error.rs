use ariadne::Fmt;
use isolate_attrs::ErrorKind;
use isolate_error::{Error, EXPR};
use log::error;

/// An equation was given without a target, and it does not mention exactly one variable.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = if candidates.is_empty() {
        String::from("there is no variable to isolate")
    } else {
        format!("cannot tell which of {} to isolate", candidates.join(", "))
    },
    labels = ["in this equation"],
    help = format!("name the variable to isolate, as in {}", "x: 2 * x = 8".fg(EXPR)),
)]
pub struct AmbiguousTarget {
    /// The variables mentioned by the equation, sorted by name.
    pub candidates: Vec<String>,
}

/// Report the error to stderr.
///
/// A failure to write the report is logged instead of propagated, since there is nowhere else to
/// send it.
pub fn report_to_stderr(err: &Error, input: &str) {
    if let Err(io_err) = err.report_to_stderr("input", input) {
        error!("failed to write error report: {}", io_err);
    }
}

use ariadne::Source;
use symcalc_error::Error;

/// Reports the error to stderr, highlighting the parts of `input` it points at.
///
/// Falls back to the plain message if the report could not be written.
pub fn report_to_stderr(err: &Error, input: &str) {
    if err.build_report("input").eprint(("input", Source::from(input))).is_err() {
        eprintln!("error: {}", err);
    }
}

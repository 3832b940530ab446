//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the source regions it came from.

// lets `#[derive(ErrorKind)]` refer to `symcalc_error::*` from inside this crate
extern crate self as symcalc_error;

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually implemented with `#[derive(ErrorKind)]` from the `symcalc-attrs` crate.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], so that callers can recover the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    ///
    /// `spans` may be empty if the error did not originate from a region of source code, such as
    /// when evaluating an expression that was built by the differentiator.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that is not tied to any region of source code.
    pub fn unspanned(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Returns a reference to the error kind if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the error kind is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<K>().is_some()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())?;
        if let Some(span) = self.spans.first() {
            write!(f, " (at {}..{})", span.start, span.end)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::Source;
    use super::*;
    use symcalc_attrs::ErrorKind;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = format!("`{}` went wrong", self.what),
        labels = ["right here"],
        help = "try something else",
    )]
    struct Oops {
        what: String,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = "nothing to point at", labels = ["this label has no span"])]
    struct Floating;

    /// Renders the report into a string without color codes.
    fn render(err: &Error, src: &str) -> String {
        let mut buf = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(src)), &mut buf)
            .unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn downcast() {
        let err = Error::new(vec![0..3], Oops { what: "foo".to_string() });
        assert!(err.is::<Oops>());
        assert!(!err.is::<Floating>());
        assert_eq!(err.downcast_ref::<Oops>().unwrap().what, "foo");
    }

    #[test]
    fn display() {
        let err = Error::new(vec![4..7], Oops { what: "bar".to_string() });
        assert_eq!(err.to_string(), "`bar` went wrong (at 4..7)");

        let err = Error::unspanned(Floating);
        assert_eq!(err.to_string(), "nothing to point at");
    }

    #[test]
    fn report_with_span() {
        let err = Error::new(vec![2..5], Oops { what: "baz".to_string() });
        let out = render(&err, "1 + baz");
        assert!(out.contains("`baz` went wrong"));
        assert!(out.contains("right here"));
        assert!(out.contains("try something else"));
    }

    #[test]
    fn report_without_span() {
        let err = Error::unspanned(Floating);
        let out = render(&err, "x");
        assert!(out.contains("nothing to point at"));
        assert!(!out.contains("this label has no span"));
    }
}

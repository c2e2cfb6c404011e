use thiserror::Error;

/// The generic Error type covering the failures this library can surface.
///
/// Parsing itself never produces an [`Error`]: a malformed or irrelevant node
/// string is a plain no-match, reported as [`None`] by the individual parsers.
/// Errors only appear on explicit accessors that ask for a derived value and
/// want the failure, such as
/// [`RegexType::try_pattern`](crate::node::types::RegexType::try_pattern).
#[derive(Error, Debug)]
pub enum Error {
    /// A regex node's pattern string is not a valid regular expression.
    ///
    /// The raw pattern string is still available losslessly through
    /// [`RegexType::pattern_string`](crate::node::types::RegexType::pattern_string);
    /// only the compiled form is absent.
    #[error("{0}")]
    InvalidPattern(#[from] regex::Error),
}

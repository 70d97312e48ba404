//! Errors raised while encoding AMQP 1.0 values.

/// Errors that can occur while turning a value into its AMQP 1.0 wire representation.
///
/// Both variants are raised before any byte of the failing value has been appended to the
/// output buffer, so a caller that catches the error is left with a buffer exactly as long as
/// it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A numeric value, or an encoded length, fell outside the range permitted for its AMQP
    /// type.
    #[error("{value} is out of range for {type_name} ({reason})")]
    RangeError {
        /// Name of the AMQP type the value was being encoded as.
        type_name: &'static str,
        /// Printable form of the offending value.
        value: String,
        /// Why the value is out of range.
        reason: &'static str,
    },

    /// An array was asked to encode elements that do not all share the same constructor, or a
    /// described value's payload did not match the shape its `TYPE` tag implies.
    #[error("{0}")]
    TypeError(String),

    /// A `{TYPE, VALUE}` descriptor named a `TYPE` tag this encoder does not recognize.
    #[error("unknown AMQP type tag: {0}")]
    UnknownTypeTag(String),
}

impl Error {
    pub(crate) fn range(type_name: &'static str, value: impl std::fmt::Display, reason: &'static str) -> Self {
        Error::RangeError {
            type_name,
            value: value.to_string(),
            reason,
        }
    }

    pub(crate) fn mismatched_array_element(expected: &str, found: &str) -> Self {
        Error::TypeError(format!(
            "array elements must share one constructor: expected {expected}, found {found}"
        ))
    }
}

/// Convenience alias used throughout the encoder.
pub type Result<T> = core::result::Result<T, Error>;

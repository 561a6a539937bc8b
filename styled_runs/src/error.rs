// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rich error type for the few fallible operations in this crate.
///
/// Building styled runs never fails. Errors only come from converting unit ranges into byte
/// ranges of a finished [`StyledRuns`](crate::StyledRuns), and from appending raw bytes that
/// are not valid UTF-8 through [`StyleRunBuilder::append_utf8`](crate::StyleRunBuilder::append_utf8).
///
/// Carries a non-exhaustive [`ErrorKind`] plus the offending range and, for decoding
/// failures, a [`Utf8Info`] describing where the input stopped being valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The start of the offending range.
    ///
    /// Unit index for range errors, byte index for decoding errors.
    start: usize,

    /// The end (exclusive) of the offending range.
    end: usize,

    /// The length of the input the range was checked against.
    len: usize,

    /// Extra detail for decoding errors.
    utf8: Option<Utf8Info>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports the length of the checked input; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start index of the offending range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end index (exclusive) of the offending range.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length of the input at the time of the error.
    ///
    /// This is a unit count for range errors and a byte count for decoding errors.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Extra details for decoding errors, if available.
    pub fn utf8(&self) -> Option<Utf8Info> {
        self.utf8
    }

    pub(crate) fn invalid_bounds(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            start,
            end,
            len,
            utf8: None,
        }
    }

    pub(crate) fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            start,
            end,
            len,
            utf8: None,
        }
    }

    pub(crate) fn invalid_utf8(len: usize, source: core::str::Utf8Error) -> Self {
        let valid_up_to = source.valid_up_to();
        let error_len = source.error_len();
        Self {
            kind: ErrorKind::InvalidUtf8,
            start: valid_up_to,
            end: error_len.map_or(len, |error_len| valid_up_to + error_len),
            len,
            utf8: Some(Utf8Info {
                valid_up_to,
                error_len,
            }),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidBounds => write!(
                f,
                "unit range {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::InvalidRange => {
                write!(
                    f,
                    "invalid unit range {}..{}: start > end",
                    self.start, self.end
                )
            }
            ErrorKind::InvalidUtf8 => match self.utf8.and_then(|info| info.error_len) {
                Some(error_len) => write!(
                    f,
                    "invalid UTF-8 sequence of {} bytes at index {} (len {})",
                    error_len, self.start, self.len
                ),
                None => write!(
                    f,
                    "incomplete UTF-8 sequence at index {} (len {})",
                    self.start, self.len
                ),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Provided unit indices were out of bounds relative to the number of units.
    InvalidBounds,

    /// The provided range had `start > end`.
    InvalidRange,

    /// Appended bytes were not valid UTF-8.
    InvalidUtf8,
}

/// Details about where appended bytes stopped being valid UTF-8.
///
/// Returned by [`Error::utf8`] when the error kind is [`ErrorKind::InvalidUtf8`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Utf8Info {
    /// The number of leading bytes that were valid UTF-8.
    pub valid_up_to: usize,

    /// The length of the invalid sequence, or `None` if the input ended in the middle of a
    /// sequence that could still have been completed.
    pub error_len: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use alloc::format;
    use alloc::vec;

    #[test]
    fn invalid_utf8_records_offending_sequence() {
        let bytes = vec![b'a', b'b', 0xFF, b'c'];
        let source = core::str::from_utf8(&bytes).unwrap_err();
        let err = Error::invalid_utf8(bytes.len(), source);
        assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
        assert_eq!(err.start(), 2);
        assert_eq!(err.end(), 3);
        assert_eq!(err.len(), 4);
        let info = err.utf8().expect("utf8 info");
        assert_eq!(info.valid_up_to, 2);
        assert_eq!(info.error_len, Some(1));
        let msg = format!("{err}");
        assert!(msg.contains("invalid UTF-8"));
        assert!(msg.contains("index 2"));
    }

    #[test]
    fn truncated_utf8_reports_incomplete_sequence() {
        // First two bytes of a three byte sequence.
        let bytes = vec![b'x', 0xE2, 0x82];
        let source = core::str::from_utf8(&bytes).unwrap_err();
        let err = Error::invalid_utf8(bytes.len(), source);
        assert_eq!(err.start(), 1);
        assert_eq!(err.end(), 3);
        assert_eq!(err.utf8().and_then(|info| info.error_len), None);
        assert!(format!("{err}").contains("incomplete"));
    }

    #[test]
    fn range_errors_display_the_range() {
        let err = Error::invalid_bounds(0, 7, 6);
        let msg = format!("{err}");
        assert!(msg.contains("0..7"));
        assert!(msg.contains("len 6"));

        let err = Error::invalid_range(4, 3, 6);
        let msg = format!("{err}");
        assert!(msg.contains("4..3"));
        assert!(msg.contains("start > end"));
        assert!(err.utf8().is_none());
    }
}

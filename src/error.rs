use std::fmt;

/// Errors reported by cursor and list operations.
///
/// # Examples
///
/// ```
/// use cursor_list::{Error, List};
///
/// let mut list: List<i32> = List::new();
/// let mut cursor = list.cursor_end_mut();
/// assert_eq!(cursor.try_remove(), Err(Error::Sentinel));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation requires a value-carrying node, but the cursor
    /// references the sentinel. This single check covers both "cursor at
    /// the end position" and "empty list".
    Sentinel,
    /// A checked cursor move would pass through the sentinel boundary.
    Boundary,
    /// A seek target past the one-past-the-end position.
    OutOfBounds,
    /// The splice destination lies inside the range being moved.
    SpliceOverlap,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Sentinel => f.write_str("the cursor must reference a removable node"),
            Error::Boundary => f.write_str("cursor move across the sentinel boundary"),
            Error::OutOfBounds => f.write_str("seek target is past the end of the list"),
            Error::SpliceOverlap => {
                f.write_str("splice destination lies inside the range being moved")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn error_display() {
        assert_eq!(
            Error::Sentinel.to_string(),
            "the cursor must reference a removable node"
        );
        assert_eq!(
            Error::SpliceOverlap.to_string(),
            "splice destination lies inside the range being moved"
        );
    }
}

//! Offset pagination
//!
//! A page token is the decimal row offset where the next page starts. It is
//! opaque to callers: they only pass back what a previous page returned.

use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize};

/// Rows per page
pub const PAGE_SIZE: i64 = 10;

/// One page of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Token for the following page; `None` on the last page
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// True when no further page follows
    pub fn is_last(&self) -> bool {
        self.next_page_token.is_none()
    }
}

/// Decode a page token into a row offset
///
/// An absent or empty token means the first page. Anything else must be
/// plain ASCII digits; signs and whitespace are rejected.
pub fn parse_cursor(cursor: Option<&str>) -> Result<i64> {
    match cursor {
        None | Some("") => Ok(0),
        Some(raw) if raw.bytes().all(|b| b.is_ascii_digit()) => raw
            .parse::<i64>()
            .map_err(|_| BookshelfError::invalid_cursor(raw)),
        Some(raw) => Err(BookshelfError::invalid_cursor(raw)),
    }
}

/// Token for the page after the one starting at `offset`, given `total` rows
pub fn next_cursor(offset: i64, total: i64) -> Option<String> {
    let next = offset.checked_add(PAGE_SIZE)?;
    (next < total).then(|| next.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cursor_is_first_page() {
        assert_eq!(parse_cursor(None).unwrap(), 0);
        assert_eq!(parse_cursor(Some("")).unwrap(), 0);
    }

    #[test]
    fn test_numeric_cursor() {
        assert_eq!(parse_cursor(Some("10")).unwrap(), 10);
        assert_eq!(parse_cursor(Some("0")).unwrap(), 0);
        assert_eq!(parse_cursor(Some("007")).unwrap(), 7);
    }

    #[test]
    fn test_rejects_malformed_cursor() {
        for bad in [
            "not-a-number",
            "-10",
            "+10",
            "1.5",
            " 10",
            "10abc",
            "99999999999999999999",
        ] {
            let err = parse_cursor(Some(bad)).unwrap_err();
            assert!(
                matches!(err, BookshelfError::InvalidCursor { ref cursor } if cursor == bad),
                "expected InvalidCursor for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_next_cursor_boundaries() {
        assert_eq!(next_cursor(0, 0), None);
        assert_eq!(next_cursor(0, 10), None);
        assert_eq!(next_cursor(0, 11), Some("10".to_string()));
        assert_eq!(next_cursor(10, 11), None);
        assert_eq!(next_cursor(10, 25), Some("20".to_string()));
        assert_eq!(next_cursor(i64::MAX - 1, i64::MAX), None);
    }
}

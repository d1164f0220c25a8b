//! Query-string coercion for book listing.

use crate::repo::book_repo::BookFilter;
use serde::Deserialize;

/// Raw list parameters as received from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BookQueryParams {
    pub name: Option<String>,
    pub finished: Option<String>,
    pub reading: Option<String>,
}

impl BookQueryParams {
    /// Converts raw parameters into a repository filter.
    ///
    /// - An empty `name` imposes no constraint.
    /// - A flag is `true` only for the literal `"1"`; any other supplied
    ///   value means `false`.
    pub fn into_filter(self) -> BookFilter {
        BookFilter {
            name: self.name.filter(|value| !value.is_empty()),
            finished: self.finished.as_deref().map(parse_flag),
            reading: self.reading.as_deref().map(parse_flag),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1"
}

#[cfg(test)]
mod tests {
    use super::BookQueryParams;
    use crate::repo::book_repo::BookFilter;

    #[test]
    fn flags_are_true_only_for_one() {
        let filter = BookQueryParams {
            name: None,
            finished: Some("1".to_string()),
            reading: Some("true".to_string()),
        }
        .into_filter();

        assert_eq!(filter.finished, Some(true));
        assert_eq!(filter.reading, Some(false));
    }

    #[test]
    fn empty_name_and_absent_flags_impose_no_constraint() {
        let filter = BookQueryParams {
            name: Some(String::new()),
            ..BookQueryParams::default()
        }
        .into_filter();

        assert_eq!(filter, BookFilter::default());
    }
}

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Failure to interpret a pagination link.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// The link is not a parsable URL.
    #[error("failed to parse pagination link `{link}`: {source}")]
    InvalidLink {
        /// The offending link.
        link: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
    /// The link has no `page` query parameter.
    #[error("pagination link `{link}` is missing the `page` parameter")]
    MissingPage {
        /// The offending link.
        link: String,
    },
    /// The `page` parameter did not hold an integer.
    #[error("pagination link `{link}` has a non-numeric `page` value: {source}")]
    InvalidPage {
        /// The offending link.
        link: String,
        /// Parser failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Pagination links returned with list responses. Any link may be empty.
///
/// Links are a value snapshot, recomputed by the server on every list call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Link to the first page.
    pub first: String,
    /// Link to the last page.
    pub last: String,
    /// Link to the previous page, empty on the first page.
    #[serde(rename = "prev")]
    pub previous: String,
    /// Link to the next page, empty on the last page.
    pub next: String,
}

impl Pagination {
    /// Whether a further page exists.
    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }

    /// Whether a preceding page exists.
    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }

    /// Total page count advertised by the `last` link.
    ///
    /// An empty link means the whole collection fits on one page. A present
    /// link must carry an integer `page` query parameter; anything else is
    /// surfaced as an error rather than silently treated as a single page.
    pub fn total_pages(&self) -> Result<u64, PaginationError> {
        if self.last.is_empty() {
            return Ok(1);
        }
        let link = Url::parse(&self.last)
            .map_err(|source| PaginationError::InvalidLink { link: self.last.clone(), source })?;
        let raw = link
            .query_pairs()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned())
            .ok_or_else(|| PaginationError::MissingPage { link: self.last.clone() })?;
        raw.parse()
            .map_err(|source| PaginationError::InvalidPage { link: self.last.clone(), source })
    }
}

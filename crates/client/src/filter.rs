use crate::error::Error;

/// Server-side filter accepted by the monitor listing endpoints.
///
/// Exactly one query parameter is emitted per filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonitorFilter {
    /// Match monitors whose target URL contains the value.
    Url(String),
    /// Match monitors by their human-readable name.
    PronounceableName(String),
}

impl MonitorFilter {
    /// Build a filter from a raw `(kind, value)` pair as accepted on the
    /// command line. Unknown kinds are rejected without touching the
    /// network.
    pub fn from_kind(kind: &str, value: impl Into<String>) -> Result<Self, Error> {
        match kind {
            "url" => Ok(Self::Url(value.into())),
            "pronounceable_name" => Ok(Self::PronounceableName(value.into())),
            other => Err(Error::Validation(format!("invalid filter kind: {other}"))),
        }
    }

    /// The query parameter this filter maps to.
    pub(crate) fn query_pair(&self) -> (&'static str, &str) {
        match self {
            Self::Url(value) => ("url", value),
            Self::PronounceableName(value) => ("pronounceable_name", value),
        }
    }
}

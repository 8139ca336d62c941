use crate::error::Result;

/// Result of a non-fatal fetch. Distinguishes a resource that is genuinely
/// empty from one whose fetch failed, instead of collapsing both into an
/// empty collection.
#[derive(Debug, Clone)]
pub enum FetchOutcome<T> {
    Retrieved(T),
    Unavailable(String),
}

impl<T> FetchOutcome<T> {
    /// Wraps a fetch result, logging the diagnostic for failures once at the
    /// point of degradation.
    pub fn of(resource: &str, result: Result<T>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Retrieved(value),
            Err(err) => {
                tracing::warn!("failed to fetch {}: {}", resource, err);
                FetchOutcome::Unavailable(err.to_string())
            }
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchOutcome::Retrieved(value) => Some(value),
            FetchOutcome::Unavailable(_) => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchOutcome::Unavailable(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Retrieved(value) => FetchOutcome::Retrieved(f(value)),
            FetchOutcome::Unavailable(reason) => FetchOutcome::Unavailable(reason),
        }
    }
}

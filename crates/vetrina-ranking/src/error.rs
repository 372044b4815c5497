use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    /// The initial approved-brand list could not be fetched. This is the only
    /// fatal condition: per-brand counter lookups degrade to zero instead.
    #[error("signal store unavailable: {0}")]
    Store(String),
}

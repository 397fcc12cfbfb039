use thiserror::Error;

/// How one lookup can fail.
///
/// Everything except `Submit` is swallowed per query: a failed branch of
/// the policy tree yields no addresses and nothing else happens. `Submit`
/// means the environment cannot resolve at all, which ends the run.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The name exists but has no records of the requested type.
    #[error("no data")]
    NoData,
    /// The resolver could not produce an answer for this query.
    #[error("resolver failure: {0}")]
    Resolver(String),
    /// The query could not even be submitted.
    #[error("could not submit query: {0}")]
    Submit(#[from] std::io::Error),
}

pub use anyhow::{anyhow, bail, ensure};
pub use thiserror::Error;

pub type EmptyResult = anyhow::Result<()>;

#[derive(Debug, Error)]
pub enum ReaperError {
    // The raw kube error text is attached so a failed teardown can be
    // diagnosed without re-running with extra verbosity.
    #[error("could not list instances in namespace {namespace}: {reason}")]
    QueryFailed { namespace: String, reason: String },
}

impl ReaperError {
    pub fn query_failed(namespace: &str, err: kube::Error) -> anyhow::Error {
        anyhow!(ReaperError::QueryFailed { namespace: namespace.into(), reason: err.to_string() })
    }
}

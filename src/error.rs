use crate::client::RemoteQueryError;
use thiserror::Error;

/// Everything a module invocation can fail with.
///
/// `EmptyParameter` is a blocking validation failure, `Remote` wraps the
/// collaborator's own error unchanged, and `ModuleNotFound` is a
/// configuration error that is fatal to the invocation. None of these are
/// retried and a remote failure never yields a partial result.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("parameter must not be blank")]
    EmptyParameter,

    #[error("remote query failed: {0}")]
    Remote(#[from] RemoteQueryError),

    #[error("no module registered under '{0}'")]
    ModuleNotFound(String),

    #[error("module '{0}' exposes no capability")]
    NoCapability(String),

    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("could not parse assignment group payload: {0}")]
    Payload(#[from] serde_json::Error),
}

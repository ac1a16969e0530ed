/// Trait definition for the device-management backend client.
use crate::IdentityRecord;
use thiserror::Error;

/// Failure reported by the remote collaborator.
///
/// The core treats this as opaque: it carries whatever the transport layer
/// had to say and is surfaced to the caller unchanged, wrapped in
/// `QueryError::Remote`. No retry, no partial-result salvage.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RemoteQueryError {
    message: String,
}

impl RemoteQueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The three logical queries the console issues against the backend.
///
/// Wire format, transport and authentication live behind this trait; the
/// core only ever sees flat identity records. Implementing this trait with
/// a mock is how the modules are tested without a live backend.
#[cfg_attr(test, mockall::automock)]
pub trait RemoteQueryClient: Send + Sync {
    /// Enumerate every known identity. Each record carries at least the
    /// designated `UserName` field.
    fn enumerate_identities(&self) -> Result<Vec<IdentityRecord>, RemoteQueryError>;

    /// Fetch the device records enrolled under one identity.
    fn fetch_detail_by_identity(&self, name: &str)
        -> Result<Vec<IdentityRecord>, RemoteQueryError>;

    /// Direct name-keyed lookup, used by the non-composite modules.
    fn fetch_by_name(&self, name: &str) -> Result<Vec<IdentityRecord>, RemoteQueryError>;
}

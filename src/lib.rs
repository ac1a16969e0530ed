#![forbid(unsafe_code)]

pub mod client;
mod error;
pub mod plugin;
mod registry;

pub use crate::error::QueryError;
pub use crate::registry::PluginRegistry;

/// One flat key-value entity returned by the remote collaborator. Key order
/// is preserved so columns are discovered in the order keys first appear.
pub type IdentityRecord = serde_json::Map<String, serde_json::Value>;

///
/// Expose all structures required in virtually any console host
///
/// ```
/// use mdm_console::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{RemoteQueryClient, RemoteQueryError};
    pub use crate::plugin::{
        ContextAction, InvokeOutput, Module, ResultTable, SelectionContext,
    };
    pub use crate::PluginRegistry;
    pub use crate::{IdentityRecord, QueryError};
}

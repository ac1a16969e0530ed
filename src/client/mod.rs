//! Abstract surface of the remote device-management backend.
//!
//! The console core never talks to the network itself; every module holds an
//! `Arc<dyn RemoteQueryClient>` and issues one of the three logical queries
//! through it.

mod trait_def;

pub use trait_def::{RemoteQueryClient, RemoteQueryError};

#[cfg(test)]
pub(crate) use trait_def::MockRemoteQueryClient;

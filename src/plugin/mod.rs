mod _enums;
mod _traits;
pub mod context;
mod module;
pub mod modules;
pub mod table;

// Re-exporting all public structures
pub use _enums::capability::CapabilityKind;
pub use _enums::invocation::InvokeOutput;

pub use _traits::module_plugin::{ModulePlugin, TabularProducer, TextProducer};

pub use context::{ContextAction, SelectionContext};
pub use module::Module;
pub use table::ResultTable;

use crate::plugin::context::{ContextAction, SelectionContext};
use crate::plugin::table::ResultTable;
use crate::QueryError;

/// Base contract every console module satisfies.
pub trait ModulePlugin: Send + Sync {
    /// Stable name, unique within the registry, used as the menu key.
    fn name(&self) -> String;

    /// One-time setup hook, idempotent, for logging and warm-up only.
    /// A failure here is logged by the registry and never unlists the
    /// module; it carries no essential state.
    fn initialize(&self) -> Result<(), QueryError> {
        Ok(())
    }
}

/// Capability of producing a result table for a parameter.
pub trait TabularProducer: ModulePlugin {
    /// Fails with `QueryError::EmptyParameter` on blank input and
    /// `QueryError::Remote` when the backend call fails.
    fn fetch_table(&self, parameter: &str) -> Result<ResultTable, QueryError>;

    /// Contextual actions for the current selection. The `enabled` flag on
    /// each action is resolved against `ctx`; callers re-request on every
    /// selection change.
    fn context_actions(&self, ctx: &SelectionContext) -> Vec<ContextAction> {
        let _ = ctx;
        Vec::new()
    }
}

/// Capability of producing a plain-text result for a parameter.
pub trait TextProducer: ModulePlugin {
    /// Same error contract as `TabularProducer::fetch_table`.
    fn fetch_text(&self, parameter: &str) -> Result<String, QueryError>;
}

/// Blank-input guard shared by the built-in modules.
pub(crate) fn require_parameter(parameter: &str) -> Result<&str, QueryError> {
    let trimmed = parameter.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyParameter);
    }
    Ok(trimmed)
}

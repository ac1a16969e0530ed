/// Module registry and invocation dispatch.
use crate::plugin::context::{ContextAction, SelectionContext};
use crate::plugin::{CapabilityKind, InvokeOutput, Module};
use crate::QueryError;

/// Holds the console's modules in registration order and routes every
/// user-issued invocation to the right capability.
///
/// The module list is fixed after construction; registration order is the
/// menu display order and is never reshuffled at runtime.
#[derive(Default)]
pub struct PluginRegistry {
    modules: Vec<Module>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module and run its one-time setup. An initialization failure
    /// is logged and the module stays listed; init carries no essential
    /// state, so individual capability calls may still fail on their own.
    pub fn register(&mut self, module: Module) {
        if let Err(err) = module.initialize() {
            log::warn!("module '{}' failed to initialize: {err}", module.name());
        }
        log::debug!(
            "registered module '{}' with capabilities {:?}",
            module.name(),
            module.capabilities()
        );
        self.modules.push(module);
    }

    /// Read-only view of the modules in registration order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    fn find(&self, name: &str) -> Result<&Module, QueryError> {
        self.modules
            .iter()
            .find(|m| m.name() == name)
            .ok_or_else(|| QueryError::ModuleNotFound(name.to_string()))
    }

    /// Route an invocation to the named module. The tabular capability wins
    /// when a module carries both, a table being strictly richer than text;
    /// the module's own error propagates unchanged.
    pub fn invoke(&self, name: &str, parameter: &str) -> Result<InvokeOutput, QueryError> {
        let module = self.find(name)?;

        if let Some(producer) = module.tabular_producer() {
            log::debug!("dispatching '{name}' via {} capability", CapabilityKind::Tabular);
            return producer.fetch_table(parameter).map(InvokeOutput::Table);
        }
        if let Some(producer) = module.text_producer() {
            log::debug!("dispatching '{name}' via {} capability", CapabilityKind::Text);
            return producer.fetch_text(parameter).map(InvokeOutput::Text);
        }
        Err(QueryError::NoCapability(name.to_string()))
    }

    /// Context actions for the named module under the given selection.
    ///
    /// A module without the tabular capability, or one that declines to
    /// supply actions, yields an empty list. The dispatcher never
    /// substitutes a default action of its own.
    pub fn context_actions_for(
        &self,
        name: &str,
        ctx: &SelectionContext,
    ) -> Result<Vec<ContextAction>, QueryError> {
        let module = self.find(name)?;
        Ok(module
            .tabular_producer()
            .map(|producer| producer.context_actions(ctx))
            .unwrap_or_default())
    }
}

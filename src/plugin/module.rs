use crate::plugin::_enums::capability::CapabilityKind;
use crate::plugin::_traits::module_plugin::{ModulePlugin, TabularProducer, TextProducer};
use crate::QueryError;
use std::sync::Arc;

/// A registered query unit: a stable name plus the capability handles it
/// carries.
///
/// Capabilities are resolved once at construction and carried as first-class
/// fields, so dispatch is a field read instead of a runtime type test. The
/// constructors guarantee at least one capability is present.
#[derive(Clone)]
pub struct Module {
    base: Arc<dyn ModulePlugin>,
    tabular: Option<Arc<dyn TabularProducer>>,
    text: Option<Arc<dyn TextProducer>>,
}

impl Module {
    /// Wrap a table-producing plugin.
    pub fn tabular<T>(plugin: T) -> Self
    where
        T: TabularProducer + 'static,
    {
        let shared = Arc::new(plugin);
        Self {
            base: shared.clone(),
            tabular: Some(shared),
            text: None,
        }
    }

    /// Wrap a text-producing plugin.
    pub fn text<T>(plugin: T) -> Self
    where
        T: TextProducer + 'static,
    {
        let shared = Arc::new(plugin);
        Self {
            base: shared.clone(),
            tabular: None,
            text: Some(shared),
        }
    }

    /// Wrap a plugin carrying both capabilities. The dispatcher prefers the
    /// tabular path for these, a table being strictly richer than text.
    pub fn both<T>(plugin: T) -> Self
    where
        T: TabularProducer + TextProducer + 'static,
    {
        let shared = Arc::new(plugin);
        Self {
            base: shared.clone(),
            tabular: Some(shared.clone()),
            text: Some(shared),
        }
    }

    pub fn name(&self) -> String {
        self.base.name()
    }

    /// Run the plugin's one-time setup. Called once by the registry.
    pub(crate) fn initialize(&self) -> Result<(), QueryError> {
        self.base.initialize()
    }

    pub fn tabular_producer(&self) -> Option<&Arc<dyn TabularProducer>> {
        self.tabular.as_ref()
    }

    pub fn text_producer(&self) -> Option<&Arc<dyn TextProducer>> {
        self.text.as_ref()
    }

    /// The capability set, in dispatch-preference order.
    pub fn capabilities(&self) -> Vec<CapabilityKind> {
        let mut kinds = Vec::new();
        if self.tabular.is_some() {
            kinds.push(CapabilityKind::Tabular);
        }
        if self.text.is_some() {
            kinds.push(CapabilityKind::Text);
        }
        kinds
    }
}

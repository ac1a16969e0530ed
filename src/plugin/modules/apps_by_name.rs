use crate::client::RemoteQueryClient;
use crate::plugin::_traits::module_plugin::{require_parameter, ModulePlugin, TabularProducer};
use crate::plugin::context::{ContextAction, SelectionContext};
use crate::plugin::table::ResultTable;
use crate::{IdentityRecord, QueryError};
use std::sync::Arc;

/// Looks up managed applications by name.
pub struct AppsByName {
    client: Arc<dyn RemoteQueryClient>,
}

impl AppsByName {
    pub fn new(client: Arc<dyn RemoteQueryClient>) -> Self {
        Self { client }
    }

    /// Expand the assignment-group payload carried in an application row's
    /// `SmartGroups` cell into its own table. The payload is a JSON array of
    /// flat records.
    pub fn expand_assignments(&self, payload: &str) -> Result<ResultTable, QueryError> {
        log::info!("expanding assignment groups from application data");
        let groups: Vec<IdentityRecord> = serde_json::from_str(payload)?;
        Ok(ResultTable::from_records(groups))
    }
}

impl ModulePlugin for AppsByName {
    fn name(&self) -> String {
        "Apps By Name".to_string()
    }

    fn initialize(&self) -> Result<(), QueryError> {
        log::info!("initializing Apps By Name module");
        Ok(())
    }
}

impl TabularProducer for AppsByName {
    fn fetch_table(&self, parameter: &str) -> Result<ResultTable, QueryError> {
        let app = require_parameter(parameter)?;
        log::info!("fetching application data for {app}");
        let records = self.client.fetch_by_name(app)?;
        Ok(ResultTable::from_records(records))
    }

    fn context_actions(&self, ctx: &SelectionContext) -> Vec<ContextAction> {
        log::debug!("generating context actions for Apps By Name");
        vec![
            ContextAction::new("Refresh Data", "refresh"),
            // Assignment expansion works on one application row at a time.
            ContextAction::new("Get Assignment Groups", "assignment-groups")
                .enabled_when(ctx.single_selection()),
            ContextAction::new("Export to CSV", "export-csv"),
        ]
    }
}

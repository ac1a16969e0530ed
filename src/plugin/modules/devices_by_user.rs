use crate::client::RemoteQueryClient;
use crate::plugin::_traits::module_plugin::{require_parameter, ModulePlugin, TabularProducer};
use crate::plugin::context::{ContextAction, SelectionContext};
use crate::plugin::table::ResultTable;
use crate::QueryError;
use std::sync::Arc;

/// Lists every device enrolled under one user.
pub struct DevicesByUser {
    client: Arc<dyn RemoteQueryClient>,
}

impl DevicesByUser {
    pub fn new(client: Arc<dyn RemoteQueryClient>) -> Self {
        Self { client }
    }
}

impl ModulePlugin for DevicesByUser {
    fn name(&self) -> String {
        "Devices By User".to_string()
    }

    fn initialize(&self) -> Result<(), QueryError> {
        log::info!("initializing Devices By User module");
        Ok(())
    }
}

impl TabularProducer for DevicesByUser {
    fn fetch_table(&self, parameter: &str) -> Result<ResultTable, QueryError> {
        let user = require_parameter(parameter)?;
        log::info!("fetching devices for user {user}");
        let records = self.client.fetch_detail_by_identity(user)?;
        Ok(ResultTable::from_records(records))
    }

    fn context_actions(&self, _ctx: &SelectionContext) -> Vec<ContextAction> {
        log::debug!("generating context actions for Devices By User");
        vec![
            ContextAction::new("Refresh Data", "refresh"),
            ContextAction::new("Export to CSV", "export-csv"),
        ]
    }
}

use crate::client::RemoteQueryClient;
use crate::plugin::_traits::module_plugin::{ModulePlugin, TabularProducer};
use crate::plugin::context::{ContextAction, SelectionContext};
use crate::plugin::table::ResultTable;
use crate::QueryError;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;

/// User pattern for Android POS devices, matched against `UserName`.
pub const POS_USER_PATTERN: &str = r"^(OBS|BFG|CIG|FLM)\d{4}POS$";

/// Field the filter pattern is applied to.
const NAME_FIELD: &str = "UserName";

/// Composite aggregation over every POS device user.
///
/// One invocation enumerates all identities, keeps those whose name matches
/// the filter pattern, and fetches the device detail for each surviving name
/// exactly once, merging everything into a single table whose columns
/// accumulate across identities.
pub struct PosInventory {
    client: Arc<dyn RemoteQueryClient>,
    pattern: Regex,
}

impl PosInventory {
    /// Build the engine with the stock POS user pattern.
    pub fn new(client: Arc<dyn RemoteQueryClient>) -> Result<Self, QueryError> {
        Self::with_pattern(client, POS_USER_PATTERN)
    }

    /// Build the engine with a custom filter pattern. Matching is
    /// case-sensitive and applied to the `UserName` field only.
    pub fn with_pattern(
        client: Arc<dyn RemoteQueryClient>,
        pattern: &str,
    ) -> Result<Self, QueryError> {
        Ok(Self {
            client,
            pattern: Regex::new(pattern)?,
        })
    }
}

impl ModulePlugin for PosInventory {
    fn name(&self) -> String {
        "POS Device Inventory".to_string()
    }

    fn initialize(&self) -> Result<(), QueryError> {
        log::info!("initializing POS Device Inventory module");
        Ok(())
    }
}

impl TabularProducer for PosInventory {
    /// The parameter is accepted for contract uniformity but the
    /// aggregation takes no input of its own.
    fn fetch_table(&self, _parameter: &str) -> Result<ResultTable, QueryError> {
        log::info!("aggregating POS device inventory");

        let identities = self.client.enumerate_identities()?;

        let mut combined = ResultTable::new();
        let mut processed: HashSet<String> = HashSet::new();

        for identity in &identities {
            let Some(name) = identity.get(NAME_FIELD).and_then(|v| v.as_str()) else {
                log::warn!("identity record without a {NAME_FIELD} field, skipping");
                continue;
            };

            // Decide first, then record. The detail fetch happens only for
            // a matching name that was unseen at check time, but every raw
            // record marks its name processed afterwards, match or not —
            // collapsing these two steps changes duplicate handling.
            let matched = self.pattern.is_match(name);
            let first_encounter = !processed.contains(name);

            if matched && first_encounter {
                log::debug!("fetching device detail for {name}");
                // All-or-nothing: a single failed detail fetch aborts the
                // invocation, discarding the rows accumulated so far.
                let details = self.client.fetch_detail_by_identity(name)?;
                for detail in &details {
                    combined.push_record(detail);
                }
            }

            processed.insert(name.to_string());
        }

        log::info!(
            "aggregated {} device rows across {} identities",
            combined.row_count(),
            processed.len()
        );
        Ok(combined)
    }

    fn context_actions(&self, _ctx: &SelectionContext) -> Vec<ContextAction> {
        log::debug!("generating context actions for POS Device Inventory");
        vec![
            ContextAction::new("Refresh Data", "refresh"),
            ContextAction::new("Export to CSV", "export-csv"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{MockRemoteQueryClient, RemoteQueryError};
    use crate::IdentityRecord;
    use mockall::Sequence;
    use serde_json::json;

    fn user(name: &str) -> IdentityRecord {
        let mut map = IdentityRecord::new();
        map.insert("UserName".to_string(), json!(name));
        map
    }

    fn device(pairs: &[(&str, &str)]) -> IdentityRecord {
        let mut map = IdentityRecord::new();
        for (k, v) in pairs {
            map.insert((*k).to_string(), json!(v));
        }
        map
    }

    #[test]
    fn duplicate_identities_trigger_exactly_one_fetch() {
        let mut client = MockRemoteQueryClient::new();
        client.expect_enumerate_identities().returning(|| {
            Ok(vec![user("OBS0001POS"), user("OBS0001POS"), user("ACME1")])
        });
        client
            .expect_fetch_detail_by_identity()
            .withf(|name| name == "OBS0001POS")
            .times(1)
            .returning(|_| Ok(vec![device(&[("SerialNumber", "R58M1")])]));

        let engine = PosInventory::new(Arc::new(client)).unwrap();
        let table = engine.fetch_table("").unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn non_matching_identities_are_never_fetched() {
        let mut client = MockRemoteQueryClient::new();
        client
            .expect_enumerate_identities()
            .returning(|| Ok(vec![user("ACME1"), user("obs0001pos"), user("OBS001POS")]));
        client.expect_fetch_detail_by_identity().never();

        let engine = PosInventory::new(Arc::new(client)).unwrap();
        let table = engine.fetch_table("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 0);
    }

    #[test]
    fn rows_follow_first_matched_order_and_columns_accumulate() {
        let mut client = MockRemoteQueryClient::new();
        client.expect_enumerate_identities().returning(|| {
            Ok(vec![
                user("BFG0002POS"),
                user("ACME1"),
                user("FLM0003POS"),
            ])
        });

        let mut seq = Sequence::new();
        client
            .expect_fetch_detail_by_identity()
            .withf(|name| name == "BFG0002POS")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(vec![
                    device(&[("SerialNumber", "A1")]),
                    device(&[("SerialNumber", "A2")]),
                ])
            });
        client
            .expect_fetch_detail_by_identity()
            .withf(|name| name == "FLM0003POS")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![device(&[("SerialNumber", "B1"), ("Model", "T650")])]));

        let engine = PosInventory::new(Arc::new(client)).unwrap();
        let table = engine.fetch_table("").unwrap();

        assert_eq!(table.columns(), ["SerialNumber", "Model"]);
        assert_eq!(
            table.rows(),
            [["A1", ""], ["A2", ""], ["B1", "T650"]]
        );
    }

    #[test]
    fn a_failed_detail_fetch_aborts_the_whole_invocation() {
        let mut client = MockRemoteQueryClient::new();
        client.expect_enumerate_identities().returning(|| {
            Ok(vec![
                user("OBS0001POS"),
                user("BFG0002POS"),
                user("CIG0003POS"),
            ])
        });
        client
            .expect_fetch_detail_by_identity()
            .withf(|name| name == "OBS0001POS")
            .times(1)
            .returning(|_| Ok(vec![device(&[("SerialNumber", "A1")])]));
        client
            .expect_fetch_detail_by_identity()
            .withf(|name| name == "BFG0002POS")
            .times(1)
            .returning(|_| Err(RemoteQueryError::new("backend went away")));
        // The third identity is never reached.
        client
            .expect_fetch_detail_by_identity()
            .withf(|name| name == "CIG0003POS")
            .never();

        let engine = PosInventory::new(Arc::new(client)).unwrap();
        assert!(matches!(
            engine.fetch_table(""),
            Err(QueryError::Remote(_))
        ));
    }

    #[test]
    fn enumeration_failure_propagates() {
        let mut client = MockRemoteQueryClient::new();
        client
            .expect_enumerate_identities()
            .returning(|| Err(RemoteQueryError::new("unauthorized")));

        let engine = PosInventory::new(Arc::new(client)).unwrap();
        assert!(matches!(
            engine.fetch_table(""),
            Err(QueryError::Remote(_))
        ));
    }

    #[test]
    fn records_without_the_name_field_are_skipped() {
        let mut client = MockRemoteQueryClient::new();
        client.expect_enumerate_identities().returning(|| {
            let mut nameless = IdentityRecord::new();
            nameless.insert("Email".to_string(), json!("ops@example.com"));
            Ok(vec![nameless, user("CIG0004POS")])
        });
        client
            .expect_fetch_detail_by_identity()
            .withf(|name| name == "CIG0004POS")
            .times(1)
            .returning(|_| Ok(vec![device(&[("SerialNumber", "C1")])]));

        let engine = PosInventory::new(Arc::new(client)).unwrap();
        let table = engine.fetch_table("").unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn invalid_custom_pattern_is_rejected_at_construction() {
        let client: Arc<dyn RemoteQueryClient> = Arc::new(MockRemoteQueryClient::new());
        assert!(matches!(
            PosInventory::with_pattern(client, "("),
            Err(QueryError::Pattern(_))
        ));
    }
}

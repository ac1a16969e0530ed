use strum_macros::{Display, EnumString, VariantNames};

/// The capabilities a module may carry, mainly for dispatch logging.
#[derive(Clone, Copy, Display, EnumString, VariantNames, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "kebab_case")]
pub enum CapabilityKind {
    Tabular,
    Text,
}

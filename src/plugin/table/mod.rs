pub(crate) mod result_table;
pub use result_table::ResultTable;

pub mod export;

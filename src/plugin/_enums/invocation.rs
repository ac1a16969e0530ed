use crate::plugin::table::ResultTable;

/// What a dispatched invocation produced: a table from a TabularProducer or
/// plain text from a TextProducer.
#[derive(Clone, Debug, PartialEq)]
pub enum InvokeOutput {
    Table(ResultTable),
    Text(String),
}

impl InvokeOutput {
    pub fn as_table(&self) -> Option<&ResultTable> {
        match self {
            InvokeOutput::Table(table) => Some(table),
            InvokeOutput::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InvokeOutput::Table(_) => None,
            InvokeOutput::Text(text) => Some(text),
        }
    }
}

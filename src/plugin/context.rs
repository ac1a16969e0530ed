/// The live selection the caller passes in when requesting actions.
///
/// Modules never hold a reference to the grid; they see only the selected
/// row indices and decide which actions apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionContext {
    selected_rows: Vec<usize>,
}

impl SelectionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selected_rows: Vec<usize>) -> Self {
        Self { selected_rows }
    }

    pub fn selected_rows(&self) -> &[usize] {
        &self.selected_rows
    }

    /// True when exactly one row is selected.
    pub fn single_selection(&self) -> bool {
        self.selected_rows.len() == 1
    }
}

/// One entry of a module's context menu: a label, an opaque handler id the
/// caller resolves, and whether the action applies to the given selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextAction {
    pub label: String,
    pub handler: String,
    pub enabled: bool,
}

impl ContextAction {
    pub fn new(label: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            handler: handler.into(),
            enabled: true,
        }
    }

    /// Disable the action unless `condition` holds for the selection.
    pub fn enabled_when(mut self, condition: bool) -> Self {
        self.enabled = condition;
        self
    }
}

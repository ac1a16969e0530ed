pub(crate) mod module_plugin;

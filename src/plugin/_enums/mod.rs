pub(crate) mod capability;
pub(crate) mod invocation;

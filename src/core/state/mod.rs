pub mod registry;
pub mod runtime;

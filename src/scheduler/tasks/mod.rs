pub mod registry_refresh;

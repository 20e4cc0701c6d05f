pub mod migrations;
pub mod store;

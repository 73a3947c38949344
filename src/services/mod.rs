pub mod import;
pub mod maintenance;
pub mod report;
pub mod server;

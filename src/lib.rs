//! employeedb - An in-memory employee record service over HTTP
//!
//! A single store of employee records, guarded by one reader/writer lock,
//! exposed through JSON CRUD endpoints. Nothing is persisted: the store is
//! created empty at startup and dropped at shutdown.

pub mod cli;
pub mod employee;
pub mod http_server;
pub mod observability;

pub use employee::{Employee, EmployeeStore, InMemoryEmployeeStore, StoreError, StoreResult};
pub use http_server::{ApiError, HttpServer, HttpServerConfig};

/// Current version of employeedb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

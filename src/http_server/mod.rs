//! # Employee HTTP Server Module
//!
//! Thin axum adapters over the employee store.
//!
//! # Endpoints
//!
//! - `/employees` - GET (list, or lookup with `?id=`), POST, PUT, DELETE
//! - `/employees/all` - GET, paginated with `page` and `perPage`
//! - `/health` - Health check
//! - `/metrics` - Request counters

pub mod config;
pub mod employee_routes;
pub mod errors;
pub mod observability_routes;
pub mod pagination;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use pagination::PageParams;
pub use server::HttpServer;

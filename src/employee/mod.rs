//! # Employee Module
//!
//! The employee record and the synchronized in-memory store that owns it.
//!
//! The store is the only shared state in the service. Every operation takes
//! the store's reader/writer lock for exactly its own duration; there is no
//! transaction spanning multiple operations.

pub mod errors;
pub mod model;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use model::Employee;
pub use store::{EmployeeStore, InMemoryEmployeeStore};

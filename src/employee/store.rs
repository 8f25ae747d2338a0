//! # Employee Store
//!
//! The store interface and its in-memory implementation.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::model::Employee;

/// Store interface for employee records
pub trait EmployeeStore: Send + Sync {
    /// Insert a new employee; fails if the identifier is taken
    fn create(&self, employee: Employee) -> StoreResult<()>;

    /// Look up an employee by identifier
    fn get_by_id(&self, id: i64) -> StoreResult<Option<Employee>>;

    /// Replace the stored record with the same identifier.
    ///
    /// Returns `false` if no such record exists.
    fn update(&self, employee: Employee) -> StoreResult<bool>;

    /// Remove a record. Returns `false` if it was absent.
    fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Every stored employee, in ascending identifier order
    fn list_all(&self) -> StoreResult<Vec<Employee>>;

    /// Skip `offset` employees, then return up to `limit` of them
    fn list_paginated(&self, offset: usize, limit: usize) -> StoreResult<Vec<Employee>>;

    /// Number of stored employees
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// In-memory employee store.
///
/// Records live in a `BTreeMap` so listing and pagination follow
/// identifier order and are stable across calls.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: RwLock<BTreeMap<i64, Employee>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, BTreeMap<i64, Employee>>> {
        self.records.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, BTreeMap<i64, Employee>>> {
        self.records.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Panic while holding the write lock, leaving the lock poisoned
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = self.records.write();
            panic!("writer panicked while holding the employee store lock");
        }));
        assert!(result.is_err());
        assert!(self.records.is_poisoned());
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn create(&self, employee: Employee) -> StoreResult<()> {
        let mut records = self.write()?;

        match records.entry(employee.id) {
            Entry::Occupied(_) => Err(StoreError::DuplicateKey(employee.id)),
            Entry::Vacant(slot) => {
                debug!(id = employee.id, "employee created");
                slot.insert(employee);
                Ok(())
            }
        }
    }

    fn get_by_id(&self, id: i64) -> StoreResult<Option<Employee>> {
        let records = self.read()?;
        Ok(records.get(&id).cloned())
    }

    fn update(&self, employee: Employee) -> StoreResult<bool> {
        let mut records = self.write()?;

        match records.get_mut(&employee.id) {
            Some(current) => {
                debug!(id = employee.id, "employee updated");
                *current = employee;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut records = self.write()?;

        let removed = records.remove(&id).is_some();
        if removed {
            debug!(id, "employee deleted");
        }
        Ok(removed)
    }

    fn list_all(&self) -> StoreResult<Vec<Employee>> {
        let records = self.read()?;
        Ok(records.values().cloned().collect())
    }

    fn list_paginated(&self, offset: usize, limit: usize) -> StoreResult<Vec<Employee>> {
        let records = self.read()?;
        Ok(records.values().skip(offset).take(limit).cloned().collect())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}

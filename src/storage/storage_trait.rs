//! Storage Trait
//!
//! This module defines the `EmployeeStorage` trait, the interface the employee
//! handlers use to reach their record store.
//!
//! Every method returns a `Result`; a missing record is reported as
//! `StorageError::NotFound` so callers can tell it apart from a failing backend.

use std::future::Future;

use crate::error_handling::types::StorageError;
use crate::storage::types::{Employee, EmployeeFields, EmployeeId};

/// Record store for employees.
///
/// The returned futures are `Send` so handlers can be driven by warp's
/// multi-threaded server.
pub trait EmployeeStorage: Send + Sync + 'static {
    /// Returns every employee, ordered by id.
    fn list_employees(&self) -> impl Future<Output = Result<Vec<Employee>, StorageError>> + Send;

    /// Fetches one employee.
    fn get_employee(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Employee, StorageError>> + Send;

    /// Persists a new employee and returns it with its assigned id.
    fn create_employee(
        &self,
        fields: EmployeeFields,
    ) -> impl Future<Output = Result<Employee, StorageError>> + Send;

    /// Overwrites all fields of an existing employee.
    fn update_employee(
        &self,
        id: EmployeeId,
        fields: EmployeeFields,
    ) -> impl Future<Output = Result<Employee, StorageError>> + Send;

    /// Removes an employee.
    fn delete_employee(&self, id: EmployeeId)
        -> impl Future<Output = Result<(), StorageError>> + Send;
}

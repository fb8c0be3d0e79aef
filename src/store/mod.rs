//! The employee record store.
//!
//! [`RecordStore`] is the sole owner of the employee collection and the
//! only component that touches the backing file. Every mutating operation
//! runs on a working copy of the collection, writes that copy to disk and
//! only then replaces the in-memory state, so a failed write leaves the
//! store exactly as it was.
//!
//! # Example
//!
//! ```no_run
//! use employee_records::store::{RecordStore, SearchFilter};
//!
//! let mut store = RecordStore::open("employees.json");
//! println!("Next id: {}", store.next_id());
//! for employee in store.search(&SearchFilter::new().department("IT")) {
//!     println!("{employee}");
//! }
//! store.add_vacation_days(1, 2)?;
//! # Ok::<(), employee_records::error::StoreError>(())
//! ```

mod attendance;
mod export;
mod payroll;
mod persistence;
mod search;
mod statistics;
mod validation;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::models::Employee;

pub use attendance::AttendanceUpsert;
pub use export::CSV_HEADER;
pub use payroll::{RaisePreview, raised_salary};
pub use persistence::LoadOutcome;
pub use search::SearchFilter;
pub use validation::{
    MAX_AGE, MAX_RAISE_PERCENTAGE, MIN_AGE, MIN_RAISE_PERCENTAGE, validate_attendance_times,
    validate_employee, validate_raise_percentage, validate_vacation_delta,
};

/// In-memory employee collection persisted to a JSON file.
#[derive(Debug)]
pub struct RecordStore {
    employees: Vec<Employee>,
    path: PathBuf,
    load_outcome: LoadOutcome,
}

impl RecordStore {
    /// Opens the store backed by `path`.
    ///
    /// A missing file yields an empty store. A file that exists but cannot
    /// be parsed also yields an empty store; the failure is logged and
    /// reported by [`load_outcome`](Self::load_outcome). Use
    /// [`open_strict`](Self::open_strict) to fail instead.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (employees, load_outcome) = match persistence::load(&path) {
            Ok(None) => (Vec::new(), LoadOutcome::Missing),
            Ok(Some(employees)) => {
                let count = employees.len();
                (employees, LoadOutcome::Loaded { employees: count })
            }
            Err(err) => {
                let reason = match err {
                    StoreError::DataFileParse { message, .. } => message,
                    other => other.to_string(),
                };
                warn!(
                    path = %path.display(),
                    reason = %reason,
                    "Data file is unreadable; starting with an empty collection"
                );
                (Vec::new(), LoadOutcome::Unreadable { reason })
            }
        };

        Self {
            employees,
            path,
            load_outcome,
        }
    }

    /// Opens the store backed by `path`, failing with
    /// [`StoreError::DataFileParse`] if the file exists but is unusable.
    pub fn open_strict(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let (employees, load_outcome) = match persistence::load(&path)? {
            None => (Vec::new(), LoadOutcome::Missing),
            Some(employees) => {
                let count = employees.len();
                (employees, LoadOutcome::Loaded { employees: count })
            }
        };

        Ok(Self {
            employees,
            path,
            load_outcome,
        })
    }

    /// Opens the store described by `config`.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        if config.strict_load {
            Self::open_strict(&config.data_file)
        } else {
            Ok(Self::open(&config.data_file))
        }
    }

    /// Returns how the backing file was read at startup.
    pub fn load_outcome(&self) -> &LoadOutcome {
        &self.load_outcome
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every employee in insertion order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the employee with `id`, if any.
    pub fn find_by_id(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Returns true if an employee with `id` exists.
    pub fn id_exists(&self, id: u32) -> bool {
        self.employees.iter().any(|e| e.id == id)
    }

    /// Returns the employees matching `filter`, in insertion order.
    pub fn search(&self, filter: &SearchFilter) -> Vec<&Employee> {
        self.employees.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Suggests an id for a new employee: one past the highest id in use,
    /// or 1 for an empty store.
    pub fn next_id(&self) -> u32 {
        self.employees
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Adds a new employee.
    ///
    /// Fails with `DuplicateId` if the id is taken and with `Validation` if
    /// a field is out of bounds.
    pub fn add(&mut self, employee: Employee) -> StoreResult<()> {
        if self.id_exists(employee.id) {
            return Err(StoreError::DuplicateId { id: employee.id });
        }
        validate_employee(&employee)?;

        let id = employee.id;
        self.commit(|employees| {
            employees.push(employee);
            Ok(())
        })?;
        info!(employee_id = id, "Added employee");
        Ok(())
    }

    /// Overwrites the editable fields of an existing employee.
    ///
    /// The attendance history of the stored record is kept; the
    /// `attendance` field of `updated` is ignored.
    pub fn update(&mut self, updated: Employee) -> StoreResult<()> {
        if !self.id_exists(updated.id) {
            return Err(StoreError::NotFound { id: updated.id });
        }
        validate_employee(&updated)?;

        let id = updated.id;
        self.commit(|employees| {
            let existing = employee_mut(employees, id)?;
            existing.name = updated.name;
            existing.age = updated.age;
            existing.department = updated.department;
            existing.position = updated.position;
            existing.email = updated.email;
            existing.phone = updated.phone;
            existing.salary = updated.salary;
            existing.join_date = updated.join_date;
            existing.vacation_days = updated.vacation_days;
            existing.status = updated.status;
            Ok(())
        })?;
        info!(employee_id = id, "Updated employee");
        Ok(())
    }

    /// Removes an employee and returns the removed record.
    pub fn delete(&mut self, id: u32) -> StoreResult<Employee> {
        let removed = self.commit(|employees| {
            let index = employees
                .iter()
                .position(|e| e.id == id)
                .ok_or(StoreError::NotFound { id })?;
            Ok(employees.remove(index))
        })?;
        info!(employee_id = id, "Deleted employee");
        Ok(removed)
    }

    /// Applies `mutate` to a copy of the collection, persists the copy and
    /// then makes it current.
    fn commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut Vec<Employee>) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut working = self.employees.clone();
        let outcome = mutate(&mut working)?;
        persistence::save(&self.path, &working)?;
        self.employees = working;
        Ok(outcome)
    }
}

/// Finds an employee by id within a working copy.
fn employee_mut(employees: &mut [Employee], id: u32) -> StoreResult<&mut Employee> {
    employees
        .iter_mut()
        .find(|e| e.id == id)
        .ok_or(StoreError::NotFound { id })
}

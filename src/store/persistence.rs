//! JSON persistence for the employee collection.
//!
//! The whole collection is read once when a store opens and rewritten in
//! full after every successful mutation. Keys are matched
//! case-insensitively on read so files written with a different key casing
//! still load; writes always use the canonical PascalCase names.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::Employee;

/// Every key the persisted models use, in canonical casing.
const FIELD_NAMES: &[&str] = &[
    "Id",
    "Name",
    "Age",
    "Department",
    "Position",
    "Email",
    "Phone",
    "Salary",
    "JoinDate",
    "VacationDays",
    "Status",
    "Attendance",
    "Date",
    "CheckIn",
    "CheckOut",
    "Notes",
];

/// What happened when a store read its backing file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No file existed; the store started empty.
    Missing,
    /// The file was parsed successfully.
    Loaded {
        /// Number of employees read.
        employees: usize,
    },
    /// The file existed but could not be read or parsed; the store started
    /// empty and the next mutation will overwrite the file.
    Unreadable {
        /// Why the file was rejected.
        reason: String,
    },
}

impl LoadOutcome {
    /// Returns true when the file existed but was discarded.
    pub fn is_unreadable(&self) -> bool {
        matches!(self, Self::Unreadable { .. })
    }
}

/// Reads the employee collection from `path`.
///
/// Returns `Ok(None)` when the file does not exist and `DataFileParse` when
/// it exists but cannot be used.
pub(crate) fn load(path: &Path) -> StoreResult<Option<Vec<Employee>>> {
    if !path.exists() {
        return Ok(None);
    }

    let parse_error = |message: String| StoreError::DataFileParse {
        path: path.to_path_buf(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| parse_error(e.to_string()))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
    if value.is_null() {
        return Ok(Some(Vec::new()));
    }

    let employees: Vec<Employee> =
        serde_json::from_value(canonicalize_keys(value)).map_err(|e| parse_error(e.to_string()))?;
    check_invariants(&employees).map_err(parse_error)?;

    debug!(
        path = %path.display(),
        employees = employees.len(),
        "Loaded employee records"
    );
    Ok(Some(employees))
}

/// Overwrites `path` with the full employee collection.
pub(crate) fn save(path: &Path, employees: &[Employee]) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(employees)?;
    fs::write(path, &json).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        employees = employees.len(),
        bytes = json.len(),
        "Saved employee records"
    );
    Ok(())
}

fn canonicalize_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize_keys).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (canonical_key(key), canonicalize_keys(value)))
                .collect(),
        ),
        other => other,
    }
}

fn canonical_key(key: String) -> String {
    FIELD_NAMES
        .iter()
        .find(|name| name.eq_ignore_ascii_case(&key))
        .map_or(key, |name| (*name).to_string())
}

fn check_invariants(employees: &[Employee]) -> Result<(), String> {
    let mut ids = HashSet::new();
    for employee in employees {
        if !ids.insert(employee.id) {
            return Err(format!("duplicate employee id {}", employee.id));
        }
        let mut dates = HashSet::new();
        for record in &employee.attendance {
            if !dates.insert(record.date) {
                return Err(format!(
                    "employee {} has more than one attendance record for {}",
                    employee.id, record.date
                ));
            }
        }
    }
    Ok(())
}

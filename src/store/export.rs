//! CSV export of the employee list.
//!
//! String fields are wrapped in double quotes without escaping, so values
//! containing quotes produce malformed rows.

use std::fs;
use std::path::Path;

use tracing::info;

use super::RecordStore;
use crate::error::{StoreError, StoreResult};
use crate::models::Employee;

/// Header row of the CSV export.
pub const CSV_HEADER: &str =
    "ID,Name,Age,Department,Position,Email,Phone,Salary,JoinDate,VacationDays,Status";

impl RecordStore {
    /// Renders every employee as CSV, header first, one line per employee.
    pub fn export_csv(&self) -> String {
        std::iter::once(CSV_HEADER.to_string())
            .chain(self.employees.iter().map(csv_line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes [`export_csv`](Self::export_csv) output to `path`.
    pub fn export_csv_to(&self, path: impl AsRef<Path>) -> StoreResult<()> {
        let path = path.as_ref();
        fs::write(path, self.export_csv()).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), employees = self.employees.len(), "Exported CSV");
        Ok(())
    }
}

fn csv_line(e: &Employee) -> String {
    format!(
        "{},\"{}\",{},\"{}\",\"{}\",\"{}\",\"{}\",{},{},{},{}",
        e.id,
        e.name,
        e.age,
        e.department,
        e.position,
        e.email,
        e.phone,
        e.salary,
        e.join_date.format("%Y-%m-%d"),
        e.vacation_days,
        e.status
    )
}

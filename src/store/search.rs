//! Employee search filters.

use crate::models::{Employee, EmployeeStatus};

/// Filter for [`RecordStore::search`](super::RecordStore::search).
///
/// Every provided criterion must match. Blank criteria are ignored, so an
/// empty filter matches everyone.
///
/// # Example
///
/// ```
/// use employee_records::store::SearchFilter;
///
/// let filter = SearchFilter::new().name("ali").department("IT");
/// assert!(!filter.is_empty());
/// assert!(SearchFilter::new().name("   ").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    name: Option<String>,
    department: Option<String>,
    position: Option<String>,
    status: Option<EmployeeStatus>,
}

impl SearchFilter {
    /// Creates a filter that matches every employee.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the name to contain `name`, ignoring case.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = criterion(name.into());
        self
    }

    /// Requires the department to equal `department`, ignoring case.
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = criterion(department.into());
        self
    }

    /// Requires the position to contain `position`, ignoring case.
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = criterion(position.into());
        self
    }

    /// Requires the employment status to be `status`.
    pub fn status(mut self, status: EmployeeStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds a filter from optional text criteria.
    pub fn from_parts(
        name: Option<&str>,
        department: Option<&str>,
        position: Option<&str>,
    ) -> Self {
        Self {
            name: name.and_then(|s| criterion(s.to_string())),
            department: department.and_then(|s| criterion(s.to_string())),
            position: position.and_then(|s| criterion(s.to_string())),
            status: None,
        }
    }

    /// Returns true when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.department.is_none()
            && self.position.is_none()
            && self.status.is_none()
    }

    /// Returns true if `employee` satisfies every criterion.
    pub fn matches(&self, employee: &Employee) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|needle| contains_ignore_case(&employee.name, needle));
        let department_ok = self
            .department
            .as_deref()
            .is_none_or(|wanted| employee.department.to_lowercase() == wanted.to_lowercase());
        let position_ok = self
            .position
            .as_deref()
            .is_none_or(|needle| contains_ignore_case(&employee.position, needle));

        let status_ok = self.status.is_none_or(|wanted| employee.status == wanted);

        name_ok && department_ok && position_ok && status_ok
    }
}

fn criterion(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub mod analytics;
pub mod export;
pub mod filter;
pub mod paginate;
pub mod sort;

use std::collections::BTreeSet;
use serde::Serialize;
use crate::models::employee::{Employee, EmployeeDraft};
use crate::models::filter::{FilterCriteria, ItemsPerPage, SortOption};
use crate::errors::AppError;
use self::paginate::Page;

/// Search, filter, sort and page selection for one read of the directory.
#[derive(Debug, Clone, Default)]
pub struct View {
    pub search: String,
    pub criteria: FilterCriteria,
    pub sort: Option<SortOption>,
    pub page: usize,
    pub items_per_page: ItemsPerPage,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPage {
    #[serde(flatten)]
    pub page: Page<Employee>,
    pub selected: Vec<i64>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct FilterOptions {
    pub departments: Vec<String>,
    pub roles: Vec<String>,
}

/// Owns the employee collection and the selection set.
#[derive(Debug, Default)]
pub struct Directory {
    employees: Vec<Employee>,
    selected: BTreeSet<i64>,
}

impl Directory {
    pub fn new(employees: Vec<Employee>) -> Self {
        Directory {
            employees,
            selected: BTreeSet::new(),
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn selected(&self) -> Vec<i64> {
        self.selected.iter().copied().collect()
    }

    /// Filtered and sorted, before pagination.
    pub fn matching(&self, view: &View) -> Vec<Employee> {
        let filtered = filter::filter_employees(&self.employees, &view.search, &view.criteria);
        sort::sort_employees(filtered, view.sort)
    }

    pub fn page(&self, view: &View) -> DirectoryPage {
        let matching = self.matching(view);
        DirectoryPage {
            page: paginate::paginate(&matching, view.page, view.items_per_page.get()),
            selected: self.selected(),
        }
    }

    fn next_id(&self) -> i64 {
        self.employees.iter().map(|emp| emp.id).max().unwrap_or(0) + 1
    }

    pub fn add(&mut self, draft: EmployeeDraft) -> Employee {
        let employee = draft.into_employee(self.next_id());
        log::info!("Adding employee {} ({})", employee.id, employee.full_name());
        self.employees.push(employee.clone());
        employee
    }

    pub fn edit(&mut self, id: i64, draft: EmployeeDraft) -> Result<Employee, AppError> {
        let slot = self
            .employees
            .iter_mut()
            .find(|emp| emp.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;
        *slot = draft.into_employee(id);
        log::info!("Updated employee {}", id);
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: i64) -> Result<Employee, AppError> {
        let index = self
            .employees
            .iter()
            .position(|emp| emp.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;
        let removed = self.employees.remove(index);
        self.selected.remove(&id);
        log::info!("Deleted employee {}", id);
        Ok(removed)
    }

    /// Removes every selected employee and clears the selection. Returns the removed ids.
    pub fn bulk_delete(&mut self) -> Vec<i64> {
        let selected = std::mem::take(&mut self.selected);
        let mut removed = Vec::new();
        self.employees.retain(|emp| {
            let keep = !selected.contains(&emp.id);
            if !keep {
                removed.push(emp.id);
            }
            keep
        });
        log::info!("Bulk deleted {} employees", removed.len());
        removed
    }

    pub fn toggle_selection(&mut self, id: i64) -> Result<bool, AppError> {
        if !self.employees.iter().any(|emp| emp.id == id) {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }
        if self.selected.remove(&id) {
            Ok(false)
        } else {
            self.selected.insert(id);
            Ok(true)
        }
    }

    /// Clears the selection when it is as large as the page, otherwise selects exactly the page.
    pub fn toggle_select_page(&mut self, view: &View) -> Vec<i64> {
        let page = self.page(view).page;
        if self.selected.len() == page.items.len() {
            self.selected.clear();
        } else {
            self.selected = page.items.iter().map(|emp| emp.id).collect();
        }
        self.selected()
    }

    /// Distinct departments and roles in order of first appearance.
    pub fn filter_options(&self) -> FilterOptions {
        let mut departments: Vec<String> = Vec::new();
        let mut roles: Vec<String> = Vec::new();
        for emp in &self.employees {
            if !departments.contains(&emp.department) {
                departments.push(emp.department.clone());
            }
            if !roles.contains(&emp.role) {
                roles.push(emp.role.clone());
            }
        }
        FilterOptions { departments, roles }
    }
}

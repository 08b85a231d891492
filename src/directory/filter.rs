use crate::models::employee::Employee;
use crate::models::filter::FilterCriteria;

/// `None` and empty strings both mean "no constraint".
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

pub fn matches_search(employee: &Employee, search_term: &str) -> bool {
    if search_term.is_empty() {
        return true;
    }
    let term = search_term.to_lowercase();
    contains_ci(&employee.first_name, &term)
        || contains_ci(&employee.last_name, &term)
        || contains_ci(&employee.email, &term)
}

pub fn matches_criteria(employee: &Employee, criteria: &FilterCriteria) -> bool {
    let department = active(&criteria.department).map_or(true, |d| employee.department == d);
    let role = active(&criteria.role).map_or(true, |r| employee.role == r);
    let first_name = active(&criteria.first_name)
        .map_or(true, |name| contains_ci(&employee.first_name, &name.to_lowercase()));
    // dateOfJoining is accepted but never narrows the set.
    department && role && first_name
}

pub fn filter_employees(
    employees: &[Employee],
    search_term: &str,
    criteria: &FilterCriteria,
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|emp| matches_search(emp, search_term) && matches_criteria(emp, criteria))
        .cloned()
        .collect()
}

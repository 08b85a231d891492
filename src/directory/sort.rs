use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;
use crate::models::employee::Employee;
use crate::models::filter::SortOption;

/// Base letters only: decomposed, accents dropped, lowercased.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased letters with their accents kept as separate marks.
fn accented_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Collation in three levels: base letters, then accents (unaccented first),
/// then case (lowercase first).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented_letters(a).cmp(accented_letters(b)))
        .then_with(|| b.nfd().cmp(a.nfd()))
}

fn compare(option: SortOption, a: &Employee, b: &Employee) -> Ordering {
    match option {
        SortOption::FirstName => locale_cmp(&a.first_name, &b.first_name),
        SortOption::LastName => locale_cmp(&a.last_name, &b.last_name),
        SortOption::Department => locale_cmp(&a.department, &b.department),
        SortOption::Role => locale_cmp(&a.role, &b.role),
        SortOption::DateOfJoining => a.date_of_joining.cmp(&b.date_of_joining),
    }
}

/// Stable sort; `None` keeps the input order.
pub fn sort_employees(mut employees: Vec<Employee>, option: Option<SortOption>) -> Vec<Employee> {
    if let Some(option) = option {
        employees.sort_by(|a, b| compare(option, a, b));
    }
    employees
}

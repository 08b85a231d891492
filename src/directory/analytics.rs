use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use crate::models::department::department_color;
use crate::models::employee::Employee;

const TOP_ROLES: usize = 8;
const RECENT_HIRE_MONTHS: u32 = 6;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStat {
    pub department: String,
    pub count: usize,
    pub percentage: u32,
    pub bar_width: f64,
    pub color: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleStat {
    pub role: String,
    pub count: usize,
    pub bar_width: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct YearStat {
    pub year: i32,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_employees: usize,
    pub department_count: usize,
    pub recent_hires: usize,
    pub average_tenure_years: Option<f64>,
    pub departments: Vec<DepartmentStat>,
    pub top_roles: Vec<RoleStat>,
    pub joining_years: Vec<YearStat>,
}

/// Counts per key, in order of first appearance.
fn count_by<K, F>(employees: &[Employee], key: F) -> Vec<(K, usize)>
where
    K: PartialEq,
    F: Fn(&Employee) -> K,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    for emp in employees {
        let k = key(emp);
        match counts.iter_mut().find(|(existing, _)| *existing == k) {
            Some((_, count)) => *count += 1,
            None => counts.push((k, 1)),
        }
    }
    counts
}

fn bar_width(count: usize, max: usize) -> f64 {
    if max == 0 {
        0.0
    } else {
        count as f64 / max as f64 * 100.0
    }
}

pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u32
}

pub fn department_stats(employees: &[Employee]) -> Vec<DepartmentStat> {
    let counts = count_by(employees, |emp| emp.department.clone());
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    counts
        .into_iter()
        .map(|(department, count)| DepartmentStat {
            color: department_color(&department),
            percentage: percentage(count, employees.len()),
            bar_width: bar_width(count, max),
            department,
            count,
        })
        .collect()
}

pub fn top_roles(employees: &[Employee]) -> Vec<RoleStat> {
    let mut counts = count_by(employees, |emp| emp.role.clone());
    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TOP_ROLES)
        .map(|(role, count)| RoleStat {
            role,
            count,
            bar_width: bar_width(count, max),
        })
        .collect()
}

pub fn joining_years(employees: &[Employee]) -> Vec<YearStat> {
    let mut counts = count_by(employees, |emp| emp.date_of_joining.year());
    counts.sort_by(|a, b| b.0.cmp(&a.0));
    counts
        .into_iter()
        .map(|(year, count)| YearStat { year, count })
        .collect()
}

pub fn recent_hires(employees: &[Employee], today: NaiveDate) -> usize {
    let cutoff = today
        .checked_sub_months(Months::new(RECENT_HIRE_MONTHS))
        .unwrap_or(NaiveDate::MIN);
    employees
        .iter()
        .filter(|emp| emp.date_of_joining >= cutoff)
        .count()
}

/// Mean tenure in 365-day years rounded to one decimal; `None` for no employees.
pub fn average_tenure_years(employees: &[Employee], today: NaiveDate) -> Option<f64> {
    if employees.is_empty() {
        return None;
    }
    let total_years: f64 = employees
        .iter()
        .map(|emp| (today - emp.date_of_joining).num_days() as f64 / 365.0)
        .sum();
    let mean = total_years / employees.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

pub fn analyze(employees: &[Employee], today: NaiveDate) -> AnalyticsReport {
    let departments = department_stats(employees);
    AnalyticsReport {
        total_employees: employees.len(),
        department_count: departments.len(),
        recent_hires: recent_hires(employees, today),
        average_tenure_years: average_tenure_years(employees, today),
        departments,
        top_roles: top_roles(employees),
        joining_years: joining_years(employees),
    }
}

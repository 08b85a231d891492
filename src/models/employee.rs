use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub date_of_joining: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Employee fields as submitted by the add/edit form, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    pub date_of_joining: NaiveDate,
    pub profile_picture: Option<String>,
}

impl EmployeeDraft {
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            department: self.department,
            role: self.role,
            date_of_joining: self.date_of_joining,
            profile_picture: self.profile_picture,
        }
    }
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

use std::collections::BTreeMap;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError};
use crate::errors::AppError;
use crate::models::department::Department;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub fn email_shape(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if !EMAIL_SHAPE.is_match(value) {
        return Err(ValidationError::new("email"));
    }
    Ok(())
}

pub fn known_department(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    if Department::from_name(value).is_none() {
        return Err(ValidationError::new("department"));
    }
    Ok(())
}

pub fn calendar_date(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date"))
}

/// Empty means "no picture"; anything else must parse as a URL, data URIs included.
pub fn image_reference(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    url::Url::parse(value.trim())
        .map(|_| ())
        .map_err(|_| ValidationError::new("url"))
}

fn field_key(field: &str) -> &str {
    match field {
        "first_name" => "firstName",
        "last_name" => "lastName",
        "date_of_joining" => "dateOfJoining",
        "profile_picture" => "profilePicture",
        other => other,
    }
}

fn field_label(key: &str) -> &str {
    match key {
        "firstName" => "First name",
        "lastName" => "Last name",
        "email" => "Email",
        "department" => "Department",
        "role" => "Role",
        "dateOfJoining" => "Date of joining",
        "profilePicture" => "Profile picture",
        other => other,
    }
}

fn describe(key: &str, code: &str) -> String {
    match code {
        "required" => format!("{} is required", field_label(key)),
        "email" => "Please enter a valid email address".to_string(),
        "department" => "Please select a valid department".to_string(),
        "date" => "Please enter a valid date (YYYY-MM-DD)".to_string(),
        "url" => "Please provide a valid image URL".to_string(),
        other => format!("{} is invalid ({})", field_label(key), other),
    }
}

/// Runs the payload's validators and reports one message per failing field.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        let fields: BTreeMap<String, String> = err
            .field_errors()
            .iter()
            .filter_map(|(field, errs)| {
                let key = field_key(field);
                errs.first()
                    .map(|first| (key.to_string(), describe(key, &first.code)))
            })
            .collect();
        log::debug!("Rejected payload: {:?}", fields);
        AppError::Validation(fields)
    })
}

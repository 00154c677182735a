//! Form binding and validation for the employee pages.
//!
//! `EmployeeForm` holds raw text exactly as submitted (or as prefilled for
//! editing); `validate` coerces it into `EmployeeFields` or reports one message
//! per failing field.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::storage::types::{Employee, EmployeeFields, Salary, DATE_FORMAT};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_DEPARTMENT_LEN: usize = 50;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("valid email regex"));

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(|e| e.field)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Raw text of the six employee inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    pub department: String,
    pub salary: String,
    pub hire_date: String,
}

impl EmployeeForm {
    /// Binds a decoded `application/x-www-form-urlencoded` body. Absent keys
    /// become empty strings and are reported as required by `validate`.
    pub fn from_submission(data: &HashMap<String, String>) -> Self {
        let take = |key: &str| data.get(key).cloned().unwrap_or_default();
        Self {
            name: take("name"),
            email: take("email"),
            date_of_birth: take("date_of_birth"),
            department: take("department"),
            salary: take("salary"),
            hire_date: take("hire_date"),
        }
    }

    /// Prefills the form from a stored record, dates as `YYYY-MM-DD`.
    pub fn from_employee(employee: &Employee) -> Self {
        let fields = &employee.fields;
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            date_of_birth: fields.date_of_birth.format(DATE_FORMAT).to_string(),
            department: fields.department.clone(),
            salary: fields.salary.to_string(),
            hire_date: fields.hire_date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn validate(&self) -> Result<EmployeeFields, FormErrors> {
        let mut errors = FormErrors::default();

        let name = required(&mut errors, "name", &self.name)
            .and_then(|v| within_length(&mut errors, "name", v, MAX_NAME_LEN));
        let email = required(&mut errors, "email", &self.email)
            .and_then(|v| within_length(&mut errors, "email", v, MAX_EMAIL_LEN))
            .and_then(|v| {
                if EMAIL_RE.is_match(v) {
                    Some(v)
                } else {
                    errors.push("email", "Enter a valid email address.");
                    None
                }
            });
        let date_of_birth = required(&mut errors, "date_of_birth", &self.date_of_birth)
            .and_then(|v| parse_date(&mut errors, "date_of_birth", v));
        let department = required(&mut errors, "department", &self.department)
            .and_then(|v| within_length(&mut errors, "department", v, MAX_DEPARTMENT_LEN));
        let salary = required(&mut errors, "salary", &self.salary).and_then(|v| {
            v.parse::<Salary>()
                .map_err(|e| errors.push("salary", e.to_string()))
                .ok()
        });
        let hire_date = required(&mut errors, "hire_date", &self.hire_date)
            .and_then(|v| parse_date(&mut errors, "hire_date", v));

        match (name, email, date_of_birth, department, salary, hire_date) {
            (
                Some(name),
                Some(email),
                Some(date_of_birth),
                Some(department),
                Some(salary),
                Some(hire_date),
            ) if errors.is_empty() => Ok(EmployeeFields {
                name: name.to_owned(),
                email: email.to_owned(),
                date_of_birth,
                department: department.to_owned(),
                salary,
                hire_date,
            }),
            _ => Err(errors),
        }
    }
}

fn required<'a>(errors: &mut FormErrors, field: &'static str, value: &'a str) -> Option<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, REQUIRED);
        return None;
    }
    Some(value)
}

fn within_length<'a>(
    errors: &mut FormErrors,
    field: &'static str,
    value: &'a str,
    max: usize,
) -> Option<&'a str> {
    let len = value.chars().count();
    if len > max {
        errors.push(
            field,
            format!(
                "Ensure this value has at most {} characters (it has {}).",
                max, len
            ),
        );
        return None;
    }
    Some(value)
}

fn parse_date(errors: &mut FormErrors, field: &'static str, value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| errors.push(field, "Enter a valid date."))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn valid() -> HashMap<String, String> {
        submission(&[
            ("name", "Grace Hopper"),
            ("email", "grace@navy.mil"),
            ("date_of_birth", "1906-12-09"),
            ("department", "Research"),
            ("salary", "7200.5"),
            ("hire_date", "1943-12-01"),
        ])
    }

    #[test]
    fn valid_submission_is_coerced() {
        let fields = EmployeeForm::from_submission(&valid()).validate().unwrap();
        assert_eq!(fields.name, "Grace Hopper");
        assert_eq!(fields.date_of_birth, NaiveDate::from_ymd_opt(1906, 12, 9).unwrap());
        assert_eq!(fields.salary.cents(), 720_050);
        assert_eq!(fields.hire_date, NaiveDate::from_ymd_opt(1943, 12, 1).unwrap());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mut data = valid();
        data.insert("name".into(), "  Grace Hopper ".into());
        let fields = EmployeeForm::from_submission(&data).validate().unwrap();
        assert_eq!(fields.name, "Grace Hopper");
    }

    #[test]
    fn every_missing_field_is_reported() {
        let errors = EmployeeForm::from_submission(&HashMap::new())
            .validate()
            .unwrap_err();
        assert_eq!(errors.len(), 6);
        for field in [
            "name",
            "email",
            "date_of_birth",
            "department",
            "salary",
            "hire_date",
        ] {
            assert_eq!(errors.for_field(field), Some(REQUIRED));
        }
    }

    #[test]
    fn malformed_values_are_reported_per_field() {
        let mut data = valid();
        data.insert("email".into(), "not-an-email".into());
        data.insert("date_of_birth".into(), "09/12/1906".into());
        data.insert("salary".into(), "12.345".into());
        let errors = EmployeeForm::from_submission(&data).validate().unwrap_err();

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["email", "date_of_birth", "salary"]
        );
        assert_eq!(errors.for_field("email"), Some("Enter a valid email address."));
        assert_eq!(errors.for_field("date_of_birth"), Some("Enter a valid date."));
        assert!(errors.for_field("name").is_none());
    }

    #[test]
    fn length_limits_apply() {
        let mut data = valid();
        data.insert("department".into(), "x".repeat(MAX_DEPARTMENT_LEN + 1));
        let errors = EmployeeForm::from_submission(&data).validate().unwrap_err();
        assert_eq!(
            errors.for_field("department"),
            Some("Ensure this value has at most 50 characters (it has 51).")
        );
    }

    #[test]
    fn prefill_formats_dates() {
        let fields = EmployeeForm::from_submission(&valid()).validate().unwrap();
        let employee = Employee { id: 3, fields };
        let form = EmployeeForm::from_employee(&employee);
        assert_eq!(form.date_of_birth, "1906-12-09");
        assert_eq!(form.hire_date, "1943-12-01");
        assert_eq!(form.salary, "7200.50");
        assert_eq!(form.validate().unwrap(), employee.fields);
    }
}

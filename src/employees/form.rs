//! Employee Form Validator
//!
//! Client-only "add employee" form. Four required fields; salary must also be
//! a positive number. A successful submit is simulated: nothing is stored,
//! the form resets and a success indicator shows for a fixed time.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Designation,
    Location,
    Salary,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Designation,
        FormField::Location,
        FormField::Salary,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Designation => "designation",
            FormField::Location => "location",
            FormField::Salary => "salary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Designation => "Designation",
            FormField::Location => "Location",
            FormField::Salary => "Salary",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Enter employee name",
            FormField::Designation => "Enter designation",
            FormField::Location => "Enter location",
            FormField::Salary => "Enter salary",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field-specific validation messages; never empty when returned as an error
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("{} field(s) need attention", .0.len())]
pub struct ValidationErrors(pub BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A submission that passed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub designation: String,
    pub location: String,
    pub salary: f64,
}

/// Check a salary string: present, numeric and strictly positive
pub fn validate_salary(raw: &str) -> Result<f64, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("{} is required", FormField::Salary.label()));
    }

    // `f64::from_str` also accepts "inf" and "NaN"; only plain decimals count
    let literal = raw
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));

    match raw.parse::<f64>() {
        Ok(v) if literal => {
            let underflow = v == 0.0 && v.is_sign_positive() && has_nonzero_mantissa(raw);
            if (v.is_infinite() && v > 0.0) || underflow {
                Err("Salary is out of range".to_string())
            } else if v <= 0.0 {
                Err("Salary must be greater than zero".to_string())
            } else {
                Ok(v)
            }
        }
        _ => Err("Salary must be a number".to_string()),
    }
}

fn has_nonzero_mantissa(raw: &str) -> bool {
    raw.split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.chars().any(|c| matches!(c, '1'..='9')))
}

/// Form values, errors and the success indicator
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    values: BTreeMap<FormField, String>,
    errors: ValidationErrors,
    success_until: Option<i64>,
    success_ms: u64,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::new(3000)
    }
}

impl EmployeeForm {
    /// Empty form whose success indicator lasts `success_ms`
    pub fn new(success_ms: u64) -> Self {
        Self {
            values: BTreeMap::new(),
            errors: ValidationErrors::default(),
            success_until: None,
            success_ms,
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Update a field; clears that field's error
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.0.remove(&field);
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validate without touching state
    pub fn validate(&self) -> Result<NewEmployee, ValidationErrors> {
        let mut errors = BTreeMap::new();

        for field in [FormField::Name, FormField::Designation, FormField::Location] {
            if self.value(field).trim().is_empty() {
                errors.insert(field, format!("{} is required", field.label()));
            }
        }

        let salary = match validate_salary(self.value(FormField::Salary)) {
            Ok(v) => Some(v),
            Err(msg) => {
                errors.insert(FormField::Salary, msg);
                None
            }
        };

        match salary {
            Some(salary) if errors.is_empty() => Ok(NewEmployee {
                name: self.value(FormField::Name).trim().to_string(),
                designation: self.value(FormField::Designation).trim().to_string(),
                location: self.value(FormField::Location).trim().to_string(),
                salary,
            }),
            _ => Err(ValidationErrors(errors)),
        }
    }

    /// Simulated submit. Blocks on any error; otherwise resets the form and
    /// shows the success indicator until `now_ms + success_ms`.
    pub fn submit(&mut self, now_ms: i64) -> Result<NewEmployee, ValidationErrors> {
        match self.validate() {
            Ok(employee) => {
                self.values.clear();
                self.errors = ValidationErrors::default();
                self.success_until = Some(now_ms.saturating_add(self.success_ms as i64));
                tracing::info!(name = %employee.name, "employee form submitted");
                Ok(employee)
            }
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "employee form rejected");
                self.success_until = None;
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Whether the success indicator is showing at `now_ms`
    pub fn success_visible(&self, now_ms: i64) -> bool {
        self.success_until.map(|until| now_ms < until).unwrap_or(false)
    }

    /// Hide the success indicator (timer callback)
    pub fn clear_success(&mut self) {
        self.success_until = None;
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|f| self.value(*f).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EmployeeForm {
        let mut form = EmployeeForm::new(3000);
        form.set(FormField::Name, "Grace Hopper");
        form.set(FormField::Designation, "Rear Admiral");
        form.set(FormField::Location, "Arlington");
        form.set(FormField::Salary, "120000");
        form
    }

    #[test]
    fn test_each_empty_field_is_flagged_alone() {
        for field in FormField::ALL {
            let mut form = filled();
            form.set(field, "");

            let errors = form.submit(0).unwrap_err();
            let flagged: Vec<_> = errors.fields().collect();
            assert_eq!(flagged, vec![field]);
            assert_eq!(errors.get(field), Some(format!("{} is required", field.label()).as_str()));

            // Blocked: values kept, no success indicator.
            assert_eq!(form.value(FormField::Name).is_empty(), field == FormField::Name);
            assert!(!form.success_visible(1));
        }
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = filled();
        form.set(FormField::Location, "   ");
        let errors = form.validate().unwrap_err();
        assert!(errors.get(FormField::Location).is_some());
    }

    #[test]
    fn test_salary_rules() {
        for bad in ["0", "-5", "-0.01", "abc", "12abc", "NaN", "inf"] {
            assert!(validate_salary(bad).is_err(), "{} should be rejected", bad);
        }
        assert_eq!(validate_salary("0").unwrap_err(), "Salary must be greater than zero");
        assert_eq!(validate_salary("abc").unwrap_err(), "Salary must be a number");

        for good in ["1", "0.5", "50000", " 42 ", "1e3"] {
            assert!(validate_salary(good).is_ok(), "{} should be accepted", good);
        }
    }

    #[test]
    fn test_salary_beyond_f64_range() {
        assert_eq!(validate_salary("1e400").unwrap_err(), "Salary is out of range");
        assert_eq!(validate_salary("1e-400").unwrap_err(), "Salary is out of range");
        assert_eq!(validate_salary("-1e400").unwrap_err(), "Salary must be greater than zero");
        assert_eq!(validate_salary("-1e-400").unwrap_err(), "Salary must be greater than zero");
        assert_eq!(validate_salary("0e5").unwrap_err(), "Salary must be greater than zero");
        assert_eq!(validate_salary("inf").unwrap_err(), "Salary must be a number");
        assert_eq!(validate_salary("NaN").unwrap_err(), "Salary must be a number");
    }

    #[test]
    fn test_successful_submit_resets_and_indicates() {
        let mut form = filled();
        let submitted = form.submit(1_000).unwrap();
        assert_eq!(submitted.name, "Grace Hopper");
        assert_eq!(submitted.salary, 120000.0);

        assert!(form.is_blank());
        assert!(form.errors().is_empty());
        assert!(form.success_visible(1_000));
        assert!(form.success_visible(3_999));
        assert!(!form.success_visible(4_000));
    }

    #[test]
    fn test_editing_clears_field_error() {
        let mut form = EmployeeForm::default();
        let errors = form.submit(0).unwrap_err();
        assert_eq!(errors.0.len(), 4);

        form.set(FormField::Name, "Ada");
        assert!(form.error(FormField::Name).is_none());
        assert!(form.error(FormField::Salary).is_some());
    }

    #[test]
    fn test_field_keys_round_trip() {
        for field in FormField::ALL {
            assert_eq!(FormField::from_key(field.key()), Some(field));
        }
        assert_eq!(FormField::from_key("age"), None);
    }
}

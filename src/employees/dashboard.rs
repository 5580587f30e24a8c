//! Employee Dashboard
//!
//! View state for the employee portal: which page is open, how the list is
//! laid out, the result of the one fetch made on mount, and the add form.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::error::FetchError;
use super::form::EmployeeForm;
use super::model::Employee;
use crate::config::UiConfig;

/// Presentational layout for the employee list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Table,
    #[default]
    Card,
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Table, ViewMode::Card, ViewMode::List];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Card => "card",
            ViewMode::List => "list",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table",
            ViewMode::Card => "Cards",
            ViewMode::List => "List",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "card" | "cards" => Ok(ViewMode::Card),
            "list" => Ok(ViewMode::List),
            other => Err(format!("unknown view mode: {}", other)),
        }
    }
}

/// Portal pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardPage {
    #[default]
    Home,
    Form,
}

/// Employee portal view state
#[derive(Debug, Clone)]
pub struct EmployeeDashboard {
    page: DashboardPage,
    view_mode: ViewMode,
    loading: bool,
    employees: Vec<Employee>,
    error: Option<String>,
    form: EmployeeForm,
}

impl Default for EmployeeDashboard {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl EmployeeDashboard {
    /// A freshly mounted dashboard: the fetch is in flight
    pub fn new(ui: &UiConfig) -> Self {
        Self {
            page: DashboardPage::Home,
            view_mode: ViewMode::default(),
            loading: true,
            employees: Vec::new(),
            error: None,
            form: EmployeeForm::new(ui.success_indicator_ms),
        }
    }

    pub fn page(&self) -> DashboardPage {
        self.page
    }

    pub fn set_page(&mut self, page: DashboardPage) {
        self.page = page;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    /// Mark a fetch as started
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the outcome of the fetch. A failure leaves the list empty.
    pub fn apply_fetch(&mut self, result: Result<Vec<Employee>, FetchError>) {
        self.loading = false;
        match result {
            Ok(employees) => {
                tracing::info!(count = employees.len(), "employees loaded");
                self.employees = employees;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch employees");
                self.employees.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    /// Run the mount-time fetch against `source`
    #[cfg(feature = "native")]
    pub async fn load<S: super::EmployeeSource + ?Sized>(&mut self, source: &S) {
        self.begin_fetch();
        let result = source.fetch_employees().await;
        self.apply_fetch(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mounts_loading() {
        let dash = EmployeeDashboard::default();
        assert!(dash.is_loading());
        assert!(dash.employees().is_empty());
        assert_eq!(dash.page(), DashboardPage::Home);
        assert_eq!(dash.view_mode(), ViewMode::Card);
    }

    #[test]
    fn test_apply_success() {
        let mut dash = EmployeeDashboard::default();
        dash.apply_fetch(Ok(vec![Employee::new(1, "Leanne Graham", "Sincere@april.biz")]));
        assert!(!dash.is_loading());
        assert_eq!(dash.employees().len(), 1);
        assert!(dash.error().is_none());
    }

    #[test]
    fn test_apply_failure() {
        let mut dash = EmployeeDashboard::default();
        dash.apply_fetch(Err(FetchError::Network("connection refused".into())));
        assert!(!dash.is_loading());
        assert!(dash.employees().is_empty());
        assert_eq!(dash.error(), Some("Network error: connection refused"));
    }

    #[test]
    fn test_view_mode_parse() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.as_str().parse::<ViewMode>().unwrap(), mode);
        }
        assert_eq!("Cards".parse::<ViewMode>().unwrap(), ViewMode::Card);
        assert!("grid".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_view_mode_does_not_touch_data() {
        let mut dash = EmployeeDashboard::default();
        dash.apply_fetch(Ok(vec![
            Employee::new(1, "A", "a@example.com"),
            Employee::new(2, "B", "b@example.com"),
        ]));
        let before = dash.employees().to_vec();
        for mode in ViewMode::ALL {
            dash.set_view_mode(mode);
            assert_eq!(dash.employees(), before.as_slice());
        }
    }
}

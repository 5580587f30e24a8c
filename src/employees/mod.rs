//! Employee Portal
//!
//! Read-only employee directory fetched once from a public placeholder API,
//! shown as a table, cards or a list, plus a client-only "add employee" form
//! whose submissions go nowhere.
//!
//! ## Architecture
//!
//! - **EmployeeDashboard**: page, layout, fetch outcome and form state
//! - **EmployeeForm**: required-field and salary validation
//! - **EmployeeClient**: `reqwest` fetcher behind the [`EmployeeSource`] seam (native only)

mod dashboard;
mod error;
#[cfg(feature = "native")]
mod fetcher;
pub mod form;
mod model;

pub use dashboard::{DashboardPage, EmployeeDashboard, ViewMode};
pub use error::FetchError;
#[cfg(feature = "native")]
pub use fetcher::{EmployeeClient, EmployeeSource};
pub use form::{EmployeeForm, FormField, NewEmployee, ValidationErrors};
pub use model::Employee;

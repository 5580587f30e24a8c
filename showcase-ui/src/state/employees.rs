//! Employee Portal State

use leptos::*;

use showcase::config::UiConfig;
use showcase::employees::{DashboardPage, EmployeeDashboard, FormField, ViewMode};

use super::now_ms;
use crate::api;

/// Portal state provided to the employee component tree
#[derive(Clone, Copy)]
pub struct EmployeeState {
    pub dashboard: RwSignal<EmployeeDashboard>,
    success_indicator_ms: u64,
}

/// Provide portal state to the component tree
pub fn provide_employee_state(ui: &UiConfig) -> EmployeeState {
    let state = EmployeeState {
        dashboard: create_rw_signal(EmployeeDashboard::new(ui)),
        success_indicator_ms: ui.success_indicator_ms,
    };
    provide_context(state);
    state
}

pub fn use_employee_state() -> EmployeeState {
    use_context::<EmployeeState>().expect("EmployeeState not found")
}

impl EmployeeState {
    /// The one fetch made when the portal mounts. No retry.
    pub fn load(&self) {
        let dashboard = self.dashboard;
        dashboard.update(|d| d.begin_fetch());

        spawn_local(async move {
            let result = api::fetch_employees(&api::get_employees_url()).await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("Error fetching employees: {}", e).into());
            }
            dashboard.update(|d| d.apply_fetch(result));
        });
    }

    pub fn set_page(&self, page: DashboardPage) {
        self.dashboard.update(|d| d.set_page(page));
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.dashboard.update(|d| d.set_view_mode(mode));
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.dashboard.update(|d| d.form_mut().set(field, value));
    }

    /// Simulated submit; on success the indicator hides itself after a delay
    pub fn submit(&self) {
        let accepted = self
            .dashboard
            .try_update(|d| d.form_mut().submit(now_ms()).is_ok())
            .unwrap_or(false);

        if accepted {
            let dashboard = self.dashboard;
            gloo_timers::callback::Timeout::new(self.success_indicator_ms as u32, move || {
                dashboard.update(|d| d.form_mut().clear_success());
            })
            .forget();
        }
    }
}

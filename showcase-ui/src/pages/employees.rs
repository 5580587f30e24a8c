//! Employee Portal Page

use leptos::*;

use showcase::config::UiConfig;
use showcase::employees::DashboardPage;
use showcase::render::{dashboard_view, DashboardView};

use crate::components::{EmployeeFormView, EmployeeListView, Loading, PortalNav, ViewToggle};
use crate::state::provide_employee_state;

#[component]
pub fn EmployeePortal() -> impl IntoView {
    let state = provide_employee_state(&UiConfig::default());
    state.load();

    let page = create_memo(move |_| state.dashboard.with(|d| d.page()));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <PortalNav />
            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match page.get() {
                    DashboardPage::Home => view! { <EmployeeHome /> }.into_view(),
                    DashboardPage::Form => view! { <EmployeeFormView /> }.into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn EmployeeHome() -> impl IntoView {
    let state = crate::state::use_employee_state();
    let current = create_memo(move |_| state.dashboard.with(dashboard_view));

    view! {
        <h1 class="text-3xl font-bold mb-6">"Employees"</h1>
        <ViewToggle />
        {move || match current.get() {
            DashboardView::Loading => view! { <Loading label="Loading employees..." /> }.into_view(),
            DashboardView::Error { message } => view! {
                <div class="px-4 py-3 rounded-lg bg-red-900/50 text-red-300">{message}</div>
            }
            .into_view(),
            DashboardView::Employees(listing) => view! { <EmployeeListView listing=listing /> }.into_view(),
        }}
    }
}

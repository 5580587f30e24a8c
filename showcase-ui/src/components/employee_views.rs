//! Employee List Components
//!
//! The same rows rendered as a table, a card grid or a plain list.

use leptos::*;

use showcase::employees::ViewMode;
use showcase::render::{EmployeeRow, EmployeeView, TABLE_COLUMNS};

use crate::state::use_employee_state;

/// Buttons switching the dashboard layout
#[component]
pub fn ViewToggle() -> impl IntoView {
    let state = use_employee_state();
    let current = move || state.dashboard.with(|d| d.view_mode());

    view! {
        <div class="flex space-x-2 mb-6">
            {ViewMode::ALL
                .iter()
                .copied()
                .map(|mode| {
                    let class = move || {
                        if current() == mode {
                            "px-4 py-2 rounded-lg bg-primary-600 text-white"
                        } else {
                            "px-4 py-2 rounded-lg bg-gray-700 text-gray-300 hover:bg-gray-600"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| state.set_view_mode(mode)>
                            {mode.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn EmployeeListView(listing: EmployeeView) -> impl IntoView {
    let EmployeeView { mode, rows } = listing;
    match mode {
        ViewMode::Table => view! { <EmployeeTable rows=rows /> }.into_view(),
        ViewMode::Card => view! { <EmployeeCards rows=rows /> }.into_view(),
        ViewMode::List => view! { <EmployeeList rows=rows /> }.into_view(),
    }
}

#[component]
fn EmployeeTable(rows: Vec<EmployeeRow>) -> impl IntoView {
    view! {
        <table class="w-full text-left bg-gray-800 rounded-lg overflow-hidden">
            <thead class="bg-gray-700">
                <tr>
                    {TABLE_COLUMNS
                        .iter()
                        .map(|col| view! { <th class="px-4 py-3">{*col}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr class="border-t border-gray-700">
                            <td class="px-4 py-3">{row.id}</td>
                            <td class="px-4 py-3">{row.name}</td>
                            <td class="px-4 py-3">{row.email}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

#[component]
fn EmployeeCards(rows: Vec<EmployeeRow>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
            {rows
                .into_iter()
                .map(|row| view! {
                    <div class="bg-gray-800 rounded-lg p-4">
                        <h3 class="text-lg font-semibold">{row.name.clone()}</h3>
                        <p class="text-sm text-gray-400">{row.id_label()}</p>
                        <p class="text-gray-400">{row.email.clone()}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn EmployeeList(rows: Vec<EmployeeRow>) -> impl IntoView {
    view! {
        <ul class="divide-y divide-gray-700 bg-gray-800 rounded-lg">
            {rows
                .into_iter()
                .map(|row| view! {
                    <li class="px-4 py-3">
                        <span class="font-medium">{row.name.clone()}</span>
                        " - "
                        <span class="text-gray-400">{row.email.clone()}</span>
                        <span class="text-sm text-gray-500 ml-2">{row.id_label()}</span>
                    </li>
                })
                .collect_view()}
        </ul>
    }
}

//! Navigation Components
//!
//! The gallery navbar and the employee portal header.

use leptos::*;
use leptos_router::*;

use showcase::employees::DashboardPage;
use showcase::gallery::PanelId;

use crate::state::{use_employee_state, use_gallery_state};

/// Gallery navbar, shown on every panel except login and signup
#[component]
pub fn GalleryNav() -> impl IntoView {
    let state = use_gallery_state();

    let greeting = move || {
        state
            .app
            .with(|a| a.session().map(|s| s.display_name().to_string()))
            .map(|name| format!("Welcome, {}", name))
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <button
                        class="flex items-center space-x-3"
                        on:click=move |_| state.navigate(PanelId::Home)
                    >
                        <span class="text-2xl">"🖼"</span>
                        <span class="text-xl font-bold text-white">"Art Gallery"</span>
                    </button>

                    <div class="flex items-center space-x-1">
                        <span class="px-4 text-sm text-gray-400">{greeting}</span>
                        <NavButton label="Home" on_click=move || state.navigate(PanelId::Home) />
                        <NavButton label="Gallery" on_click=move || state.navigate(PanelId::Grid) />
                        <NavButton label="Logout" on_click=move || state.logout() />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Employee portal header with page switching
#[component]
pub fn PortalNav() -> impl IntoView {
    let state = use_employee_state();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <span class="text-xl font-bold text-white">"Employee Portal"</span>

                    <div class="flex items-center space-x-1">
                        <NavButton label="Home" on_click=move || state.set_page(DashboardPage::Home) />
                        <NavButton label="Add Employee" on_click=move || state.set_page(DashboardPage::Form) />
                        <A
                            href="/"
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                        >
                            "Gallery"
                        </A>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavButton<F>(
    label: &'static str,
    on_click: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            on:click=move |_| on_click()
        >
            {label}
        </button>
    }
}

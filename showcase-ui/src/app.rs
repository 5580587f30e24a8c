//! App Root Component
//!
//! Routes to the two prototypes. Each page provides its own state.

use leptos::*;
use leptos_router::*;

use crate::pages::{EmployeePortal, GalleryRoot};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=GalleryRoot />
                <Route path="/employees" view=EmployeePortal />
                <Route path="/*any" view=NotFound />
            </Routes>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <div class="space-x-4">
                <A
                    href="/"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Go to Gallery"
                </A>
                <A
                    href="/employees"
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Employee Portal"
                </A>
            </div>
        </div>
    }
}

//! Toast Notification Component
//!
//! Stacks transient messages in the bottom-right corner. Dismissal is driven
//! by the timers the state layer arms, so this component only renders.

use leptos::*;

use showcase::notify::Toast;

/// Toast notification container
#[component]
pub fn ToastStack(
    #[prop(into)]
    toasts: Signal<Vec<Toast>>,
) -> impl IntoView {
    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| view! { <ToastMessage toast=toast /> }
            />
        </div>
    }
}

#[component]
fn ToastMessage(toast: Toast) -> impl IntoView {
    view! {
        <div
            class="flex items-center space-x-3 text-white px-4 py-3 rounded-lg shadow-lg \
                   transform transition-all duration-300 ease-out animate-slide-in"
            style=format!("background-color: {}", toast.severity.color())
        >
            <span class="text-lg">{toast.severity.icon()}</span>
            <span class="text-sm font-medium">{toast.message}</span>
        </div>
    }
}

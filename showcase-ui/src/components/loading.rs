//! Loading Component

use leptos::*;

/// Loading spinner with an optional caption
#[component]
pub fn Loading(
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3">
            <div class="loading-spinner w-8 h-8" />
            {label.map(|text| view! { <p class="text-gray-400">{text}</p> })}
        </div>
    }
}

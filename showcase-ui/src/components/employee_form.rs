//! Employee Form Component
//!
//! Four fields with inline errors. Submission is simulated: nothing is sent,
//! the form clears and a success banner shows for a few seconds.

use leptos::*;

use showcase::employees::FormField;

use crate::state::use_employee_state;

#[component]
pub fn EmployeeFormView() -> impl IntoView {
    let state = use_employee_state();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    let success = move || state.dashboard.with(|d| d.form().success_visible(crate::state::now_ms()));

    view! {
        <div class="max-w-lg mx-auto bg-gray-800 rounded-lg p-6">
            <h2 class="text-2xl font-bold mb-6">"Add Employee"</h2>

            <Show when=success>
                <div class="mb-4 px-4 py-3 rounded-lg bg-green-600 text-white">
                    "Form submitted successfully!"
                </div>
            </Show>

            <form on:submit=on_submit class="space-y-4">
                {FormField::ALL
                    .iter()
                    .copied()
                    .map(|field| view! { <FieldInput field=field /> })
                    .collect_view()}

                <button
                    type="submit"
                    class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Submit"
                </button>
            </form>
        </div>
    }
}

#[component]
fn FieldInput(field: FormField) -> impl IntoView {
    let state = use_employee_state();

    let value = move || state.dashboard.with(|d| d.form().value(field).to_string());
    let error = move || state.dashboard.with(|d| d.form().error(field).map(str::to_string));
    let input_type = if field == FormField::Salary { "number" } else { "text" };

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-1" for=field.key()>{field.label()}</label>
            <input
                id=field.key()
                name=field.key()
                type=input_type
                placeholder=field.placeholder()
                class="w-full bg-gray-700 border border-gray-600 rounded-lg px-4 py-2 text-white"
                prop:value=value
                on:input=move |ev| state.set_field(field, event_target_value(&ev))
            />
            {move || error().map(|msg| view! { <p class="text-sm text-red-400 mt-1">{msg}</p> })}
        </div>
    }
}

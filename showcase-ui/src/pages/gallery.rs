//! Gallery Page
//!
//! Hosts the five gallery panels. Exactly one is rendered at a time; which
//! one is decided by [`GalleryApp`](showcase::gallery::GalleryApp).

use leptos::*;

use showcase::config::UiConfig;
use showcase::gallery::PanelId;
use showcase::render::{panel_view, ArtCard, ArtDetail, PanelView};

use crate::components::{ArtCardView, GalleryNav, ToastStack};
use crate::state::{provide_gallery_state, use_gallery_state};

#[component]
pub fn GalleryRoot() -> impl IntoView {
    let state = provide_gallery_state(&UiConfig::default());

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            state.escape();
        }
    });
    on_cleanup(move || handle.remove());

    let current = create_memo(move |_| state.app.with(|a| panel_view(a.panel())));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Show when=move || current.with(|p| p.shows_navbar())>
                <GalleryNav />
            </Show>

            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match current.get() {
                    PanelView::Login => view! { <LoginPanel /> }.into_view(),
                    PanelView::Signup => view! { <SignupPanel /> }.into_view(),
                    PanelView::Home { featured } => view! { <HomePanel featured=featured /> }.into_view(),
                    PanelView::Grid { cards } => view! { <GridPanel cards=cards /> }.into_view(),
                    PanelView::Detail { detail, similar } => {
                        view! { <DetailPanel detail=detail similar=similar /> }.into_view()
                    }
                }}
            </main>

            <ToastStack toasts=state.toasts() />
        </div>
    }
}

#[component]
fn LoginPanel() -> impl IntoView {
    let state = use_gallery_state();
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        state.hold_busy(busy);
        state.login(&email.get_untracked(), &password.get_untracked());
    };

    view! {
        <AuthCard title="Login">
            <form on:submit=on_submit class="space-y-4">
                <TextInput label="Email" kind="email" value=email set_value=set_email />
                <TextInput label="Password" kind="password" value=password set_value=set_password />
                <SubmitButton label="Login" busy=busy />
            </form>
            <p class="text-sm text-gray-400 mt-4">
                "Don't have an account? "
                <button class="text-primary-400 hover:underline" on:click=move |_| state.navigate(PanelId::Signup)>
                    "Sign up"
                </button>
            </p>
        </AuthCard>
    }
}

#[component]
fn SignupPanel() -> impl IntoView {
    let state = use_gallery_state();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let busy = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        state.hold_busy(busy);
        state.signup(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );
    };

    view! {
        <AuthCard title="Sign Up">
            <form on:submit=on_submit class="space-y-4">
                <TextInput label="Full Name" kind="text" value=name set_value=set_name />
                <TextInput label="Email" kind="email" value=email set_value=set_email />
                <TextInput label="Password" kind="password" value=password set_value=set_password />
                <SubmitButton label="Create Account" busy=busy />
            </form>
            <p class="text-sm text-gray-400 mt-4">
                "Already have an account? "
                <button class="text-primary-400 hover:underline" on:click=move |_| state.navigate(PanelId::Login)>
                    "Log in"
                </button>
            </p>
        </AuthCard>
    }
}

#[component]
fn HomePanel(featured: Vec<ArtCard>) -> impl IntoView {
    let state = use_gallery_state();

    view! {
        <section class="text-center mb-10">
            <h1 class="text-4xl font-bold mb-2">"Welcome to the Art Gallery"</h1>
            <p class="text-gray-400 mb-6">"Explore masterpieces from across the centuries."</p>
            <button
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                on:click=move |_| state.navigate(PanelId::Grid)
            >
                "Browse the collection"
            </button>
        </section>
        <h2 class="text-2xl font-semibold mb-4">"Featured"</h2>
        <CardGrid cards=featured />
    }
}

#[component]
fn GridPanel(cards: Vec<ArtCard>) -> impl IntoView {
    view! {
        <h1 class="text-3xl font-bold mb-6">"Gallery"</h1>
        <CardGrid cards=cards />
    }
}

#[component]
fn DetailPanel(detail: ArtDetail, similar: Vec<ArtCard>) -> impl IntoView {
    let state = use_gallery_state();

    view! {
        <button class="text-primary-400 hover:underline mb-6" on:click=move |_| state.navigate(PanelId::Grid)>
            "← Back to gallery"
        </button>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-10">
            <img src=detail.image alt=detail.title class="w-full rounded-lg" />
            <div>
                <h1 class="text-3xl font-bold">{detail.title}</h1>
                <p class="text-xl text-gray-400">{detail.artist}</p>
                <p class="text-gray-500 mb-4">{detail.year}</p>
                <p class="text-gray-300 leading-relaxed">{detail.description}</p>
            </div>
        </div>
        <h2 class="text-2xl font-semibold mb-4">"Similar Artworks"</h2>
        <CardGrid cards=similar />
    }
}

#[component]
fn CardGrid(cards: Vec<ArtCard>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {cards.into_iter().map(|card| view! { <ArtCardView card=card /> }).collect_view()}
        </div>
    }
}

#[component]
fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="max-w-md mx-auto mt-16 bg-gray-800 rounded-lg p-8">
            <h1 class="text-2xl font-bold mb-6 text-center">{title}</h1>
            {children()}
        </div>
    }
}

#[component]
fn TextInput(
    label: &'static str,
    kind: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-1">{label}</label>
            <input
                type=kind
                class="w-full bg-gray-700 border border-gray-600 rounded-lg px-4 py-2 text-white"
                prop:value=value
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn SubmitButton(label: &'static str, busy: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:opacity-60 rounded-lg font-medium transition-colors"
            prop:disabled=move || busy.get()
        >
            {move || {
                if busy.get() {
                    view! {
                        <span class="inline-flex items-center space-x-2">
                            <span class="inline-block loading-spinner w-4 h-4" />
                            <span>"Loading..."</span>
                        </span>
                    }
                    .into_view()
                } else {
                    label.into_view()
                }
            }}
        </button>
    }
}

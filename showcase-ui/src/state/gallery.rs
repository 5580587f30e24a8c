//! Gallery State
//!
//! Reactive wrapper around [`GalleryApp`]. Every visitor action goes through
//! here so the fire-once timers (toast dismissal, post-login redirect) are
//! armed in one place.

use leptos::*;

use showcase::config::UiConfig;
use showcase::gallery::{ArtworkId, GalleryApp, PanelId, Redirect};
use showcase::notify::{Toast, ToastId};

use super::now_ms;

/// Gallery state provided to the gallery component tree
#[derive(Clone, Copy)]
pub struct GalleryState {
    pub app: RwSignal<GalleryApp>,
    submit_busy_ms: u64,
}

/// Provide gallery state to the component tree
pub fn provide_gallery_state(ui: &UiConfig) -> GalleryState {
    let state = GalleryState {
        app: create_rw_signal(GalleryApp::new(ui)),
        submit_busy_ms: ui.submit_busy_ms,
    };
    provide_context(state);
    state
}

pub fn use_gallery_state() -> GalleryState {
    use_context::<GalleryState>().expect("GalleryState not found")
}

impl GalleryState {
    /// Toasts currently on screen
    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        let app = self.app;
        Signal::derive(move || app.with(|a| a.notifier().toasts().to_vec()))
    }

    pub fn navigate(&self, target: PanelId) {
        self.app.update(|a| a.navigate(target));
    }

    pub fn show_art_detail(&self, id: ArtworkId) {
        let result = self.app.try_update(|a| a.show_art_detail(id).map(|art| art.id));
        if let Some(Err(e)) = result {
            web_sys::console::warn_1(&format!("{}", e).into());
        }
    }

    pub fn login(&self, email: &str, password: &str) {
        let redirect = self
            .app
            .try_update(|a| a.login(email, password, now_ms()).ok())
            .flatten();
        self.after_action(redirect);
    }

    pub fn signup(&self, full_name: &str, email: &str, password: &str) {
        let redirect = self
            .app
            .try_update(|a| a.signup(full_name, email, password, now_ms()).ok())
            .flatten();
        self.after_action(redirect);
    }

    pub fn logout(&self) {
        let redirect = self.app.try_update(|a| a.logout(now_ms()));
        self.after_action(redirect);
    }

    pub fn escape(&self) {
        self.app.update(|a| {
            a.handle_escape();
        });
    }

    /// Mark a submit button busy; it re-enables itself after a fixed delay
    pub fn hold_busy(&self, busy: RwSignal<bool>) {
        busy.set(true);
        gloo_timers::callback::Timeout::new(self.submit_busy_ms as u32, move || {
            busy.set(false);
        })
        .forget();
    }

    /// Arm the dismiss timer of the newest toast and any redirect
    fn after_action(&self, redirect: Option<Redirect>) {
        let latest = self.app.with_untracked(|a| {
            a.notifier()
                .toasts()
                .last()
                .map(|t| (t.id, a.notifier().duration_ms()))
        });
        if let Some((id, duration)) = latest {
            self.schedule_dismiss(id, duration);
        }

        if let Some(Redirect { target, delay_ms }) = redirect {
            let app = self.app;
            gloo_timers::callback::Timeout::new(delay_ms as u32, move || {
                app.update(|a| a.navigate(target));
            })
            .forget();
        }
    }

    fn schedule_dismiss(&self, id: ToastId, duration_ms: u64) {
        let app = self.app;
        gloo_timers::callback::Timeout::new(duration_ms as u32, move || {
            app.update(|a| {
                a.notifier_mut().dismiss(id);
            });
        })
        .forget();
    }
}

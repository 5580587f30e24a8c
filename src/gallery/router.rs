//! View Router
//!
//! Holds the gallery's whole view state in one place: the visible panel, the
//! signed-in session, the artwork being viewed and the toast stack. Exactly
//! one panel is current; there is no history stack and nothing survives a
//! reload.

use serde::Serialize;
use std::fmt;

use super::catalog::{self, Artwork, ArtworkId};
use super::error::{AuthError, GalleryError};
use super::session::{self, Session};
use super::similar;
use crate::config::UiConfig;
use crate::notify::Notifier;
use crate::random::{Prng, RandomSource};

/// Panel identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelId {
    Login,
    Signup,
    Home,
    Grid,
    Detail,
}

impl PanelId {
    pub const ALL: [PanelId; 5] = [
        PanelId::Login,
        PanelId::Signup,
        PanelId::Home,
        PanelId::Grid,
        PanelId::Detail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Login => "login",
            PanelId::Signup => "signup",
            PanelId::Home => "home",
            PanelId::Grid => "grid",
            PanelId::Detail => "detail",
        }
    }

    /// Parse a panel name. Also accepts the page ids used by the static markup.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "login" => Some(PanelId::Login),
            "signup" => Some(PanelId::Signup),
            "home" | "gallery-home" => Some(PanelId::Home),
            "grid" | "art-display" => Some(PanelId::Grid),
            "detail" | "art-detail" => Some(PanelId::Detail),
            _ => None,
        }
    }

    /// Like [`PanelId::from_name`], falling back to the login panel
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or(PanelId::Login)
    }

    /// The navbar is hidden on the unauthenticated panels
    pub fn shows_navbar(&self) -> bool {
        !matches!(self, PanelId::Login | PanelId::Signup)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The visible panel and whatever it was prepared with on entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "panel", rename_all = "lowercase")]
pub enum Panel {
    Login,
    Signup,
    Home,
    Grid,
    Detail {
        artwork: ArtworkId,
        similar: Vec<ArtworkId>,
    },
}

impl Panel {
    pub fn id(&self) -> PanelId {
        match self {
            Panel::Login => PanelId::Login,
            Panel::Signup => PanelId::Signup,
            Panel::Home => PanelId::Home,
            Panel::Grid => PanelId::Grid,
            Panel::Detail { .. } => PanelId::Detail,
        }
    }
}

/// A panel change the caller should apply once `delay_ms` has elapsed.
/// Fire-once; nothing cancels it if the visitor navigates first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub target: PanelId,
    pub delay_ms: u64,
}

/// Gallery view state
#[derive(Debug, Clone)]
pub struct GalleryApp<R = Prng> {
    panel: Panel,
    session: Option<Session>,
    current: Option<ArtworkId>,
    notifier: Notifier,
    redirect_delay_ms: u64,
    rng: R,
}

impl GalleryApp<Prng> {
    /// Create the app on the login panel with a clock-seeded random source
    pub fn new(ui: &UiConfig) -> Self {
        Self::with_rng(ui, Prng::from_clock())
    }
}

impl Default for GalleryApp<Prng> {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}

impl<R: RandomSource> GalleryApp<R> {
    /// Create the app with an explicit random source
    pub fn with_rng(ui: &UiConfig, rng: R) -> Self {
        Self {
            panel: Panel::Login,
            session: None,
            current: None,
            notifier: Notifier::new(ui.toast_duration_ms),
            redirect_delay_ms: ui.redirect_delay_ms,
            rng,
        }
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// The artwork last opened in the detail panel
    pub fn current_artwork(&self) -> Option<&'static Artwork> {
        self.current.and_then(catalog::find)
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Show the panel named `name`; unknown names show the login panel
    pub fn show_panel(&mut self, name: &str) -> PanelId {
        let target = PanelId::resolve(name);
        self.navigate(target);
        self.panel.id()
    }

    /// Make `target` the visible panel
    pub fn navigate(&mut self, target: PanelId) {
        self.panel = match target {
            PanelId::Login => Panel::Login,
            PanelId::Signup => Panel::Signup,
            PanelId::Home => Panel::Home,
            PanelId::Grid => Panel::Grid,
            PanelId::Detail => match self.current {
                Some(id) => self.detail_panel(id),
                None => {
                    tracing::debug!("no artwork selected, showing grid instead of detail");
                    Panel::Grid
                }
            },
        };

        tracing::info!(panel = %self.panel.id(), "panel shown");
    }

    /// Open the detail panel for artwork `id`. Unknown ids change nothing.
    pub fn show_art_detail(&mut self, id: ArtworkId) -> Result<&'static Artwork, GalleryError> {
        let artwork = catalog::find(id).ok_or(GalleryError::UnknownArtwork(id))?;

        self.current = Some(artwork.id);
        self.panel = self.detail_panel(artwork.id);

        tracing::info!(artwork = artwork.id, title = artwork.title, "artwork detail shown");
        Ok(artwork)
    }

    fn detail_panel(&mut self, id: ArtworkId) -> Panel {
        let similar = match catalog::find(id) {
            Some(art) => similar::similar_artworks(art.category, art.id, &mut self.rng)
                .into_iter()
                .map(|a| a.id)
                .collect(),
            None => Vec::new(),
        };

        Panel::Detail {
            artwork: id,
            similar,
        }
    }

    /// Accept a login when both fields are filled in
    pub fn login(&mut self, email: &str, password: &str, now_ms: i64) -> Result<Redirect, AuthError> {
        let result = session::login(email, password);
        self.start_session(result, "Login successful!", now_ms)
    }

    /// Accept a signup when every field is filled in
    pub fn signup(
        &mut self,
        full_name: &str,
        email: &str,
        password: &str,
        now_ms: i64,
    ) -> Result<Redirect, AuthError> {
        let result = session::signup(full_name, email, password);
        self.start_session(result, "Account created successfully!", now_ms)
    }

    fn start_session(
        &mut self,
        result: Result<Session, AuthError>,
        success: &str,
        now_ms: i64,
    ) -> Result<Redirect, AuthError> {
        match result {
            Ok(session) => {
                tracing::info!(email = %session.email, "session started");
                self.session = Some(session);
                self.notifier.success(success, now_ms);
                Ok(self.redirect(PanelId::Home))
            }
            Err(e) => {
                tracing::debug!(missing = ?e.missing, "sign-in rejected");
                self.notifier.error(e.to_string(), now_ms);
                Err(e)
            }
        }
    }

    /// Drop the session and the viewed artwork, then head back to login
    pub fn logout(&mut self, now_ms: i64) -> Redirect {
        self.session = None;
        self.current = None;
        self.notifier.success("Logged out successfully!", now_ms);
        tracing::info!("session ended");
        self.redirect(PanelId::Login)
    }

    /// Escape on the detail panel returns to the grid. Returns whether it did.
    pub fn handle_escape(&mut self) -> bool {
        if self.panel.id() == PanelId::Detail {
            self.navigate(PanelId::Grid);
            true
        } else {
            false
        }
    }

    fn redirect(&self, target: PanelId) -> Redirect {
        Redirect {
            target,
            delay_ms: self.redirect_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;
    use crate::random::ScriptedSource;

    fn app() -> GalleryApp<Prng> {
        GalleryApp::with_rng(&UiConfig::default(), Prng::new(1))
    }

    #[test]
    fn test_starts_on_login() {
        let app = app();
        assert_eq!(app.panel(), &Panel::Login);
        assert!(app.session().is_none());
        assert!(!app.panel().id().shows_navbar());
    }

    #[test]
    fn test_panel_names_resolve() {
        assert_eq!(PanelId::resolve("gallery-home"), PanelId::Home);
        assert_eq!(PanelId::resolve("art-display"), PanelId::Grid);
        assert_eq!(PanelId::resolve("ART-DETAIL"), PanelId::Detail);
        for id in PanelId::ALL {
            assert_eq!(PanelId::resolve(id.as_str()), id);
        }
    }

    #[test]
    fn test_unknown_panel_falls_back_to_login() {
        let mut app = app();
        app.navigate(PanelId::Grid);
        assert_eq!(app.show_panel("settings"), PanelId::Login);
        assert_eq!(app.panel(), &Panel::Login);
    }

    #[test]
    fn test_show_art_detail() {
        let mut app = app();
        let art = app.show_art_detail(1).unwrap();
        assert_eq!(art.title, "Starry Night");

        match app.panel() {
            Panel::Detail { artwork, similar } => {
                assert_eq!(*artwork, 1);
                assert!(!similar.contains(&1));
                assert!(similar.len() >= 2 && similar.len() <= 3);
            }
            other => panic!("expected detail panel, got {:?}", other),
        }
        assert_eq!(app.current_artwork().map(|a| a.id), Some(1));
    }

    #[test]
    fn test_unknown_artwork_leaves_state() {
        let mut app = app();
        app.navigate(PanelId::Grid);
        assert_eq!(app.show_art_detail(77), Err(GalleryError::UnknownArtwork(77)));
        assert_eq!(app.panel(), &Panel::Grid);
        assert!(app.current_artwork().is_none());
    }

    #[test]
    fn test_detail_without_selection_shows_grid() {
        let mut app = app();
        app.navigate(PanelId::Detail);
        assert_eq!(app.panel(), &Panel::Grid);
    }

    #[test]
    fn test_detail_uses_injected_source() {
        let mut app = GalleryApp::with_rng(&UiConfig::default(), ScriptedSource::new(vec![0, 0]));
        app.show_art_detail(5).unwrap();
        assert_eq!(
            app.panel(),
            &Panel::Detail {
                artwork: 5,
                similar: vec![1, 2]
            }
        );
    }

    #[test]
    fn test_login_flow() {
        let mut app = app();
        let redirect = app.login("ada@example.com", "pw", 0).unwrap();
        assert_eq!(
            redirect,
            Redirect {
                target: PanelId::Home,
                delay_ms: 1000
            }
        );
        assert_eq!(app.session().unwrap().email, "ada@example.com");

        let toast = &app.notifier().toasts()[0];
        assert_eq!(toast.message, "Login successful!");
        assert_eq!(toast.severity, Severity::Success);

        // Still on login until the caller applies the redirect.
        assert_eq!(app.panel(), &Panel::Login);
        app.navigate(redirect.target);
        assert!(app.panel().id().shows_navbar());
    }

    #[test]
    fn test_login_rejected() {
        let mut app = app();
        assert!(app.login("", "", 0).is_err());
        assert!(app.session().is_none());

        let toast = &app.notifier().toasts()[0];
        assert_eq!(toast.message, "Please fill in all fields.");
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn test_signup_flow() {
        let mut app = app();
        app.navigate(PanelId::Signup);
        let redirect = app.signup("Ada", "ada@example.com", "pw", 0).unwrap();
        assert_eq!(redirect.target, PanelId::Home);
        assert_eq!(app.session().unwrap().name.as_deref(), Some("Ada"));
        assert_eq!(app.notifier().toasts()[0].message, "Account created successfully!");
    }

    #[test]
    fn test_logout_clears_state() {
        let mut app = app();
        app.login("ada@example.com", "pw", 0).unwrap();
        app.show_art_detail(2).unwrap();

        let redirect = app.logout(10);
        assert_eq!(redirect.target, PanelId::Login);
        assert!(app.session().is_none());
        assert!(app.current_artwork().is_none());
        assert_eq!(app.notifier().toasts().len(), 2);
    }

    #[test]
    fn test_escape_from_detail() {
        let mut app = app();
        assert!(!app.handle_escape());

        app.show_art_detail(3).unwrap();
        assert!(app.handle_escape());
        assert_eq!(app.panel(), &Panel::Grid);
    }
}

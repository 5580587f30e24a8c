//! # Showcase
//!
//! Two small, independent front-end prototypes and the state behind them:
//!
//! - an **art gallery** that swaps full-screen panels (login, signup, home,
//!   grid, detail) over a fixed collection of five artworks
//! - an **employee portal** that fetches a public placeholder API once and
//!   shows the result as a table, cards or a list, next to a client-only
//!   form with field validation
//!
//! ## Modules
//!
//! - [`gallery`]: artwork catalog, similar-artwork selection, panel router
//! - [`employees`]: employee model, fetcher, dashboard state, form validator
//! - [`render`]: pure view models and the terminal renderer
//! - [`notify`]: auto-dismissing toasts
//! - [`config`]: TOML configuration with environment overrides
//! - `mock_api`: offline Axum stand-in for the placeholder API (native only)
//!
//! The web UI in `showcase-ui/` depends on this crate with
//! `default-features = false`, which leaves out everything that needs Tokio.
//!
//! ## Quick Start
//!
//! ```rust
//! use showcase::config::UiConfig;
//! use showcase::gallery::{GalleryApp, PanelId};
//! use showcase::render::{panel_view, PanelView};
//!
//! let mut app = GalleryApp::new(&UiConfig::default());
//! let redirect = app.login("ada@example.com", "secret", 0).unwrap();
//! app.navigate(redirect.target);
//! assert_eq!(app.panel().id(), PanelId::Home);
//!
//! app.show_art_detail(5).unwrap();
//! if let PanelView::Detail { detail, similar } = panel_view(app.panel()) {
//!     assert_eq!(detail.title, "The Thinker");
//!     assert_eq!(similar.len(), 2);
//! }
//! ```

pub mod config;
pub mod employees;
pub mod gallery;
#[cfg(feature = "native")]
pub mod mock_api;
pub mod notify;
pub mod random;
pub mod render;
#[cfg(feature = "native")]
pub mod telemetry;

pub use config::{Config, ConfigError, UiConfig};

pub use gallery::{
    Artwork, ArtworkId, AuthError, Category, GalleryApp, GalleryError, Panel, PanelId, Redirect,
    Session,
};

pub use employees::{
    DashboardPage, Employee, EmployeeDashboard, EmployeeForm, FetchError, FormField, NewEmployee,
    ValidationErrors, ViewMode,
};

#[cfg(feature = "native")]
pub use employees::{EmployeeClient, EmployeeSource};

pub use notify::{Notifier, Severity, Toast, ToastId};

pub use random::{Prng, RandomSource};

pub use render::{ArtCard, ArtDetail, DashboardView, EmployeeView, PanelView};

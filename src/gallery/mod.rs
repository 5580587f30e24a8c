//! Art Gallery
//!
//! View state for the gallery prototype: a login/signup front door, a home
//! panel with the featured pieces, a grid of the whole collection and a
//! detail panel with similar-artwork suggestions.
//!
//! ## Data Flow
//!
//! 1. A visitor action calls into [`GalleryApp`] (navigate, open detail, sign in)
//! 2. The app swaps its single [`Panel`] value and raises toasts if needed
//! 3. A renderer turns the panel into a [`crate::render::PanelView`]

pub mod catalog;
mod error;
mod router;
mod session;
pub mod similar;

pub use catalog::{Artwork, ArtworkId, Category};
pub use error::{AuthError, GalleryError};
pub use router::{GalleryApp, Panel, PanelId, Redirect};
pub use session::Session;
pub use similar::similar_artworks;

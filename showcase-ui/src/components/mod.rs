//! UI Components
//!
//! Reusable Leptos components shared by the gallery and the employee portal.

pub mod art_card;
pub mod employee_form;
pub mod employee_views;
pub mod loading;
pub mod nav;
pub mod toast;

pub use art_card::ArtCardView;
pub use employee_form::EmployeeFormView;
pub use employee_views::{EmployeeListView, ViewToggle};
pub use loading::Loading;
pub use nav::{GalleryNav, PortalNav};
pub use toast::ToastStack;

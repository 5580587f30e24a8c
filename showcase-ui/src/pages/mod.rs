//! Pages
//!
//! One root page per prototype.

pub mod employees;
pub mod gallery;

pub use employees::EmployeePortal;
pub use gallery::GalleryRoot;

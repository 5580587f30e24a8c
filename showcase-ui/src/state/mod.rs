//! State Management
//!
//! One state container per prototype; the two never share signals.

pub mod employees;
pub mod gallery;

pub use employees::{provide_employee_state, use_employee_state, EmployeeState};
pub use gallery::{provide_gallery_state, use_gallery_state, GalleryState};

/// Wall-clock time in milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

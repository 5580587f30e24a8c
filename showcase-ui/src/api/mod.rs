pub mod client;

pub use client::{fetch_employees, get_employees_url};

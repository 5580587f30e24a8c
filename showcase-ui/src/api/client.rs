//! HTTP API Client
//!
//! The portal's single read of the employee collection.

use gloo_net::http::Request;

use showcase::config::DEFAULT_EMPLOYEES_URL;
use showcase::employees::{Employee, FetchError};

const URL_STORAGE_KEY: &str = "showcase_employees_url";

/// Get the endpoint from local storage or use the public placeholder API
pub fn get_employees_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(URL_STORAGE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EMPLOYEES_URL.to_string())
}

/// Fetch all employees
pub async fn fetch_employees(url: &str) -> Result<Vec<Employee>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Vec<Employee>>()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_employees_url_falls_back_to_default() {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .expect("local storage");
        storage.remove_item(URL_STORAGE_KEY).unwrap();
        assert_eq!(get_employees_url(), DEFAULT_EMPLOYEES_URL);

        storage.set_item(URL_STORAGE_KEY, "   ").unwrap();
        assert_eq!(get_employees_url(), DEFAULT_EMPLOYEES_URL);

        storage
            .set_item(URL_STORAGE_KEY, "http://127.0.0.1:8090/users")
            .unwrap();
        assert_eq!(get_employees_url(), "http://127.0.0.1:8090/users");
        storage.remove_item(URL_STORAGE_KEY).unwrap();
    }
}

//! Mock Placeholder API
//!
//! Offline stand-in for the public placeholder endpoint, built with Axum.
//!
//! # Endpoints
//!
//! - `GET /users` - Fixed employee collection
//! - `GET /users/:id` - One employee
//! - `GET /health/live` - Liveness probe

use axum::{
    extract::Path,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::MockApiConfig;
use crate::employees::Employee;

/// The collection served by `GET /users`
pub fn fixtures() -> Vec<Employee> {
    let rows = [
        (1, "Leanne Graham", "Bret", "Sincere@april.biz", "1-770-736-8031 x56442", "hildegard.org"),
        (2, "Ervin Howell", "Antonette", "Shanna@melissa.tv", "010-692-6593 x09125", "anastasia.net"),
        (3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net", "1-463-123-4447", "ramiro.info"),
        (4, "Patricia Lebsack", "Karianne", "Julianne.OConner@kory.org", "493-170-9623 x156", "kale.biz"),
        (5, "Chelsey Dietrich", "Kamren", "Lucio_Hettinger@annie.ca", "(254)954-1289", "demarco.info"),
    ];

    rows.into_iter()
        .map(|(id, name, username, email, phone, website)| Employee {
            id,
            name: name.to_string(),
            email: email.to_string(),
            username: Some(username.to_string()),
            phone: Some(phone.to_string()),
            website: Some(website.to_string()),
        })
        .collect()
}

/// GET /users
async fn list_users() -> Json<Vec<Employee>> {
    Json(fixtures())
}

/// GET /users/:id
async fn get_user(Path(id): Path<u32>) -> Result<Json<Employee>, StatusCode> {
    fixtures()
        .into_iter()
        .find(|e| e.id == id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// GET /health/live
async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// Build the mock router
pub fn build_router() -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
        .route("/health/live", get(liveness))
        .layer(TraceLayer::new_for_http())
        // The web UI is served from another origin during development.
        .layer(CorsLayer::permissive())
}

/// Start the mock server and run until Ctrl+C
pub async fn serve(config: &MockApiConfig) -> std::io::Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Mock placeholder API listening on http://{}", addr);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Mock API shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

use askama::Template;
use axum::response::IntoResponse;

/// Phone number entry form, optionally annotated with the previous failure.
#[derive(Template)]
#[template(path = "start.html")]
pub struct StartTemplate {
    pub error: Option<String>,
}

impl StartTemplate {
    pub fn with_error(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
        }
    }
}

pub async fn index() -> impl IntoResponse {
    StartTemplate { error: None }
}

pub async fn health_check() -> &'static str {
    "OK"
}

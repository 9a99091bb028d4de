pub mod health;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::enhancement::handlers::handle_enhance;
use crate::errors::{not_found, panic_message, AppError};
use crate::resumes::handlers::handle_save_resume;
use crate::state::AppState;

fn enhance_panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Enhancement(panic_message(payload)).into_response()
}

fn save_panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    AppError::Save(panic_message(payload)).into_response()
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/ai-enhance",
            post(handle_enhance).layer(CatchPanicLayer::custom(enhance_panic_response)),
        )
        .route(
            "/save-resume",
            post(handle_save_resume).layer(CatchPanicLayer::custom(save_panic_response)),
        )
        .fallback(not_found)
        .with_state(state)
}

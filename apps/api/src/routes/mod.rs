pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai_handlers;
use crate::resumes::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/test", get(health::test_handler))
        // Resume CRUD
        .route("/api/resumes", post(resume_handlers::handle_create))
        .route(
            "/api/resumes/user/:user_id",
            get(resume_handlers::handle_list),
        )
        .route(
            "/api/resumes/stats/:user_id",
            get(resume_handlers::handle_stats),
        )
        .route(
            "/api/resumes/:id",
            get(resume_handlers::handle_get)
                .put(resume_handlers::handle_update)
                .delete(resume_handlers::handle_delete),
        )
        .route(
            "/api/resumes/:id/builder",
            get(resume_handlers::handle_get_builder).put(resume_handlers::handle_update_builder),
        )
        // AI analysis
        .route("/api/ai/analyze", post(ai_handlers::handle_analyze))
        .route("/api/ai/improve", post(ai_handlers::handle_improve))
        .with_state(state)
}

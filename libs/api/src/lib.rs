use std::sync::Arc;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, patch, post},
    Router,
};
use repository::Repository;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};

mod auth;
pub mod posting;
mod response;
mod status;
pub mod user;

pub use auth::Claims;

#[derive(Debug)]
pub enum ApiError {
    AuthError(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    ClientError(String),
    ServerError(String),
}

#[derive(Clone, Debug)]
pub struct ApiState {
    repo: Repository,
    config: Config,
    jwt_secret: String,
}

impl ApiState {
    pub fn new(repo: Repository, config: Config, jwt_secret: String) -> Self {
        Self {
            repo,
            config,
            jwt_secret,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub cors: Cors,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Cors {
    pub allow_origins: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Pagination {
    pub default_limit: u64,
    pub max_limit: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        posting::create_posting,
        posting::get_postings,
        posting::get_titles,
        posting::get_posting,
        posting::update_posting,
        posting::delete_posting,
        posting::update_thumbnail,
        posting::toggle_like,
        posting::report_posting,
        user::get_me,
        user::update_me,
        user::get_my_postings,
        user::check_duplication,
    ),
    components(schemas(
        posting::request::CreatePostingRequest,
        posting::request::UpdatePostingRequest,
        posting::request::UpdateThumbnailRequest,
        posting::response::PostingResp,
        posting::response::PostingSummaryResp,
        posting::response::GetPostingsResp,
        posting::response::GetTitlesResp,
        posting::response::ToggleLikeResp,
        posting::response::WriterResp,
        user::request::UpdateUserRequest,
        user::response::UserResp,
        user::response::GetMyPostingsResp,
        user::response::MyPostingResp,
    )),
    tags(
        (name = "postings", description = "Trip plan postings"),
        (name = "users", description = "Traveler profiles")
    )
)]
struct ApiDoc;

pub async fn serve(
    repository: Repository,
    config_name: &str,
    jwt_secret: String,
) -> anyhow::Result<Router> {
    info!(task = "start api serving", config = config_name);

    let config = util::load_config::<Config>(config_name)?;
    let state = ApiState::new(repository, config, jwt_secret);

    Ok(router(state))
}

pub fn router(state: ApiState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors
        .allow_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!(task = "parse cors origin", origin = %origin);
                None
            }
        })
        .collect();

    let state = Arc::new(state);

    // postings
    let posting_router = Router::new()
        .route(
            "/",
            get(posting::get_postings).post(posting::create_posting),
        )
        .route("/titles", get(posting::get_titles))
        .route(
            "/:id",
            get(posting::get_posting)
                .patch(posting::update_posting)
                .delete(posting::delete_posting),
        )
        .route("/:id/thumbnail", patch(posting::update_thumbnail))
        .route("/:id/like", post(posting::toggle_like))
        .route("/:id/report", post(posting::report_posting))
        .fallback(status::not_found)
        .with_state(state.clone());

    // users
    let user_router = Router::new()
        .route("/me", get(user::get_me).patch(user::update_me))
        .route("/me/postings", get(user::get_my_postings))
        .route("/duplicate", get(user::check_duplication))
        .fallback(status::not_found)
        .with_state(state.clone());

    Router::new()
        .nest("/postings", posting_router)
        .nest("/users", user_router)
        .route_layer(middleware::from_fn_with_state(state, auth::auth))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(
            RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi())
                .path("/rapidoc"),
        )
        .route("/healthz", get(status::healthz))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                ])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE]),
        )
        .fallback(status::not_found)
}

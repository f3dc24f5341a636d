use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{Query, State},
    Extension, Json,
};
use entity::prelude::*;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::Claims,
    response::{ApiResponse, IntoApiResponse},
    ApiState,
};

use self::{
    request::{CheckDuplicationParam, UpdateUserRequest},
    response::{GetMyPostingsResp, MyPostingResp, UserResp},
};

pub mod request;
pub mod response;

const NAME_PREFIX: &str = "여행자";

/// Returns the caller's user, inserting one with a generated name on first
/// access.
pub(crate) async fn find_or_create(
    state: &ApiState,
    user_id: &str,
) -> anyhow::Result<UserEntity> {
    if let Some(user) = state.repo.user.find_by_id(user_id).await? {
        return Ok(user);
    }

    let id = Uuid::new_v4().simple().to_string();
    let user = state
        .repo
        .user
        .save(UserEntity {
            id: user_id.to_string(),
            name: format!("{}{}", NAME_PREFIX, &id[..8]),
            ..Default::default()
        })
        .await?;

    info!(task = "create user", id = %user.id, name = %user.name);

    Ok(user)
}

/// Get my profile
#[utoipa::path(
    get,
    path = "/users/me",
    tag = "users",
    responses(
        (status = 200, description = "Get my profile successfully", body = UserResp)
    )
)]
pub async fn get_me(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
) -> ApiResponse<Json<UserResp>> {
    let user = find_or_create(&state, &claims.sub)
        .await
        .into_response("500-008")?;

    Ok(Json(UserResp::from(user)))
}

/// Update my name and avatar
#[utoipa::path(
    patch,
    path = "/users/me",
    tag = "users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Update my profile successfully", body = UserResp),
        (status = 400, description = "Name length is out of range"),
        (status = 409, description = "Name is already taken")
    )
)]
pub async fn update_me(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Json(body): Json<UpdateUserRequest>,
) -> ApiResponse<Json<UserResp>> {
    let name = body.name.trim().to_string();
    if !UpdateUserRequest::is_valid_name(&name) {
        return Err(anyhow!("invalid name length: {}", name))
            .into_response("400-003");
    }

    let mut user = find_or_create(&state, &claims.sub)
        .await
        .into_response("500-009")?;

    if user.name != name {
        let taken = state
            .repo
            .user
            .exists_name(&name)
            .await
            .into_response("500-009")?;
        if taken {
            return Err(anyhow!("name is already taken: {}", name))
                .into_response("409-001");
        }
    }

    user.name = name;
    if body.avatar.is_some() {
        user.avatar = body.avatar;
    }

    let user = state
        .repo
        .user
        .save(user)
        .await
        .into_response("500-009")?;

    info!(task = "update user", id = %user.id, name = %user.name);

    Ok(Json(UserResp::from(user)))
}

/// List my postings
#[utoipa::path(
    get,
    path = "/users/me/postings",
    tag = "users",
    responses(
        (status = 200, description = "List my postings successfully", body = GetMyPostingsResp)
    )
)]
pub async fn get_my_postings(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
) -> ApiResponse<Json<GetMyPostingsResp>> {
    let postings = state
        .repo
        .posting
        .find_all_by_writer(&claims.sub)
        .await
        .into_response("500-011")?;

    Ok(Json(GetMyPostingsResp {
        postings: postings.into_iter().map(MyPostingResp::from).collect(),
    }))
}

/// Check whether a name is taken
#[utoipa::path(
    get,
    path = "/users/duplicate",
    tag = "users",
    responses(
        (status = 200, description = "true when the name is taken", body = bool)
    ),
    params(
        CheckDuplicationParam
    )
)]
pub async fn check_duplication(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<CheckDuplicationParam>,
) -> ApiResponse<Json<bool>> {
    let taken = state
        .repo
        .user
        .exists_name(params.name.trim())
        .await
        .into_response("500-010")?;

    Ok(Json(taken))
}

use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use axum_extra::extract::Query as MultiQuery;
use chrono::Utc;
use entity::{posting::PostingPatch, prelude::*};
use tracing::info;
use uuid::Uuid;

pub mod request;
pub mod response;

use crate::{
    auth::Claims,
    response::{ApiResponse, IntoApiResponse},
    user::find_or_create,
    ApiState,
};

use self::{
    request::{
        CreatePostingRequest, GetPostingsParam, GetTitlesParam,
        UpdatePostingRequest, UpdateThumbnailRequest,
    },
    response::{
        GetPostingsResp, GetTitlesResp, PostingResp, PostingSummaryResp,
        ToggleLikeResp,
    },
};

/// Create a posting
#[utoipa::path(
    post,
    path = "/postings",
    tag = "postings",
    request_body = CreatePostingRequest,
    responses(
        (status = 201, description = "Create a posting successfully", body = PostingResp),
        (status = 400, description = "End date is earlier than start date")
    )
)]
pub async fn create_posting(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Json(body): Json<CreatePostingRequest>,
) -> ApiResponse<(StatusCode, Json<PostingResp>)> {
    let posting = PostingEntity::new(
        Uuid::new_v4().to_string(),
        claims.sub.clone(),
        Utc::now().naive_utc(),
        body.into(),
    );

    if !posting.has_valid_range() {
        return Err(anyhow!(
            "end date {} is earlier than start date {}",
            posting.end_date,
            posting.start_date
        ))
        .into_response("400-001");
    }

    let writer = find_or_create(&state, &claims.sub)
        .await
        .into_response("500-001")?;

    let posting = state
        .repo
        .posting
        .save(posting)
        .await
        .into_response("500-001")?;

    info!(task = "create posting", id = %posting.id, writer = %posting.writer);

    Ok((
        StatusCode::CREATED,
        Json(PostingResp::from(PostingDetailEntity {
            posting,
            writer: Some(writer),
            liked_count: 0,
        })),
    ))
}

/// List postings
#[utoipa::path(
    get,
    path = "/postings",
    tag = "postings",
    responses(
        (status = 200, description = "List postings successfully", body = GetPostingsResp),
        (status = 400, description = "Unknown filter label")
    ),
    params(
        GetPostingsParam
    )
)]
pub async fn get_postings(
    State(state): State<Arc<ApiState>>,
    MultiQuery(params): MultiQuery<GetPostingsParam>,
) -> ApiResponse<Json<GetPostingsResp>> {
    let filter = params
        .into_filter(&state.config.pagination)
        .into_response("400-002")?;

    let postings = state
        .repo
        .posting
        .find_all(&filter)
        .await
        .into_response("500-003")?;

    Ok(Json(GetPostingsResp {
        postings: postings
            .into_iter()
            .map(PostingSummaryResp::from)
            .collect(),
    }))
}

/// Titles starting with a keyword
#[utoipa::path(
    get,
    path = "/postings/titles",
    tag = "postings",
    responses(
        (status = 200, description = "List titles successfully", body = GetTitlesResp)
    ),
    params(
        GetTitlesParam
    )
)]
pub async fn get_titles(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<GetTitlesParam>,
) -> ApiResponse<Json<GetTitlesResp>> {
    let titles = state
        .repo
        .posting
        .find_all_by_title(&params.keyword)
        .await
        .into_response("500-004")?;

    Ok(Json(GetTitlesResp { titles }))
}

/// Get a posting
#[utoipa::path(
    get,
    path = "/postings/{id}",
    tag = "postings",
    responses(
        (status = 200, description = "Get a posting successfully", body = PostingResp),
        (status = 404, description = "Posting was not found")
    ),
    params(
        ("id", description = "posting id"),
    )
)]
pub async fn get_posting(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResponse<Json<PostingResp>> {
    let posting = state
        .repo
        .posting
        .find_one(&id)
        .await
        .into_response("500-002")?
        .into_response("404-001")?;

    let liked = state
        .repo
        .liked
        .find(&id, &claims.sub)
        .await
        .into_response("500-002")?;

    let reported = state
        .repo
        .report
        .find(&id, &claims.sub)
        .await
        .into_response("500-002")?;

    let report_count = state
        .repo
        .report
        .count(&id)
        .await
        .into_response("500-002")?;

    let mut response = PostingResp::from(posting);
    response.is_liked = liked.is_some_and(|x| !x.is_deleted);
    response.is_reported = reported.is_some();
    response.report_count = report_count;

    Ok(Json(response))
}

/// Update a posting
#[utoipa::path(
    patch,
    path = "/postings/{id}",
    tag = "postings",
    request_body = UpdatePostingRequest,
    responses(
        (status = 200, description = "Update a posting successfully", body = PostingResp),
        (status = 400, description = "End date is earlier than start date"),
        (status = 403, description = "Caller is not the writer"),
        (status = 404, description = "Posting was not found")
    ),
    params(
        ("id", description = "posting id"),
    )
)]
pub async fn update_posting(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdatePostingRequest>,
) -> ApiResponse<Json<PostingResp>> {
    let mut posting = find_written_posting(&state, &id, &claims, "403-002")
        .await?;

    posting.apply(PostingPatch::from(body));

    if !posting.has_valid_range() {
        return Err(anyhow!(
            "end date {} is earlier than start date {}",
            posting.end_date,
            posting.start_date
        ))
        .into_response("400-001");
    }

    state
        .repo
        .posting
        .update(posting)
        .await
        .into_response("500-005")?;

    let posting = state
        .repo
        .posting
        .find_one(&id)
        .await
        .into_response("500-005")?
        .into_response("404-001")?;

    info!(task = "update posting", id = %id);

    Ok(Json(PostingResp::from(posting)))
}

/// Delete a posting
#[utoipa::path(
    delete,
    path = "/postings/{id}",
    tag = "postings",
    responses(
        (status = 204, description = "Delete a posting successfully"),
        (status = 403, description = "Caller is not the writer"),
        (status = 404, description = "Posting was not found")
    ),
    params(
        ("id", description = "posting id"),
    )
)]
pub async fn delete_posting(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResponse<StatusCode> {
    find_written_posting(&state, &id, &claims, "403-001").await?;

    state
        .repo
        .posting
        .delete(&id)
        .await
        .into_response("500-006")?;

    info!(task = "delete posting", id = %id);

    Ok(StatusCode::NO_CONTENT)
}

/// Replace a posting's thumbnail
#[utoipa::path(
    patch,
    path = "/postings/{id}/thumbnail",
    tag = "postings",
    request_body = UpdateThumbnailRequest,
    responses(
        (status = 204, description = "Update the thumbnail successfully"),
        (status = 403, description = "Caller is not the writer"),
        (status = 404, description = "Posting was not found")
    ),
    params(
        ("id", description = "posting id"),
    )
)]
pub async fn update_thumbnail(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateThumbnailRequest>,
) -> ApiResponse<StatusCode> {
    find_written_posting(&state, &id, &claims, "403-002").await?;

    state
        .repo
        .posting
        .update_thumbnail(&id, &body.thumbnail)
        .await
        .into_response("500-005")?;

    Ok(StatusCode::NO_CONTENT)
}

/// Like or unlike a posting
#[utoipa::path(
    post,
    path = "/postings/{id}/like",
    tag = "postings",
    responses(
        (status = 200, description = "Toggle the like successfully", body = ToggleLikeResp),
        (status = 404, description = "Posting was not found")
    ),
    params(
        ("id", description = "posting id"),
    )
)]
pub async fn toggle_like(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResponse<Json<ToggleLikeResp>> {
    state
        .repo
        .posting
        .find_by_id(&id)
        .await
        .into_response("500-007")?
        .into_response("404-001")?;

    find_or_create(&state, &claims.sub)
        .await
        .into_response("500-007")?;

    let liked = state
        .repo
        .liked
        .toggle(&id, &claims.sub)
        .await
        .into_response("500-007")?;

    Ok(Json(ToggleLikeResp { liked }))
}

/// Report a posting
#[utoipa::path(
    post,
    path = "/postings/{id}/report",
    tag = "postings",
    responses(
        (status = 204, description = "The caller has reported the posting"),
        (status = 404, description = "Posting was not found")
    ),
    params(
        ("id", description = "posting id"),
    )
)]
pub async fn report_posting(
    Extension(claims): Extension<Claims>,
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResponse<StatusCode> {
    state
        .repo
        .posting
        .find_by_id(&id)
        .await
        .into_response("500-012")?
        .into_response("404-001")?;

    find_or_create(&state, &claims.sub)
        .await
        .into_response("500-012")?;

    let reported = state
        .repo
        .report
        .save(&id, &claims.sub)
        .await
        .into_response("500-012")?;

    if reported {
        info!(task = "report posting", id = %id, reporter = %claims.sub);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Loads a posting the caller wrote. Missing is 404, someone else's is
/// `forbidden_code`.
async fn find_written_posting(
    state: &ApiState,
    id: &str,
    claims: &Claims,
    forbidden_code: &str,
) -> ApiResponse<PostingEntity> {
    let posting = state
        .repo
        .posting
        .find_by_id(id)
        .await
        .into_response("500-002")?
        .into_response("404-001")?;

    if !posting.is_written_by(&claims.sub) {
        return Err(anyhow!(
            "{} is not the writer of posting {}",
            claims.sub,
            id
        ))
        .into_response(forbidden_code);
    }

    Ok(posting)
}

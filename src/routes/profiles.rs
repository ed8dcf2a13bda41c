use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::profiles::{CreateProfileRequest, UpdateProfileRequest},
    error::{AppResult, ErrorBody},
    extract::{AppJson, AppPath},
    models::Profile,
    response::{ApiResponse, MessageResponse},
    services::profile_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route(
            "/{id}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}

#[utoipa::path(
    get,
    path = "/profiles",
    responses(
        (status = 200, description = "All profiles", body = Vec<Profile>),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Profiles"
)]
pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    let profiles = profile_service::list_profiles(&state).await?;
    Ok(Json(profiles))
}

#[utoipa::path(
    get,
    path = "/profiles/{id}",
    params(
        ("id" = i32, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile", body = Profile),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Profile not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Profiles"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<Profile>> {
    let profile = profile_service::get_profile(&state, id).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    post,
    path = "/profiles",
    request_body = CreateProfileRequest,
    responses(
        (status = 200, description = "Created profile", body = Profile),
        (status = 400, description = "Empty bio or invalid avatar URL", body = ErrorBody),
        (status = 409, description = "User missing or already has a profile", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Profiles"
)]
pub async fn create_profile(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateProfileRequest>,
) -> AppResult<Json<Profile>> {
    let profile = profile_service::create_profile(&state, payload).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/profiles/{id}",
    params(
        ("id" = i32, Path, description = "Profile ID")
    ),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ApiResponse<Profile>),
        (status = 400, description = "Empty bio or invalid avatar URL", body = ErrorBody),
        (status = 404, description = "Profile not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Profiles"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let resp = profile_service::update_profile(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/profiles/{id}",
    params(
        ("id" = i32, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Profile not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Profiles"
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    let resp = profile_service::delete_profile(&state, id).await?;
    Ok(Json(resp))
}

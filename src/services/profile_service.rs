use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use validator::Validate;

use crate::{
    dto::profiles::{CreateProfileRequest, UpdateProfileRequest},
    entity::profiles::{ActiveModel, Column, Entity as Profiles, Model as ProfileModel},
    error::{AppError, AppResult},
    models::Profile,
    response::{ApiResponse, MessageResponse},
    state::AppState,
};

pub async fn list_profiles(state: &AppState) -> AppResult<Vec<Profile>> {
    let profiles = Profiles::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(profile_from_entity)
        .collect();
    Ok(profiles)
}

pub async fn get_profile(state: &AppState, id: i32) -> AppResult<Profile> {
    Profiles::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(profile_from_entity)
        .ok_or(AppError::NotFound)
}

/// A second profile for the same user, or an unknown user, is a constraint violation.
pub async fn create_profile(
    state: &AppState,
    payload: CreateProfileRequest,
) -> AppResult<Profile> {
    payload.validate()?;
    let now = Utc::now();
    let active = ActiveModel {
        bio: Set(payload.bio),
        avatar_url: Set(payload.avatar_url),
        user_id: Set(payload.user_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    let profile = active.insert(&state.orm).await?;
    tracing::info!(profile_id = profile.id, user_id = profile.user_id, "profile created");
    Ok(profile_from_entity(profile))
}

pub async fn update_profile(
    state: &AppState,
    id: i32,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<Profile>> {
    payload.validate()?;
    let existing = Profiles::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(bio) = payload.bio {
        active.bio = Set(bio);
    }
    if let Some(avatar_url) = payload.avatar_url {
        active.avatar_url = Set(avatar_url);
    }
    active.updated_at = Set(Utc::now().into());

    let profile = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Profile updated",
        profile_from_entity(profile),
    ))
}

pub async fn delete_profile(state: &AppState, id: i32) -> AppResult<MessageResponse> {
    let result = Profiles::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(profile_id = id, "profile deleted");

    Ok(MessageResponse::new("Profile deleted"))
}

fn profile_from_entity(model: ProfileModel) -> Profile {
    Profile {
        id: model.id,
        bio: model.bio,
        avatar_url: model.avatar_url,
        user_id: model.user_id,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

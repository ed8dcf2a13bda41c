use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use validator::Validate;

use crate::{
    dto::clients::{CreateClientRequest, UpdateClientRequest},
    entity::clients::{ActiveModel, Column, Entity as Clients, Model as ClientModel},
    error::{AppError, AppResult},
    models::Client,
    response::{ApiResponse, MessageResponse},
    state::AppState,
};

pub async fn list_clients(state: &AppState) -> AppResult<Vec<Client>> {
    let clients = Clients::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(client_from_entity)
        .collect();
    Ok(clients)
}

pub async fn get_client(state: &AppState, id: i32) -> AppResult<Client> {
    Clients::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(client_from_entity)
        .ok_or(AppError::NotFound)
}

pub async fn create_client(state: &AppState, payload: CreateClientRequest) -> AppResult<Client> {
    payload.validate()?;
    let now = Utc::now();
    let active = ActiveModel {
        name: Set(payload.name),
        first_name: Set(payload.first_name),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };
    let client = active.insert(&state.orm).await?;
    tracing::info!(client_id = client.id, "client created");
    Ok(client_from_entity(client))
}

pub async fn update_client(
    state: &AppState,
    id: i32,
    payload: UpdateClientRequest,
) -> AppResult<ApiResponse<Client>> {
    payload.validate()?;
    let existing = Clients::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(c) => c,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(first_name) = payload.first_name {
        active.first_name = Set(first_name);
    }
    active.updated_at = Set(Utc::now().into());

    let client = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Client updated",
        client_from_entity(client),
    ))
}

/// Orders placed by the client are removed with it.
pub async fn delete_client(state: &AppState, id: i32) -> AppResult<MessageResponse> {
    let result = Clients::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(client_id = id, "client deleted");

    Ok(MessageResponse::new("Client deleted"))
}

fn client_from_entity(model: ClientModel) -> Client {
    Client {
        id: model.id,
        name: model.name,
        first_name: model.first_name,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}

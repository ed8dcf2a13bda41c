use axum::{
    Json, Router,
    extract::State,
    routing::get,
};

use crate::{
    dto::clients::{CreateClientRequest, UpdateClientRequest},
    error::{AppResult, ErrorBody},
    extract::{AppJson, AppPath},
    models::Client,
    response::{ApiResponse, MessageResponse},
    services::client_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route(
            "/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
}

#[utoipa::path(
    get,
    path = "/clients",
    responses(
        (status = 200, description = "All clients", body = Vec<Client>),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn list_clients(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = client_service::list_clients(&state).await?;
    Ok(Json(clients))
}

#[utoipa::path(
    get,
    path = "/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client", body = Client),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Client not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn get_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<Client>> {
    let client = client_service::get_client(&state, id).await?;
    Ok(Json(client))
}

#[utoipa::path(
    post,
    path = "/clients",
    request_body = CreateClientRequest,
    responses(
        (status = 200, description = "Created client", body = Client),
        (status = 400, description = "Missing name", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn create_client(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateClientRequest>,
) -> AppResult<Json<Client>> {
    let client = client_service::create_client(&state, payload).await?;
    Ok(Json(client))
}

#[utoipa::path(
    put,
    path = "/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Updated client", body = ApiResponse<Client>),
        (status = 400, description = "Empty name", body = ErrorBody),
        (status = 404, description = "Client not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn update_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(payload): AppJson<UpdateClientRequest>,
) -> AppResult<Json<ApiResponse<Client>>> {
    let resp = client_service::update_client(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/clients/{id}",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client and its orders deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "Client not found", body = ErrorBody),
        (status = 500, description = "Internal Server Error", body = ErrorBody),
    ),
    tag = "Clients"
)]
pub async fn delete_client(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> AppResult<Json<MessageResponse>> {
    let resp = client_service::delete_client(&state, id).await?;
    Ok(Json(resp))
}

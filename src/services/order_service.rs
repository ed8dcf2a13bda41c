use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};
use validator::Validate;

use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    entity::orders::{ActiveModel, Column, Entity as Orders, Model as OrderModel},
    error::{AppError, AppResult},
    models::Order,
    response::{ApiResponse, MessageResponse},
    state::AppState,
};

pub async fn list_orders(state: &AppState) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();
    Ok(orders)
}

pub async fn get_order(state: &AppState, id: i32) -> AppResult<Order> {
    Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(order_from_entity)
        .ok_or(AppError::NotFound)
}

/// Unknown client or product ids surface as a foreign key violation.
pub async fn create_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    payload.validate()?;
    let active = ActiveModel {
        client_id: Set(payload.client_id),
        product_id: Set(payload.product_id),
        quantity: Set(payload.quantity),
        status: Set(payload.status.unwrap_or(false)),
        is_returned: Set(payload.is_returned.unwrap_or(false)),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    let order = active.insert(&state.orm).await?;
    tracing::info!(
        order_id = order.id,
        client_id = order.client_id,
        product_id = order.product_id,
        "order created"
    );
    Ok(order_from_entity(order))
}

pub async fn update_order(
    state: &AppState,
    id: i32,
    payload: UpdateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    payload.validate()?;
    let existing = Orders::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.clone().into();
    if let Some(client_id) = payload.client_id {
        active.client_id = Set(client_id);
    }
    if let Some(product_id) = payload.product_id {
        active.product_id = Set(product_id);
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    if let Some(is_returned) = payload.is_returned {
        active.is_returned = Set(is_returned);
    }

    // Orders carry no updated_at, so an empty payload leaves nothing to write.
    if !active.is_changed() {
        return Ok(ApiResponse::success("Order updated", order_from_entity(existing)));
    }

    let order = active.update(&state.orm).await?;

    Ok(ApiResponse::success(
        "Order updated",
        order_from_entity(order),
    ))
}

pub async fn delete_order(state: &AppState, id: i32) -> AppResult<MessageResponse> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    tracing::info!(order_id = id, "order deleted");

    Ok(MessageResponse::new("Order deleted"))
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        client_id: model.client_id,
        product_id: model.product_id,
        quantity: model.quantity,
        status: model.status,
        is_returned: model.is_returned,
        created_at: model.created_at.with_timezone(&Utc),
    }
}

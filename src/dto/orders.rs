use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub client_id: i32,
    pub product_id: i32,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub status: Option<bool>,
    pub is_returned: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    pub client_id: Option<i32>,
    pub product_id: Option<i32>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    pub status: Option<bool>,
    pub is_returned: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        let order = CreateOrderRequest {
            client_id: 1,
            product_id: 1,
            quantity: 0,
            status: None,
            is_returned: None,
        };
        assert!(order.validate().is_err());

        let update = UpdateOrderRequest {
            quantity: Some(3),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}

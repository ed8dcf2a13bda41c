use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        clients::{CreateClientRequest, UpdateClientRequest},
        orders::{CreateOrderRequest, UpdateOrderRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        profiles::{CreateProfileRequest, UpdateProfileRequest},
        users::{CreateUserRequest, UpdateUserRequest},
    },
    error::ErrorBody,
    models::{Client, Order, Product, Profile, User},
    response::{ApiResponse, MessageResponse},
    routes::{clients, health, orders, products, profiles, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::search_users,
        profiles::list_profiles,
        profiles::get_profile,
        profiles::create_profile,
        profiles::update_profile,
        profiles::delete_profile,
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        orders::delete_order
    ),
    components(
        schemas(
            User,
            Profile,
            Client,
            Product,
            Order,
            CreateUserRequest,
            UpdateUserRequest,
            CreateProfileRequest,
            UpdateProfileRequest,
            CreateClientRequest,
            UpdateClientRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreateOrderRequest,
            UpdateOrderRequest,
            ErrorBody,
            MessageResponse,
            ApiResponse<User>,
            ApiResponse<Profile>,
            ApiResponse<Client>,
            ApiResponse<Product>,
            ApiResponse<Order>
        )
    ),
    tags(
        (name = "Health", description = "Process liveness"),
        (name = "Users", description = "User endpoints, including advanced search"),
        (name = "Profiles", description = "One-to-one user profile endpoints"),
        (name = "Clients", description = "Client endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let spec = ApiDoc::openapi();
        let paths: Vec<&str> = spec.paths.paths.keys().map(String::as_str).collect();
        for path in [
            "/health",
            "/users",
            "/users/{id}",
            "/users/searchUsers",
            "/profiles",
            "/profiles/{id}",
            "/clients",
            "/clients/{id}",
            "/products",
            "/products/{id}",
            "/orders",
            "/orders/{id}",
        ] {
            assert!(paths.contains(&path), "{path} missing from OpenAPI document");
        }
    }

    #[test]
    fn storage_backed_operations_document_server_errors() {
        let spec = ApiDoc::openapi();
        for (path, item) in &spec.paths.paths {
            if path == "/health" {
                continue;
            }
            let operations = [&item.get, &item.post, &item.put, &item.delete];
            for operation in operations.into_iter().flatten() {
                assert!(
                    operation.responses.responses.contains_key("500"),
                    "{path} does not document a 500 response"
                );
            }
        }
    }
}

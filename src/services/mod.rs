pub mod client_service;
pub mod order_service;
pub mod product_service;
pub mod profile_service;
pub mod user_service;

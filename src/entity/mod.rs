pub mod clients;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod users;

pub use clients::Entity as Clients;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use profiles::Entity as Profiles;
pub use users::Entity as Users;

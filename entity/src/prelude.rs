pub use super::car::Entity as Car;
pub use super::rental_order::Entity as RentalOrder;
pub use super::user::Entity as User;

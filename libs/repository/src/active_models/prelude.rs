pub use super::liked::Entity as Liked;
pub use super::posting::Entity as Posting;
pub use super::report::Entity as Report;
pub use super::user::Entity as User;

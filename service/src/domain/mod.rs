//! Domain definitions.

pub mod recipe;
pub mod session;
pub mod user;

pub use self::{recipe::Recipe, session::Session, user::User};

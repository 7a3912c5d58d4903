//! The checkout session: one customer's in-progress order, managed as an
//! entity behind the session actor and mutated only through typed actions.

mod actions;
pub mod entity;
pub mod error;
pub mod views;

pub use actions::*;
pub use entity::{CheckoutSession, Stage};
pub use error::*;
pub use views::*;

pub type SessionId = String;

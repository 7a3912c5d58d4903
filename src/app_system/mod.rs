//! System orchestration, startup, and shutdown logic.

pub mod checkout_system;
pub mod tracing;

pub use self::checkout_system::*;
pub use self::tracing::*;

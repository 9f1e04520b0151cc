//! Shared types for the Reef panel
//!
//! Wire payloads, the JSON response envelope, and the client-side
//! validation rules. Everything in this crate is pure: no network, no
//! terminal, so the whole layer is unit-testable in isolation.

pub mod models;
pub mod response;
pub mod validate;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::dish::{DishCreate, DishUpdate, MenuDish};
pub use models::order::{
    OrderDetails, OrderDraft, OrderField, OrderFieldUpdate, OrderItem, OrderSearch, OrderType,
    SearchType,
};
pub use response::{Ack, OrderHit, OrderReceipt, SearchResults};
pub use validate::ValidationError;

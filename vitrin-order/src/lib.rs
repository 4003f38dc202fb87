pub mod models;
pub mod repository;
pub mod settlement;

pub use models::{Customer, Order, OrderItem, OrderStatus};
pub use repository::{CustomerRepository, OrderRepository};
pub use settlement::{ItemRequest, OrderDraft, SettlementCoordinator, SettlementError};

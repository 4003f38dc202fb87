use crate::models::{Customer, Order, OrderStatus};
use async_trait::async_trait;
use uuid::Uuid;
use vitrin_core::StorageError;

/// Repository trait for order access. Orders are stored with their items;
/// `list_orders` filters by the owning customer.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create_order(&self, order: &Order) -> Result<Uuid, StorageError>;

    async fn get_order(&self, id: Uuid) -> Result<Option<Order>, StorageError>;

    async fn update_order(&self, order: &Order) -> Result<(), StorageError>;

    async fn delete_order(&self, id: Uuid) -> Result<(), StorageError>;

    async fn list_orders(&self, customer_id: Uuid) -> Result<Vec<Order>, StorageError>;

    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, StorageError>;
}

/// Repository trait for customer access. Phone numbers are unique, which is
/// what makes the lazy create-or-link lookup safe.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn create_customer(&self, customer: &Customer) -> Result<Uuid, StorageError>;

    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>, StorageError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>, StorageError>;
}

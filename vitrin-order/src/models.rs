use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vitrin_core::ContactInfo;

/// Order status in the lifecycle. Pending is the only non-terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Canceled)
    }
}

/// The single source of truth for a purchase. `total` is always derived from
/// the line items; nothing edits it independently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub contact: ContactInfo,
    pub customer_id: Option<Uuid>,
    pub vendor_id: Option<Uuid>,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    pub total: i64,
    pub date_shipped: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(contact: ContactInfo) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            contact,
            customer_id: None,
            vendor_id: None,
            status: OrderStatus::Pending,
            items: Vec::new(),
            total: 0,
            date_shipped: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a line with its price captured now. The product's live price
    /// is never consulted again for this order.
    pub fn add_item(&mut self, product_id: Uuid, quantity: u32, unit_price: i64) {
        self.items.push(OrderItem::new(self.id, product_id, quantity, unit_price));
        self.total = self.compute_total();
        self.updated_at = Utc::now();
    }

    /// Sum of line totals. Pure and safe to call repeatedly.
    pub fn compute_total(&self) -> i64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Stamp the shipping time on the first delivery only.
    pub fn mark_delivered(&mut self) {
        if self.date_shipped.is_none() {
            self.date_shipped = Some(Utc::now());
        }
        self.status = OrderStatus::Delivered;
        self.updated_at = Utc::now();
    }

    pub fn mark_canceled(&mut self) {
        self.status = OrderStatus::Canceled;
        self.updated_at = Utc::now();
    }
}

/// An individual product line within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    /// Unit price in USD minor units, captured at placement.
    pub unit_price: i64,
    pub created_at: DateTime<Utc>,
}

impl OrderItem {
    pub fn new(order_id: Uuid, product_id: Uuid, quantity: u32, unit_price: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_id,
            quantity,
            unit_price,
            created_at: Utc::now(),
        }
    }

    pub fn line_total(&self) -> i64 {
        self.quantity as i64 * self.unit_price
    }
}

/// Customer record derived from an order's contact snapshot the first time
/// that person settles an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub postal_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn from_contact(contact: &ContactInfo) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            full_name: contact.full_name.clone(),
            phone: contact.phone.clone(),
            city: contact.city.clone(),
            address: contact.address.clone(),
            postal_code: contact.postal_code.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

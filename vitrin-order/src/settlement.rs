use crate::models::{Customer, Order, OrderStatus};
use crate::repository::{CustomerRepository, OrderRepository};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;
use vitrin_catalog::service::CatalogError;
use vitrin_catalog::{CatalogService, Product, ProductRepository, StockError};
use vitrin_core::{ContactInfo, Redacted, StorageError, ValidationError};
use vitrin_ledger::{LedgerError, LedgerService, Vendor};

/// Flat referral commission applied once at placement.
pub const DEFAULT_COMMISSION_PERCENT: i64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum SettlementError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Stock(#[from] StockError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("quantity must be positive for product {0}")]
    InvalidQuantity(Uuid),

    #[error("order has no items")]
    EmptyOrder,

    #[error("order not found: {0}")]
    OrderNotFound(Uuid),

    #[error("invalid state transition from {from:?} to {to:?}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for SettlementError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err)
    }
}

impl From<CatalogError> for SettlementError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Stock(e) => Self::Stock(e),
            CatalogError::Storage(e) => Self::Storage(e),
        }
    }
}

/// Customer-facing inputs for a new order.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub contact: ContactInfo,
}

/// One requested line: which product and how many. The unit price is not an
/// input; it is captured from the catalog at placement time.
#[derive(Debug, Clone, Copy)]
pub struct ItemRequest {
    pub product_id: Uuid,
    pub quantity: u32,
}

/// Orchestrates order settlement: stock reservation, total computation,
/// vendor commission, lazy customer creation, and the Pending → Delivered /
/// Canceled state machine. All mutations for one order go through here, so
/// there are no hidden save-triggers-signal chains.
pub struct SettlementCoordinator {
    catalog: CatalogService,
    products: Arc<dyn ProductRepository>,
    ledger: LedgerService,
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
    commission_percent: i64,
}

impl SettlementCoordinator {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        ledger: LedgerService,
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            catalog: CatalogService::new(products.clone()),
            products,
            ledger,
            orders,
            customers,
            commission_percent: DEFAULT_COMMISSION_PERCENT,
        }
    }

    pub fn with_commission_percent(mut self, percent: i64) -> Self {
        self.commission_percent = percent;
        self
    }

    /// Place an order as one all-or-nothing unit of work.
    ///
    /// Failure order matters: contact validation, then vendor resolution,
    /// then a stock check across every line, all before the first write.
    /// A provided-but-unknown referral code is a hard error, not silently
    /// ignored.
    pub async fn place(
        &self,
        draft: OrderDraft,
        items: &[ItemRequest],
        referral_code: Option<&str>,
    ) -> Result<Order, SettlementError> {
        draft.contact.validate()?;
        if items.is_empty() {
            return Err(SettlementError::EmptyOrder);
        }
        for item in items {
            if item.quantity == 0 {
                return Err(SettlementError::InvalidQuantity(item.product_id));
            }
        }

        let vendor = match referral_code {
            Some(code) => Some(self.ledger.resolve_by_code(code).await?),
            None => None,
        };

        let products = self.check_stock(items).await?;
        self.reserve_all(items).await?;

        let order = match self.settle(draft, vendor.as_ref(), items, &products).await {
            Ok(order) => order,
            Err(err) => {
                // A failed placement must leave no net stock change.
                self.release_reserved(items).await;
                return Err(err);
            }
        };

        tracing::info!(
            order = %order.id,
            total = order.total,
            lines = order.items.len(),
            vendor = ?order.vendor_id,
            "order placed"
        );
        Ok(order)
    }

    /// Pending → Delivered. Stamps `date_shipped` on the first transition
    /// only; profit was already credited at placement, so delivery has no
    /// stock or ledger side effects. Re-delivery is a no-op.
    pub async fn deliver(&self, order_id: Uuid) -> Result<Order, SettlementError> {
        let mut order = self.fetch(order_id).await?;
        match order.status {
            OrderStatus::Delivered => Ok(order),
            OrderStatus::Canceled => Err(SettlementError::InvalidTransition {
                from: order.status,
                to: OrderStatus::Delivered,
            }),
            OrderStatus::Pending => {
                order.mark_delivered();
                self.orders.update_order(&order).await?;
                tracing::info!(order = %order.id, "order delivered");
                Ok(order)
            }
        }
    }

    /// Pending → Canceled. Restores every line's quantity to its product
    /// exactly once; cancelling an already-canceled order must not release
    /// stock a second time.
    pub async fn cancel(&self, order_id: Uuid) -> Result<Order, SettlementError> {
        let mut order = self.fetch(order_id).await?;
        match order.status {
            OrderStatus::Canceled => Ok(order),
            OrderStatus::Delivered => Err(SettlementError::InvalidTransition {
                from: order.status,
                to: OrderStatus::Canceled,
            }),
            OrderStatus::Pending => {
                for item in &order.items {
                    self.catalog
                        .release_stock(item.product_id, item.quantity)
                        .await?;
                }
                order.mark_canceled();
                self.orders.update_order(&order).await?;
                tracing::info!(order = %order.id, "order canceled, stock restored");
                Ok(order)
            }
        }
    }

    /// Persist phase of placement: build the order with captured prices,
    /// link the customer, store it, then credit the referral commission.
    /// Runs only once every reservation succeeded; the caller releases
    /// those reservations if anything in here fails.
    async fn settle(
        &self,
        draft: OrderDraft,
        vendor: Option<&Vendor>,
        items: &[ItemRequest],
        products: &HashMap<Uuid, Product>,
    ) -> Result<Order, SettlementError> {
        let mut order = Order::new(draft.contact);
        order.vendor_id = vendor.map(|v| v.id);
        for item in items {
            let product = &products[&item.product_id];
            order.add_item(item.product_id, item.quantity, product.effective_price());
        }
        self.link_customer(&mut order).await?;
        self.orders.create_order(&order).await?;

        if let Some(vendor) = vendor {
            let commission = order.total * self.commission_percent / 100;
            if commission > 0 {
                if let Err(err) = self.ledger.credit(vendor.id, commission).await {
                    // The order is already stored; take it back out so the
                    // failure surfaces with nothing left behind.
                    if let Err(delete_err) = self.orders.delete_order(order.id).await {
                        tracing::error!(
                            order = %order.id,
                            error = %delete_err,
                            "failed to remove order while unwinding placement"
                        );
                    }
                    return Err(err.into());
                }
            }
        }
        Ok(order)
    }

    async fn fetch(&self, order_id: Uuid) -> Result<Order, SettlementError> {
        self.orders
            .get_order(order_id)
            .await?
            .ok_or(SettlementError::OrderNotFound(order_id))
    }

    /// Read phase of placement: fetch every product once and verify the
    /// aggregated requested quantity against current stock, so a shortfall
    /// on the last line is discovered before the first reservation.
    async fn check_stock(
        &self,
        items: &[ItemRequest],
    ) -> Result<HashMap<Uuid, Product>, SettlementError> {
        let mut requested: HashMap<Uuid, u32> = HashMap::new();
        for item in items {
            *requested.entry(item.product_id).or_default() += item.quantity;
        }

        let mut products = HashMap::new();
        for (&product_id, &quantity) in &requested {
            let product = self
                .products
                .get_product(product_id)
                .await?
                .ok_or_else(|| StockError::ProductNotFound(product_id.to_string()))?;
            if quantity > product.stock {
                return Err(StockError::InsufficientStock {
                    requested: quantity,
                    available: product.stock,
                }
                .into());
            }
            products.insert(product_id, product);
        }
        Ok(products)
    }

    /// Write phase: reserve line by line, each persisted immediately. If a
    /// reservation still fails mid-flight the earlier ones are released, so
    /// a failed placement leaves no net stock change.
    async fn reserve_all(&self, items: &[ItemRequest]) -> Result<(), SettlementError> {
        for (index, item) in items.iter().enumerate() {
            if let Err(err) = self.catalog.reserve_stock(item.product_id, item.quantity).await {
                self.release_reserved(&items[..index]).await;
                return Err(err.into());
            }
        }
        Ok(())
    }

    /// Release every line's reservation. Used only while unwinding a failed
    /// placement, which must not abort halfway, so release failures are
    /// logged rather than propagated.
    async fn release_reserved(&self, items: &[ItemRequest]) {
        for item in items {
            if let Err(err) = self
                .catalog
                .release_stock(item.product_id, item.quantity)
                .await
            {
                tracing::error!(
                    product = %item.product_id,
                    error = %err,
                    "failed to release reserved stock while unwinding placement"
                );
            }
        }
    }

    /// Link the order to an existing customer by phone, or create one from
    /// the contact snapshot on first purchase.
    async fn link_customer(&self, order: &mut Order) -> Result<(), SettlementError> {
        if order.customer_id.is_some() {
            return Ok(());
        }

        let customer_id = match self.customers.find_by_phone(&order.contact.phone).await? {
            Some(existing) => existing.id,
            None => {
                let customer = Customer::from_contact(&order.contact);
                let id = self.customers.create_customer(&customer).await?;
                tracing::info!(
                    customer = %id,
                    phone = %Redacted(order.contact.phone.as_str()),
                    "customer created from order"
                );
                id
            }
        };
        order.customer_id = Some(customer_id);
        Ok(())
    }
}

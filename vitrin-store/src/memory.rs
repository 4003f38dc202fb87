use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;
use vitrin_catalog::{Category, CategoryRepository, Product, ProductRepository};
use vitrin_core::StorageError;
use vitrin_ledger::{Vendor, VendorProfile, VendorRepository};
use vitrin_order::{Customer, CustomerRepository, Order, OrderRepository, OrderStatus};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(Uuid),

    #[error("unique constraint violated on {field}: {value}")]
    Duplicate { field: &'static str, value: String },
}

/// In-memory persistence store. Enforces the same unique constraints the
/// production schema declares (customer phone, vendor code, phone and email,
/// product and category slug), which is what the lazy customer lookup and
/// code resolution rely on.
#[derive(Default)]
pub struct MemoryStore {
    products: RwLock<HashMap<Uuid, Product>>,
    categories: RwLock<HashMap<Uuid, Category>>,
    vendors: RwLock<HashMap<Uuid, Vendor>>,
    profiles: RwLock<HashMap<Uuid, VendorProfile>>,
    orders: RwLock<HashMap<Uuid, Order>>,
    customers: RwLock<HashMap<Uuid, Customer>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn create_product(&self, product: &Product) -> Result<Uuid, StorageError> {
        let mut products = self.products.write().unwrap();
        if products.values().any(|p| p.slug == product.slug) {
            return Err(StoreError::Duplicate {
                field: "slug",
                value: product.slug.clone(),
            }
            .into());
        }
        products.insert(product.id, product.clone());
        Ok(product.id)
    }

    async fn get_product(&self, id: Uuid) -> Result<Option<Product>, StorageError> {
        Ok(self.products.read().unwrap().get(&id).cloned())
    }

    async fn list_products(&self, category_id: Option<Uuid>) -> Result<Vec<Product>, StorageError> {
        Ok(self
            .products
            .read()
            .unwrap()
            .values()
            .filter(|p| category_id.map_or(true, |c| p.category_id == c))
            .cloned()
            .collect())
    }

    async fn update_product(&self, product: &Product) -> Result<(), StorageError> {
        let mut products = self.products.write().unwrap();
        if !products.contains_key(&product.id) {
            return Err(StoreError::NotFound(product.id).into());
        }
        products.insert(product.id, product.clone());
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn create_category(&self, category: &Category) -> Result<Uuid, StorageError> {
        let mut categories = self.categories.write().unwrap();
        if categories.values().any(|c| c.slug == category.slug) {
            return Err(StoreError::Duplicate {
                field: "slug",
                value: category.slug.clone(),
            }
            .into());
        }
        categories.insert(category.id, category.clone());
        Ok(category.id)
    }

    async fn get_category(&self, id: Uuid) -> Result<Option<Category>, StorageError> {
        Ok(self.categories.read().unwrap().get(&id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StorageError> {
        Ok(self.categories.read().unwrap().values().cloned().collect())
    }
}

#[async_trait]
impl VendorRepository for MemoryStore {
    async fn create_vendor(&self, vendor: &Vendor) -> Result<Uuid, StorageError> {
        let mut vendors = self.vendors.write().unwrap();
        if vendors.values().any(|v| v.code == vendor.code) {
            return Err(StoreError::Duplicate {
                field: "code",
                value: vendor.code.clone(),
            }
            .into());
        }
        if vendors.values().any(|v| v.phone == vendor.phone) {
            return Err(StoreError::Duplicate {
                field: "phone",
                value: vendor.phone.clone(),
            }
            .into());
        }
        if vendors.values().any(|v| v.email == vendor.email) {
            return Err(StoreError::Duplicate {
                field: "email",
                value: vendor.email.clone(),
            }
            .into());
        }
        vendors.insert(vendor.id, vendor.clone());
        Ok(vendor.id)
    }

    async fn get_vendor(&self, id: Uuid) -> Result<Option<Vendor>, StorageError> {
        Ok(self.vendors.read().unwrap().get(&id).cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Vendor>, StorageError> {
        Ok(self
            .vendors
            .read()
            .unwrap()
            .values()
            .find(|v| v.code == code)
            .cloned())
    }

    async fn update_vendor(&self, vendor: &Vendor) -> Result<(), StorageError> {
        let mut vendors = self.vendors.write().unwrap();
        let existing = vendors
            .get(&vendor.id)
            .ok_or(StoreError::NotFound(vendor.id))?;
        // The referral code is immutable once assigned.
        if existing.code != vendor.code {
            return Err(StoreError::Duplicate {
                field: "code",
                value: vendor.code.clone(),
            }
            .into());
        }
        vendors.insert(vendor.id, vendor.clone());
        Ok(())
    }

    async fn upsert_profile(&self, profile: &VendorProfile) -> Result<(), StorageError> {
        self.profiles
            .write()
            .unwrap()
            .insert(profile.vendor_id, profile.clone());
        Ok(())
    }

    async fn get_profile(&self, vendor_id: Uuid) -> Result<Option<VendorProfile>, StorageError> {
        Ok(self.profiles.read().unwrap().get(&vendor_id).cloned())
    }
}

#[async_trait]
impl OrderRepository for MemoryStore {
    async fn create_order(&self, order: &Order) -> Result<Uuid, StorageError> {
        self.orders.write().unwrap().insert(order.id, order.clone());
        Ok(order.id)
    }

    async fn get_order(&self, id: Uuid) -> Result<Option<Order>, StorageError> {
        Ok(self.orders.read().unwrap().get(&id).cloned())
    }

    async fn update_order(&self, order: &Order) -> Result<(), StorageError> {
        let mut orders = self.orders.write().unwrap();
        if !orders.contains_key(&order.id) {
            return Err(StoreError::NotFound(order.id).into());
        }
        orders.insert(order.id, order.clone());
        Ok(())
    }

    async fn delete_order(&self, id: Uuid) -> Result<(), StorageError> {
        self.orders
            .write()
            .unwrap()
            .remove(&id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(())
    }

    async fn list_orders(&self, customer_id: Uuid) -> Result<Vec<Order>, StorageError> {
        Ok(self
            .orders
            .read()
            .unwrap()
            .values()
            .filter(|o| o.customer_id == Some(customer_id))
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, StorageError> {
        Ok(self
            .orders
            .read()
            .unwrap()
            .values()
            .filter(|o| o.status == status)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn create_customer(&self, customer: &Customer) -> Result<Uuid, StorageError> {
        let mut customers = self.customers.write().unwrap();
        if customers.values().any(|c| c.phone == customer.phone) {
            return Err(StoreError::Duplicate {
                field: "phone",
                value: customer.phone.clone(),
            }
            .into());
        }
        customers.insert(customer.id, customer.clone());
        Ok(customer.id)
    }

    async fn get_customer(&self, id: Uuid) -> Result<Option<Customer>, StorageError> {
        Ok(self.customers.read().unwrap().get(&id).cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<Customer>, StorageError> {
        Ok(self
            .customers
            .read()
            .unwrap()
            .values()
            .find(|c| c.phone == phone)
            .cloned())
    }
}

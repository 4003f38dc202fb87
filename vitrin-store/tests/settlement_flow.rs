use std::sync::Arc;
use vitrin_catalog::{Category, CategoryRepository, Product, ProductRepository};
use vitrin_core::ContactInfo;
use vitrin_ledger::{LedgerService, Vendor, VendorRepository};
use vitrin_order::{
    CustomerRepository, ItemRequest, OrderDraft, OrderRepository, OrderStatus,
    SettlementCoordinator,
};
use vitrin_store::MemoryStore;

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

fn coordinator(store: &Arc<MemoryStore>) -> SettlementCoordinator {
    SettlementCoordinator::new(
        store.clone(),
        LedgerService::new(store.clone()),
        store.clone(),
        store.clone(),
    )
}

fn draft(phone: &str) -> OrderDraft {
    OrderDraft {
        contact: ContactInfo {
            full_name: "Sara Ahmadi".to_string(),
            phone: phone.to_string(),
            city: "Tehran".to_string(),
            address: "12 Enghelab St".to_string(),
            postal_code: "1234567890".to_string(),
        },
    }
}

async fn seed_catalog(store: &MemoryStore) -> (Product, Product) {
    let category = Category::new("Handicrafts");
    store.create_category(&category).await.unwrap();

    let rug = Product::new("Hand-woven Rug", "Wool, 2x3m", 50_000, 10, category.id);
    let saffron = Product::new("Saffron 1g", "Grade one", 500, 5, category.id);
    store.create_product(&rug).await.unwrap();
    store.create_product(&saffron).await.unwrap();
    (rug, saffron)
}

#[tokio::test]
async fn full_settlement_flow_with_referral() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let (rug, saffron) = seed_catalog(&store).await;

    let ledger = LedgerService::new(store.clone() as Arc<dyn VendorRepository>);
    let vendor = Vendor::new(
        "Reza",
        "Karimi",
        "09351112233",
        "reza@example.com",
        "Shiraz",
        "4 Zand Blvd",
    )
    .unwrap();
    ledger.register(&vendor).await.unwrap();

    let coordinator = coordinator(&store);
    let order = coordinator
        .place(
            draft("09123456789"),
            &[
                ItemRequest {
                    product_id: rug.id,
                    quantity: 1,
                },
                ItemRequest {
                    product_id: saffron.id,
                    quantity: 2,
                },
            ],
            Some(&vendor.code),
        )
        .await
        .unwrap();

    // Totals from captured prices, stock persisted per mutation.
    assert_eq!(order.total, 50_000 + 2 * 500);
    let rug_now = store.get_product(rug.id).await.unwrap().unwrap();
    let saffron_now = store.get_product(saffron.id).await.unwrap().unwrap();
    assert_eq!(rug_now.stock, 9);
    assert_eq!(saffron_now.stock, 3);

    // 10% commission lands on the vendor and its projection.
    let credited = store.get_vendor(vendor.id).await.unwrap().unwrap();
    assert_eq!(credited.profit, order.total / 10);
    let profile = store.get_profile(vendor.id).await.unwrap().unwrap();
    assert_eq!(profile.profit, credited.profit);

    // Customer materialized lazily from the order snapshot.
    let customer_id = order.customer_id.expect("customer linked");
    let customer = store.get_customer(customer_id).await.unwrap().unwrap();
    assert_eq!(customer.phone, "09123456789");

    // Deliver, then verify terminal-state protection.
    let delivered = coordinator.deliver(order.id).await.unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert!(delivered.date_shipped.is_some());
    assert!(coordinator.cancel(order.id).await.is_err());
}

#[tokio::test]
async fn cancellation_restores_stock_through_the_store() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let (rug, _) = seed_catalog(&store).await;
    let coordinator = coordinator(&store);

    let order = coordinator
        .place(
            draft("09129876543"),
            &[
                ItemRequest {
                    product_id: rug.id,
                    quantity: 2,
                },
                ItemRequest {
                    product_id: rug.id,
                    quantity: 1,
                },
            ],
            None,
        )
        .await
        .unwrap();

    assert_eq!(store.get_product(rug.id).await.unwrap().unwrap().stock, 7);

    coordinator.cancel(order.id).await.unwrap();
    assert_eq!(store.get_product(rug.id).await.unwrap().unwrap().stock, 10);

    // Idempotent: a second cancel does not restore again.
    coordinator.cancel(order.id).await.unwrap();
    assert_eq!(store.get_product(rug.id).await.unwrap().unwrap().stock, 10);
}

#[tokio::test]
async fn failed_placement_leaves_store_untouched() {
    init_tracing();
    let store = Arc::new(MemoryStore::new());
    let (rug, saffron) = seed_catalog(&store).await;
    let coordinator = coordinator(&store);

    let result = coordinator
        .place(
            draft("09121231234"),
            &[
                ItemRequest {
                    product_id: rug.id,
                    quantity: 1,
                },
                ItemRequest {
                    product_id: saffron.id,
                    quantity: 6, // only 5 in stock
                },
            ],
            None,
        )
        .await;

    assert!(result.is_err());
    assert_eq!(store.get_product(rug.id).await.unwrap().unwrap().stock, 10);
    assert_eq!(store.get_product(saffron.id).await.unwrap().unwrap().stock, 5);
    for status in [
        OrderStatus::Pending,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
    ] {
        assert!(store.list_by_status(status).await.unwrap().is_empty());
    }
}

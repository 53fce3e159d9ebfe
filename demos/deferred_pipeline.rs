//! Deferred pipeline example - chaining an order workflow through futures
//!
//! Run with: cargo run --example deferred_pipeline

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use wellspring::deferred::{self, BoxedDeferred, OutcomeFutureExt};
use wellspring::{DeferredOutcome, Outcome};

// ============================================================================
// Domain
// ============================================================================

#[derive(Debug, Clone)]
struct Product {
    sku: String,
    price_cents: i64,
    stock: u32,
}

#[derive(Debug, Clone)]
struct Order {
    sku: String,
    quantity: u32,
}

#[derive(Debug, Clone)]
struct Invoice {
    sku: String,
    quantity: u32,
    total_cents: i64,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone)]
enum ShopError {
    UnknownSku(String),
    OutOfStock { sku: String, wanted: u32, left: u32 },
    PaymentDeclined(i64),
}

impl std::fmt::Display for ShopError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ShopError::UnknownSku(sku) => write!(f, "Unknown SKU: {}", sku),
            ShopError::OutOfStock { sku, wanted, left } => {
                write!(f, "Only {} of {} left, wanted {}", left, sku, wanted)
            }
            ShopError::PaymentDeclined(amount) => {
                write!(f, "Payment of {} cents declined", amount)
            }
        }
    }
}

impl std::error::Error for ShopError {}

// ============================================================================
// Services (simulated I/O)
// ============================================================================

#[derive(Clone)]
struct Catalog {
    products: Arc<HashMap<String, Product>>,
}

impl Catalog {
    fn seeded() -> Self {
        let products = [("MUG", 1200, 4), ("TEE", 2500, 0), ("POSTER", 90_000, 10)]
            .into_iter()
            .map(|(sku, price_cents, stock)| {
                (
                    sku.to_string(),
                    Product {
                        sku: sku.to_string(),
                        price_cents,
                        stock,
                    },
                )
            })
            .collect();
        Catalog {
            products: Arc::new(products),
        }
    }

    async fn lookup(&self, sku: &str) -> Result<Product, ShopError> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        self.products
            .get(sku)
            .cloned()
            .ok_or_else(|| ShopError::UnknownSku(sku.to_string()))
    }
}

async fn charge_card(total_cents: i64) -> Outcome<i64, ShopError> {
    tokio::time::sleep(Duration::from_millis(5)).await;
    if total_cents > 50_000 {
        Outcome::error(ShopError::PaymentDeclined(total_cents))
    } else {
        Outcome::success(total_cents)
    }
}

// ============================================================================
// Pure Functions
// ============================================================================

fn reserve(order: &Order, product: Product) -> Outcome<Invoice, ShopError> {
    if product.stock < order.quantity {
        return Outcome::error(ShopError::OutOfStock {
            sku: product.sku,
            wanted: order.quantity,
            left: product.stock,
        });
    }
    Outcome::success(Invoice {
        sku: product.sku,
        quantity: order.quantity,
        total_cents: product.price_cents * order.quantity as i64,
    })
}

// ============================================================================
// Workflow
// ============================================================================

fn checkout(
    catalog: Catalog,
    order: Order,
) -> DeferredOutcome<impl std::future::Future<Output = Outcome<Invoice, ShopError>>> {
    let sku = order.sku.clone();
    async move { catalog.lookup(&sku).await }
        .deferred_result()
        .bind(move |product| reserve(&order, product))
        .bind_async(|invoice| {
            charge_card(invoice.total_cents)
                .deferred()
                .map(move |_| invoice)
        })
        .tap_success(|invoice| println!("  charged {} cents", invoice.total_cents))
        .tap_error(|e| println!("  rejected: {}", e))
}

fn quote(catalog: Catalog, sku: &'static str) -> BoxedDeferred<'static, i64, ShopError> {
    match sku {
        "FREE" => deferred::success(0).boxed(),
        _ => deferred::from_async(async move { catalog.lookup(sku).await })
            .map(|p| p.price_cents)
            .boxed(),
    }
}

#[tokio::main]
async fn main() {
    println!("=== Deferred Pipeline Example ===\n");

    let catalog = Catalog::seeded();

    let orders = vec![
        Order {
            sku: "MUG".into(),
            quantity: 2,
        },
        Order {
            sku: "TEE".into(),
            quantity: 1,
        },
        Order {
            sku: "POSTER".into(),
            quantity: 1,
        },
        Order {
            sku: "LAMP".into(),
            quantity: 1,
        },
    ];

    // Test 1: the full checkout chain, awaited once per order
    println!("Checkout:");
    for order in orders {
        println!("- {} x{}", order.sku, order.quantity);
        let summary = checkout(catalog.clone(), order)
            .fold(
                |inv| format!("  ok: {} x{} = {}", inv.sku, inv.quantity, inv.total_cents),
                |e| format!("  failed: {}", e),
            )
            .await;
        println!("{}", summary);
    }

    // Test 2: recover turns every failure into a fallback price
    println!("\nQuotes with fallback:");
    for sku in ["MUG", "FREE", "LAMP"] {
        let price = quote(catalog.clone(), sku)
            .recover(|_| -1)
            .resolve_success_payload()
            .await;
        println!("- {}: {}", sku, price);
    }

    // Test 3: interop with `?`
    println!("\nWith the question mark operator:");
    match total_for(catalog.clone(), &["MUG", "POSTER"]).await {
        Ok(total) => println!("  total: {}", total),
        Err(e) => println!("  error: {}", e),
    }
    match total_for(catalog, &["MUG", "LAMP"]).await {
        Ok(total) => println!("  total: {}", total),
        Err(e) => println!("  error: {}", e),
    }

    // Test 4: panics are only captured when asked to
    println!("\nCaptured panic:");
    let outcome = deferred::from_throwing(|| {
        let prices: Vec<i64> = Vec::new();
        prices[0]
    })
    .map_error(|fault| fault.message().unwrap_or("<opaque>").to_string())
    .await;
    println!("  {:?}", outcome);
}

async fn total_for(
    catalog: Catalog,
    skus: &[&'static str],
) -> Result<i64, Box<dyn std::error::Error>> {
    let mut total = 0;
    for &sku in skus {
        total += quote(catalog.clone(), sku).unwrap_or_throw().await?;
    }
    Ok(total)
}

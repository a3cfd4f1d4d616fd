use anyhow::Result;
use grocery_store::{GroceryStore, Product, StoreResult};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    run_demo();

    Ok(())
}

/// Save, mutate, restore. Failures are logged and the demo carries on.
fn run_demo() {
    println!("🛒 Grocery Store v{}", grocery_store::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let apple = Product::new("Apple", 0.5, 100);
    let bread = Product::new("Bread", 2.0, 50);
    let banana = Product::new("Banana", 1.5, 25);

    let mut store = GroceryStore::new("My Grocery Store");
    store.add_product(apple.clone());
    store.add_product(bread.clone());
    store.add_product(banana);

    println!("\n📦 Before saving state: {}", store);

    log_failure("save", store.save());

    store.remove_product(&apple);
    store.remove_product(&bread);

    println!("\n🗑️  After removing products: {}", store);

    log_failure("restore", store.restore());

    println!("\n♻️  After restoring state: {}", store);
}

fn log_failure(operation: &str, result: StoreResult<usize>) {
    if let Err(err) = result {
        error!(operation, error = %err, "store operation failed");
    }
}

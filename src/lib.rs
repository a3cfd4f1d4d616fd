// Grocery Store - Core Library
// In-memory product inventory with CSV save/restore

pub mod config;
pub mod error;
pub mod product;
pub mod store;

// Re-export commonly used types
pub use config::{StoreConfig, DEFAULT_STATE_FILE};
pub use error::{ParseError, StoreError, StoreResult};
pub use product::Product;
pub use store::GroceryStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

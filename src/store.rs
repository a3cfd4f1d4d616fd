// 🏪 Grocery Store - ordered product collection + CSV persistence
//
// save:    one line per product, in current order, file truncated first
// restore: store cleared FIRST (even if the file can't be read), then
//          refilled line by line; stops at the first bad line and keeps
//          whatever was loaded before it

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::product::Product;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};

// ============================================================================
// GROCERY STORE
// ============================================================================

#[derive(Debug, Clone)]
pub struct GroceryStore {
    /// Informational label
    name: String,

    /// Insertion order (or file order after a restore), duplicates allowed
    products: Vec<Product>,

    config: StoreConfig,
}

impl GroceryStore {
    /// Create an empty store backed by the default `state.csv`
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, StoreConfig::default())
    }

    pub fn with_config(name: impl Into<String>, config: StoreConfig) -> Self {
        GroceryStore {
            name: name.into(),
            products: Vec::new(),
            config,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Append to the end. No duplicate detection.
    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Remove the first product equal by value (name, price and quantity)
    pub fn remove_product(&mut self, product: &Product) -> Option<Product> {
        let index = self.products.iter().position(|p| p == product)?;
        Some(self.products.remove(index))
    }

    /// Remove every product with exactly this name (case-sensitive)
    ///
    /// Returns how many were removed.
    pub fn remove_product_by_name(&mut self, name: &str) -> usize {
        let before = self.products.len();
        self.products.retain(|p| p.name() != name);
        before - self.products.len()
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    /// Save to the configured state file
    pub fn save(&self) -> StoreResult<usize> {
        self.save_state(&self.config.state_path)
    }

    /// Restore from the configured state file
    pub fn restore(&mut self) -> StoreResult<usize> {
        let path = self.config.state_path.clone();
        self.restore_state(&path)
    }

    /// Write every product to `path`, replacing its content
    ///
    /// Names with line breaks are rejected before the file is touched. An I/O
    /// failure midway leaves a partially written file; the store itself is
    /// never modified.
    pub fn save_state(&self, path: &Path) -> StoreResult<usize> {
        if let Some(bad) = self
            .products
            .iter()
            .find(|p| p.name().contains(['\n', '\r']))
        {
            return Err(StoreError::UnencodableName(bad.name().to_string()));
        }

        let file = File::create(path).map_err(|e| StoreError::io(path, e))?;
        let mut writer = BufWriter::new(file);

        for product in &self.products {
            let line = product.to_csv_line().map_err(|source| StoreError::Encode {
                name: product.name().to_string(),
                source,
            })?;
            writeln!(writer, "{}", line).map_err(|e| StoreError::io(path, e))?;
        }

        writer.flush().map_err(|e| StoreError::io(path, e))?;

        info!(
            store = %self.name,
            path = %path.display(),
            count = self.products.len(),
            "saved state"
        );

        Ok(self.products.len())
    }

    /// Replace the contents with the products stored in `path`
    pub fn restore_state(&mut self, path: &Path) -> StoreResult<usize> {
        self.products.clear();

        let file = File::open(path).map_err(|e| StoreError::io(path, e))?;
        let reader = BufReader::new(file);

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| StoreError::io(path, e))?;

            let product = match Product::from_csv_line(&line) {
                Ok(product) => product,
                Err(source) => {
                    warn!(
                        store = %self.name,
                        line = index + 1,
                        loaded = self.products.len(),
                        "restore aborted: {}",
                        source
                    );
                    return Err(StoreError::Parse {
                        line: index + 1,
                        source,
                    });
                }
            };

            debug!(line = index + 1, product = %product, "restored product");
            self.products.push(product);
        }

        info!(
            store = %self.name,
            path = %path.display(),
            count = self.products.len(),
            "restored state"
        );

        Ok(self.products.len())
    }
}

impl fmt::Display for GroceryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroceryStore{{name='{}', products=[", self.name)?;
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", product)?;
        }
        write!(f, "]}}")
    }
}

// ============================================================================
// TESTS
// ============================================================================

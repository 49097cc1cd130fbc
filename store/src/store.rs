use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::warn;

use larder_common::expiry::{classify, days_until};
use larder_common::product::Product;

use crate::backend::StorageBackend;
use crate::error::StoreError;

/// Key under which the product collection is persisted.
pub const PRODUCTS_KEY: &str = "products";
/// Key under which the critical-only view flag is persisted.
pub const CRITICAL_ONLY_KEY: &str = "showCriticalOnly";

/// The persisted product collection plus the critical-only view flag.
///
/// State is read from the backend once at `open` and written through on every
/// mutation. Records keep insertion order; sorting is a view concern and never
/// touches the stored order.
#[derive(Debug)]
pub struct ProductStore<B: StorageBackend> {
    backend: B,
    products: Vec<Product>,
    critical_only: bool,
}

impl<B: StorageBackend> ProductStore<B> {
    /// Load the collection and flag from the backend. A products value that
    /// fails to decode counts as an empty collection; it is logged, never
    /// surfaced.
    pub fn open(backend: B) -> Self {
        let products = match backend.get(PRODUCTS_KEY) {
            None => Vec::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                warn!("discarding undecodable product collection: {err}");
                Vec::new()
            }),
        };
        let critical_only = backend.get(CRITICAL_ONLY_KEY).as_deref() == Some("true");
        Self {
            backend,
            products,
            critical_only,
        }
    }

    /// Records in storage order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn critical_only(&self) -> bool {
        self.critical_only
    }

    /// Validate and append a record, computing its status tier from `today`
    /// once at insertion. Nothing is written when a check fails.
    pub fn add(&mut self, mut product: Product, today: NaiveDate) -> Result<(), StoreError> {
        if product.kind.as_str().trim().is_empty() {
            return Err(StoreError::Validation("a product type is required".into()));
        }
        if product.name.trim().is_empty() {
            return Err(StoreError::Validation("a product name is required".into()));
        }
        if product.quantity == 0 {
            return Err(StoreError::Validation("quantity must be at least 1".into()));
        }
        if self.products.iter().any(|p| p.name == product.name) {
            return Err(StoreError::DuplicateName(product.name));
        }
        product.status = Some(classify(days_until(product.expiry, today)));
        self.products.push(product);
        self.persist_products()
    }

    /// Remove the record at `index` in storage order. An out-of-range index
    /// is a no-op.
    pub fn remove_at(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.products.len() {
            return Ok(());
        }
        self.products.remove(index);
        self.persist_products()
    }

    /// Remove the record carrying exactly this name. Returns whether a record
    /// was removed; an unknown name is a no-op.
    pub fn remove_named(&mut self, name: &str) -> Result<bool, StoreError> {
        let Some(index) = self.products.iter().position(|p| p.name == name) else {
            return Ok(false);
        };
        self.products.remove(index);
        self.persist_products()?;
        Ok(true)
    }

    /// Empty the collection and drop the critical-only flag. Both keys are
    /// removed outright; safe to call repeatedly.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.products.clear();
        self.critical_only = false;
        self.backend.remove(PRODUCTS_KEY)?;
        self.backend.remove(CRITICAL_ONLY_KEY)?;
        Ok(())
    }

    /// Replace the whole collection. Entries whose name repeats an earlier
    /// one are skipped (first occurrence wins), statuses are left as given,
    /// and the critical-only flag is switched on.
    pub fn load_bulk(&mut self, incoming: Vec<Product>) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        self.products = incoming
            .into_iter()
            .filter(|p| seen.insert(p.name.clone()))
            .collect();
        self.persist_products()?;
        self.set_critical_only(true)
    }

    /// Setting true writes the marker value; setting false removes the key.
    pub fn set_critical_only(&mut self, on: bool) -> Result<(), StoreError> {
        self.critical_only = on;
        if on {
            self.backend.set(CRITICAL_ONLY_KEY, "true")?;
        } else {
            self.backend.remove(CRITICAL_ONLY_KEY)?;
        }
        Ok(())
    }

    fn persist_products(&mut self) -> Result<(), StoreError> {
        let data = serde_json::to_string(&self.products).expect("serialization should not fail");
        self.backend.set(PRODUCTS_KEY, &data)?;
        Ok(())
    }
}

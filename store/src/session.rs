use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use larder_common::demo::demo_products;
use larder_common::listing::{build_listing, ListingRow, SortOrder};
use larder_common::product::{Product, ProductKind};

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::store::ProductStore;

/// A submission exactly as an entry form hands it over, before any checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub kind: String,
    pub name: String,
    pub quantity: u32,
    /// Calendar date as typed, `YYYY-MM-DD`.
    pub expiry: String,
    pub details: String,
}

/// One user session over a product store: the surface a view talks to.
///
/// Mutations answer with the listing rebuilt under the caller's current view
/// settings, so the caller renders exactly what it receives. All date math
/// runs against the session date captured at `open`.
#[derive(Debug)]
pub struct Tracker<B: StorageBackend> {
    store: ProductStore<B>,
    today: NaiveDate,
}

impl<B: StorageBackend> Tracker<B> {
    /// Open a session dated today. The sole wall-clock read.
    pub fn open(backend: B) -> Self {
        Self::open_at(backend, Local::now().date_naive())
    }

    /// Open a session pinned to a specific date.
    pub fn open_at(backend: B, today: NaiveDate) -> Self {
        Self {
            store: ProductStore::open(backend),
            today,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Records in storage order.
    pub fn products(&self) -> &[Product] {
        self.store.all()
    }

    pub fn critical_only(&self) -> bool {
        self.store.critical_only()
    }

    /// Build the listing for the current collection, flag, and session date.
    pub fn rows(&self, sort: SortOrder, query: Option<&str>) -> Vec<ListingRow> {
        build_listing(
            self.store.all(),
            sort,
            query,
            self.store.critical_only(),
            self.today,
        )
    }

    /// Full reload of the view: drops the critical-only flag and lists every
    /// record in storage order.
    pub fn on_view_reload(&mut self) -> Result<Vec<ListingRow>, StoreError> {
        self.store.set_critical_only(false)?;
        Ok(self.rows(SortOrder::Unsorted, None))
    }

    /// Check and add a submission, answering with the listing rebuilt under
    /// the caller's current sort.
    pub fn submit_new_product(
        &mut self,
        draft: NewProduct,
        sort: SortOrder,
    ) -> Result<Vec<ListingRow>, StoreError> {
        let product = validate_draft(draft)?;
        self.store.add(product, self.today)?;
        Ok(self.rows(sort, None))
    }

    /// Delete the record carrying exactly this name. Unknown names are a
    /// no-op; the listing comes back either way.
    pub fn request_delete(
        &mut self,
        name: &str,
        sort: SortOrder,
    ) -> Result<Vec<ListingRow>, StoreError> {
        self.store.remove_named(name)?;
        Ok(self.rows(sort, None))
    }

    /// Empty the collection. Safe to repeat.
    pub fn request_clear_all(&mut self) -> Result<Vec<ListingRow>, StoreError> {
        self.store.clear_all()?;
        Ok(self.rows(SortOrder::Unsorted, None))
    }

    /// Re-list under a different sort order.
    pub fn request_sort(&self, sort: SortOrder) -> Vec<ListingRow> {
        self.rows(sort, None)
    }

    /// Search across every record, whatever the current sort and flag.
    pub fn request_search(&self, query: &str) -> Vec<ListingRow> {
        self.rows(SortOrder::Unsorted, Some(query))
    }

    /// Load the built-in demo inventory, replacing the collection and
    /// switching the listing to critical-only.
    pub fn request_load_demo_data(&mut self) -> Result<Vec<ListingRow>, StoreError> {
        self.store.load_bulk(demo_products(self.today))?;
        Ok(self.rows(SortOrder::Unsorted, None))
    }
}

fn validate_draft(draft: NewProduct) -> Result<Product, StoreError> {
    let kind = draft.kind.trim();
    if kind.is_empty() {
        return Err(StoreError::Validation("a product type is required".into()));
    }
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(StoreError::Validation("a product name is required".into()));
    }
    if draft.quantity == 0 {
        return Err(StoreError::Validation("quantity must be at least 1".into()));
    }
    let expiry = NaiveDate::parse_from_str(draft.expiry.trim(), "%Y-%m-%d").map_err(|_| {
        StoreError::Validation(format!("\"{}\" is not a YYYY-MM-DD date", draft.expiry))
    })?;
    Ok(Product {
        kind: ProductKind::from(kind),
        name: name.to_string(),
        quantity: draft.quantity,
        expiry,
        details: draft.details.trim().to_string(),
        status: None,
    })
}

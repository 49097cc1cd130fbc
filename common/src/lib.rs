pub mod demo;
pub mod expiry;
pub mod listing;
pub mod product;

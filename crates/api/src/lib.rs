//! `catalog-api` — HTTP surface over the category use cases.

pub mod app;

//! fittrack - an in-memory fitness tracking REST API
//!
//! Two resource collections (exercises and workout sessions) with full
//! CRUD, plus a filter/sort/paginate query pipeline on the exercise
//! collection. Nothing is persisted; every run starts empty.

pub mod api;
pub mod cli;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;

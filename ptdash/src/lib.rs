pub mod aggregate;
pub mod app;
pub mod dashboard;
pub mod derived;
pub mod filter;
pub mod loader;
pub mod model;
pub mod query;

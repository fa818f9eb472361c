pub mod errors;
pub mod seed;
pub mod service;
pub mod store;

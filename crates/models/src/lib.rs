pub mod book;
pub mod errors;
pub mod user;

pub mod resolver;
pub mod store;

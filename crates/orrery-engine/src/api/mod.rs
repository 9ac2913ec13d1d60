pub mod error;
pub mod sim;
pub mod types;

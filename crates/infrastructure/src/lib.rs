pub mod dynamodb;
pub mod repositories;

pub use dynamodb::*;
pub use repositories::*;

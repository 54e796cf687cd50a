pub mod errors;
pub mod movie;
pub mod request;

pub use errors::*;
pub use movie::*;
pub use request::*;

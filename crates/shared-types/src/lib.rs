pub mod config;
pub mod error;
pub mod models;
pub mod validation;
pub mod vitals;

pub use config::*;
pub use error::*;
pub use models::*;
pub use vitals::*;

pub mod enums;
pub mod medication;

pub use enums::*;
pub use medication::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Medication name must not be empty")]
    EmptyName,
}

/// Email validation module - Gateway

mod email;

pub use email::{validate, ValidEmail, ValidationError};

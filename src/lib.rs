#![allow(nonstandard_style)]

pub mod config;
pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod registers;
pub mod scanning;
pub mod session;

pub use error_handling::{CalcError, Result};
pub use evaluating::{format_value, Calculator};

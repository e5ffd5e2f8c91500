//! Domain layer - Password value object and its policy.
//!
//! This crate contains pure domain logic with no runtime or I/O dependencies:
//! the ordered password policy, the run-pattern heuristics, the bcrypt
//! boundary and the `Password` value object that composes them.

pub mod constants;
pub mod error;
pub mod password;

pub use constants::*;
pub use error::{DomainResult, PasswordError, PasswordErrorKind};
pub use password::{validate_password, DenyList, Password, PasswordPolicy};

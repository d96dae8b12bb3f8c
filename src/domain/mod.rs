//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! names, phone numbers and birthdays. These value objects validate at
//! construction time, so an invalid field can never be represented in
//! a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{is_leap_year, Birthday};
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;

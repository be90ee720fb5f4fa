//! An explicit optional value. [`Optional<T>`] either holds exactly one `T`
//! or holds nothing, and every operation on it is built from one eliminator,
//! [`Optional::match_with`].
//!
//! ```
//! use optionality::{Optional, from_nullable, present};
//!
//! assert_eq!(present(42).unwrap_or(100), 42);
//! assert_eq!(Optional::ABSENT.unwrap_or(100), 100);
//! assert_eq!(from_nullable(Some(0)), present(0));
//! assert_eq!(present(42).filter(|x| x % 2 == 1).to_string(), "None");
//! ```
#![no_std]

#[cfg(feature = "aliases")]
mod aliases;
mod error;
mod guard;
mod optional;
#[cfg(feature = "serde")]
mod serialization;

#[cfg(feature = "aliases")]
pub use aliases::{Maybe, none, some};
pub use error::ValueAbsent;
pub use guard::{is_optional, narrow};
pub use optional::{Optional, absent, from_nullable, present};

//! # zdash-core - Core Domain Types
//!
//! Foundation crate for zygisk-dash. Parses module property files, classifies
//! status tokens into badge states, and holds the translation tables.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Property Parsing (`prop`)
//! - [`parse()`] - Permissive `key=value` parser producing a [`PropertyRecord`]
//! - [`split_list()`] - Split comma-separated fields such as `modules_list`
//!
//! ### Status Classification (`status`)
//! - [`StatusValue`] - Known status tokens plus a catch-all
//! - [`StatusClass`] - Positive / Negative / Indeterminate
//! - [`classify()`] - Class and localized label for a raw status string
//!
//! ### Translations (`i18n`)
//! - [`Locale`] - Display locale, passed explicitly to every lookup
//! - [`translate()`], [`label()`] - Table lookups with key fallback
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! ```rust
//! use zdash_core::prelude::*;
//! ```

pub mod error;
pub mod i18n;
pub mod logging;
pub mod prelude;
pub mod prop;
pub mod status;

pub use error::{Error, Result, ResultExt};
pub use i18n::{label, translate, Locale, SUPPORTED_LOCALES};
pub use prop::{keys, parse, split_list, PropertyRecord};
pub use status::{classify, Classification, StatusClass, StatusIcon, StatusValue};

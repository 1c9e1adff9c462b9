//! # edbridge-core - Core Domain Types
//!
//! Foundation crate for edbridge. Provides the error type, launch-template
//! expansion, process specifications, and code-asset routing.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, shlex).
//!
//! ## Public API
//!
//! ### Templates (`template`)
//! - [`expand()`] - Single-pass, non-recursive `%x` placeholder expansion
//!
//! ### Process Specifications (`process`)
//! - [`ProcessSpec`] - Resolved executable + substituted argument string
//!
//! ### Code Assets (`assets`)
//! - [`CodeAssetSet`] - Extension set deciding which files route to the
//!   external editor
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use edbridge_core::prelude::*;
//! ```

pub mod assets;
pub mod error;
pub mod logging;
pub mod process;
pub mod template;

/// Prelude for common imports used throughout all edbridge crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use assets::{CodeAssetSet, DEFAULT_CODE_ASSETS};
pub use error::{Error, Result};
pub use process::ProcessSpec;
pub use template::expand;

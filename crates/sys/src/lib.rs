#![deny(missing_docs)]
//! Raw runtime bindings for the OpenVG 1.1 vector graphics API.
//!
//! This crate contains no safe abstractions. It provides the C scalar and
//! handle type aliases, the numeric constants of the OpenVG 1.1 and VGU 1.1
//! enumerations, and a symbol table ([VgLib]) resolved at runtime from the
//! system's OpenVG shared library.
//!
//! OpenVG is almost always shipped as a vendor shared library rather than a
//! link-time dependency, so the symbols here are loaded dynamically
//! (the `libloading` crate) instead of being declared in an `extern` block.
//!
//! If you want to draw things, see the `rovg` crate instead.

pub mod consts;
mod load;
mod types;

pub use load::{CoreSyms, LoadError, VgLib, VguSyms};
pub use types::*;

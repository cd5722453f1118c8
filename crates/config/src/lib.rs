//! Shortcut handler configuration.
//!
//! Maps shortcut text (e.g. `<C-A>`) to the [`OwnershipPolicy`] deciding who
//! handles it. Tables persist as TOML:
//!
//! ```toml
//! [handlers]
//! "<C-A>" = "vim"
//! "<C-B>" = { normal = "ide", insert = "vim", visual = "ide", select = "ide" }
//! ```
//!
//! Owner identifiers the resolver does not know read as `undefined` instead of
//! failing the load. Handler lines (`<C-A> n-v:vim i:ide`) go through the
//! stricter notation parser in [`keyowner_ownership::notation`].
//!
//! [`HandlerStore`] holds the live table for concurrent readers and swaps in
//! whole replacements on edit.

pub mod error;
pub mod store;
pub mod table;

pub use error::{ConfigError, Result};
pub use keyowner_ownership::{Mode, OwnerKind, OwnershipPolicy};
pub use store::HandlerStore;
pub use table::HandlerTable;

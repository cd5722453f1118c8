//! Shortcut ownership resolution.
//!
//! A shortcut is owned either by the host application (`ide`) or by the modal
//! emulator (`vim`), possibly differently per mode group:
//! - [`OwnerKind`]: who handles the keystroke, with a stable persisted identifier
//! - [`ModeGroup`]: the four coarse buckets concrete [`Mode`]s fold into
//! - [`OwnershipPolicy`]: one owner for everything, or one per [`ModeGroup`]

/// Coarse mode groups and the mode coarsening table.
pub mod group;
/// Textual `n-x:vim i:ide` handler notation.
pub mod notation;
/// Owner kinds and their persisted identifiers.
pub mod owner;
/// Ownership policies and resolution.
pub mod policy;

pub use group::ModeGroup;
pub use keyowner_primitives::Mode;
pub use notation::NotationError;
pub use owner::OwnerKind;
pub use policy::{GroupOwners, OwnershipPolicy};

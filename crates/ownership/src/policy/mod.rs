//! Shortcut ownership policies.
//!
//! A policy is either [`OwnershipPolicy::Uniform`] or
//! [`OwnershipPolicy::ByModeGroup`]. Both shapes resolve through
//! [`OwnershipPolicy::resolve`]; [`OwnershipPolicy::normalize`] widens any
//! policy to the per-group shape without changing what it resolves to.

use std::fmt;

use keyowner_primitives::Mode;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{ModeGroup, OwnerKind};


/// Owners chosen independently for each [`ModeGroup`].
///
/// Persisted as a table; missing fields read as `undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupOwners {
	/// Owner in normal, command-line and operator-pending modes.
	pub normal: OwnerKind,
	/// Owner in insert and replace modes.
	pub insert: OwnerKind,
	/// Owner in visual and select modes.
	pub visual: OwnerKind,
	/// Select-group owner. Kept for configuration; select mode resolves via `visual`.
	pub select: OwnerKind,
}

impl GroupOwners {
	/// Creates owners with every group set to `owner`.
	pub const fn uniform(owner: OwnerKind) -> Self {
		Self {
			normal: owner,
			insert: owner,
			visual: owner,
			select: owner,
		}
	}

	/// Returns the owner stored for `group`.
	pub const fn get(&self, group: ModeGroup) -> OwnerKind {
		match group {
			ModeGroup::Normal => self.normal,
			ModeGroup::Insert => self.insert,
			ModeGroup::Visual => self.visual,
			ModeGroup::Select => self.select,
		}
	}

	/// Returns a copy with `group` set to `owner`.
	pub const fn with(self, group: ModeGroup, owner: OwnerKind) -> Self {
		match group {
			ModeGroup::Normal => Self { normal: owner, ..self },
			ModeGroup::Insert => Self { insert: owner, ..self },
			ModeGroup::Visual => Self { visual: owner, ..self },
			ModeGroup::Select => Self { select: owner, ..self },
		}
	}

	/// Resolves the owner for a concrete mode through its group.
	pub const fn resolve(&self, mode: Mode) -> OwnerKind {
		self.get(ModeGroup::of(mode))
	}

	/// Returns the shared owner if all four groups agree.
	pub fn uniform_owner(&self) -> Option<OwnerKind> {
		let owner = self.normal;
		(self.insert == owner && self.visual == owner && self.select == owner).then_some(owner)
	}
}

/// Complete owner assignment for one shortcut.
///
/// Persisted as an owner identifier (uniform) or a [`GroupOwners`] table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OwnershipPolicy {
	/// One owner for every mode.
	Uniform(OwnerKind),
	/// One owner per mode group.
	ByModeGroup(GroupOwners),
}

impl OwnershipPolicy {
	/// Every mode undecided.
	pub const ALL_UNDEFINED: Self = Self::Uniform(OwnerKind::Undefined);
	/// The emulator owns the shortcut everywhere.
	pub const ALL_VIM: Self = Self::Uniform(OwnerKind::Vim);
	/// The host owns the shortcut everywhere.
	pub const ALL_IDE: Self = Self::Uniform(OwnerKind::Ide);

	/// Returns the effective owner while the editor is in `mode`.
	pub const fn resolve(&self, mode: Mode) -> OwnerKind {
		match self {
			OwnershipPolicy::Uniform(owner) => *owner,
			OwnershipPolicy::ByModeGroup(owners) => owners.resolve(mode),
		}
	}

	/// Returns the owner stored for `group`.
	pub const fn for_group(&self, group: ModeGroup) -> OwnerKind {
		match self {
			OwnershipPolicy::Uniform(owner) => *owner,
			OwnershipPolicy::ByModeGroup(owners) => owners.get(group),
		}
	}

	/// Widens the policy to per-group owners.
	///
	/// Resolution is unchanged for every mode.
	pub const fn normalize(&self) -> GroupOwners {
		match self {
			OwnershipPolicy::Uniform(owner) => GroupOwners::uniform(*owner),
			OwnershipPolicy::ByModeGroup(owners) => *owners,
		}
	}

	/// Collapses per-group owners that all agree into [`OwnershipPolicy::Uniform`].
	pub fn compact(self) -> Self {
		match self {
			OwnershipPolicy::ByModeGroup(owners) => owners
				.uniform_owner()
				.map_or(self, OwnershipPolicy::Uniform),
			OwnershipPolicy::Uniform(_) => self,
		}
	}

	/// Returns true if any mode group has a decided owner.
	pub fn is_defined(&self) -> bool {
		let owners = self.normalize();
		[owners.normal, owners.insert, owners.visual, owners.select]
			.into_iter()
			.any(OwnerKind::is_defined)
	}
}

impl Default for OwnershipPolicy {
	fn default() -> Self {
		Self::ALL_UNDEFINED
	}
}

impl From<OwnerKind> for OwnershipPolicy {
	fn from(owner: OwnerKind) -> Self {
		Self::Uniform(owner)
	}
}

impl From<GroupOwners> for OwnershipPolicy {
	fn from(owners: GroupOwners) -> Self {
		Self::ByModeGroup(owners)
	}
}

impl<'de> Deserialize<'de> for OwnershipPolicy {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct PolicyVisitor;

		impl<'de> Visitor<'de> for PolicyVisitor {
			type Value = OwnershipPolicy;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(
					"an owner identifier (\"ide\", \"vim\", \"undefined\") or a table of \
					 per-group owners (normal, insert, visual, select)",
				)
			}

			fn visit_str<E: de::Error>(self, value: &str) -> Result<OwnershipPolicy, E> {
				Ok(OwnershipPolicy::Uniform(OwnerKind::decode_persisted(value)))
			}

			fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<OwnershipPolicy, A::Error> {
				GroupOwners::deserialize(de::value::MapAccessDeserializer::new(map))
					.map(OwnershipPolicy::ByModeGroup)
			}
		}

		deserializer.deserialize_any(PolicyVisitor)
	}
}

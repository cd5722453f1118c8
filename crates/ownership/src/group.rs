//! Mode groups: the coarse buckets concrete modes share owners through.

use keyowner_primitives::Mode;
use strum_macros::EnumIter;

/// Coarse bucket of modes that share one shortcut owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ModeGroup {
	/// Normal, command-line and operator-pending modes.
	Normal,
	/// Insert and replace modes.
	Insert,
	/// Visual and select modes.
	Visual,
	/// Stored alongside the others, but no concrete mode coarsens to it.
	Select,
}

impl ModeGroup {
	/// Coarsens a concrete mode into its group.
	///
	/// The table is fixed: persisted per-group policies depend on it.
	pub const fn of(mode: Mode) -> Self {
		match mode {
			Mode::Normal => ModeGroup::Normal,
			Mode::Visual => ModeGroup::Visual,
			Mode::Select => ModeGroup::Visual,
			Mode::Insert => ModeGroup::Insert,
			Mode::CmdLine => ModeGroup::Normal,
			Mode::OpPending => ModeGroup::Normal,
			Mode::Replace => ModeGroup::Insert,
		}
	}

	/// Returns a simple string identifier for the group.
	pub const fn name(self) -> &'static str {
		match self {
			ModeGroup::Normal => "normal",
			ModeGroup::Insert => "insert",
			ModeGroup::Visual => "visual",
			ModeGroup::Select => "select",
		}
	}

	/// Returns the single-letter code used in handler notation.
	pub const fn letter(self) -> char {
		match self {
			ModeGroup::Normal => 'n',
			ModeGroup::Insert => 'i',
			ModeGroup::Visual => 'x',
			ModeGroup::Select => 's',
		}
	}
}

impl From<Mode> for ModeGroup {
	fn from(mode: Mode) -> Self {
		Self::of(mode)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coarsening_table() {
		let expected = [
			(Mode::Normal, ModeGroup::Normal),
			(Mode::Visual, ModeGroup::Visual),
			(Mode::Select, ModeGroup::Visual),
			(Mode::Insert, ModeGroup::Insert),
			(Mode::CmdLine, ModeGroup::Normal),
			(Mode::OpPending, ModeGroup::Normal),
			(Mode::Replace, ModeGroup::Insert),
		];
		for (mode, group) in expected {
			assert_eq!(ModeGroup::from(mode), group, "{mode}");
		}
	}

	#[test]
	fn group_names_match_their_own_mode() {
		for mode in [Mode::Normal, Mode::Insert, Mode::Visual] {
			assert_eq!(ModeGroup::of(mode).name(), mode.name());
		}
		// Select mode folds into visual, but the select group keeps its name.
		assert_eq!(ModeGroup::of(Mode::Select).name(), "visual");
		assert_eq!(ModeGroup::Select.name(), Mode::Select.name());
	}

	#[test]
	fn no_mode_reaches_select_group() {
		assert!(Mode::all().all(|mode| ModeGroup::of(mode) != ModeGroup::Select));
	}
}

//! Editor mode state as reported by the host integration.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::{EnumCount, EnumIter};

/// Concrete editor mode the cursor is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumCount)]
pub enum Mode {
	/// Normal (command) mode.
	#[default]
	Normal,
	/// Characterwise, linewise or blockwise visual selection.
	Visual,
	/// Select mode: a visual selection that typing replaces.
	Select,
	/// Insert mode.
	Insert,
	/// Command-line input (`:` ex commands, `/` and `?` searches).
	CmdLine,
	/// An operator was typed and its motion is pending.
	OpPending,
	/// Replace (overtype) mode.
	Replace,
}

impl Mode {
	/// Returns a simple string identifier for the mode.
	pub fn name(self) -> &'static str {
		match self {
			Mode::Normal => "normal",
			Mode::Visual => "visual",
			Mode::Select => "select",
			Mode::Insert => "insert",
			Mode::CmdLine => "cmdline",
			Mode::OpPending => "op-pending",
			Mode::Replace => "replace",
		}
	}

	/// Iterates every mode in declaration order.
	pub fn all() -> impl Iterator<Item = Mode> {
		Mode::iter()
	}
}

impl fmt::Display for Mode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

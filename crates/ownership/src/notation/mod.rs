//! # Handler notation
//!
//! Compact text form of an [`OwnershipPolicy`], as written in user config
//! lines such as `<C-A> n-v:vim i:ide`.
//!
//! ## Supported Syntax
//!
//! ```text
//! notation = entry (ws entry)*
//! entry    = modes ":" owner
//! modes    = mode ("-" mode)*
//! mode     = "n" | "i" | "x" | "s" | "v" | "a"
//! owner    = "ide" | "vim" | "undefined"
//! ```
//!
//! `v` covers the visual and select groups, `a` covers all four. Groups not
//! named stay undefined and later entries override earlier ones.

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{GroupOwners, ModeGroup, OwnerKind, OwnershipPolicy};


/// Malformed handler notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("handler notation error at position {position}: {message}")]
pub struct NotationError {
	/// Human-readable description of the problem.
	pub message: String,
	/// Byte offset in the input where the problem starts.
	pub position: usize,
}

impl NotationError {
	fn new(message: impl Into<String>, position: usize) -> Self {
		Self {
			message: message.into(),
			position,
		}
	}
}

/// Parses handler notation into a policy.
///
/// The result is compacted, so notation assigning one owner to all four
/// groups yields [`OwnershipPolicy::Uniform`].
pub fn parse(input: &str) -> Result<OwnershipPolicy, NotationError> {
	let mut owners = GroupOwners::default();
	let mut entries = 0usize;

	for (start, entry) in entries_with_offsets(input) {
		let Some((modes, owner)) = entry.split_once(':') else {
			return Err(NotationError::new(format!("expected `MODES:OWNER`, found `{entry}`"), start));
		};

		let owner_pos = start + modes.len() + 1;
		let owner = OwnerKind::parse_identifier(owner)
			.ok_or_else(|| NotationError::new(format!("unknown owner `{owner}`"), owner_pos))?;

		if modes.is_empty() {
			return Err(NotationError::new("missing mode list", start));
		}

		let mut mode_pos = start;
		for code in modes.split('-') {
			for &group in groups_for(code).ok_or_else(|| unknown_mode(code, mode_pos))? {
				owners = owners.with(group, owner);
			}
			mode_pos += code.len() + 1;
		}
		entries += 1;
	}

	if entries == 0 {
		return Err(NotationError::new("empty handler notation", 0));
	}
	Ok(OwnershipPolicy::ByModeGroup(owners).compact())
}

fn unknown_mode(code: &str, position: usize) -> NotationError {
	if code.is_empty() {
		NotationError::new("empty mode in mode list", position)
	} else {
		NotationError::new(format!("unknown mode `{code}`"), position)
	}
}

fn groups_for(code: &str) -> Option<&'static [ModeGroup]> {
	let groups: &'static [ModeGroup] = match code {
		"n" => &[ModeGroup::Normal],
		"i" => &[ModeGroup::Insert],
		"x" => &[ModeGroup::Visual],
		"s" => &[ModeGroup::Select],
		"v" => &[ModeGroup::Visual, ModeGroup::Select],
		"a" => &[
			ModeGroup::Normal,
			ModeGroup::Insert,
			ModeGroup::Visual,
			ModeGroup::Select,
		],
		_ => return None,
	};
	Some(groups)
}

fn entries_with_offsets(input: &str) -> impl Iterator<Item = (usize, &str)> {
	let base = input.as_ptr() as usize;
	input
		.split_whitespace()
		.map(move |entry| (entry.as_ptr() as usize - base, entry))
}

impl fmt::Display for OwnershipPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let owners = self.normalize();
		if let Some(owner) = owners.uniform_owner() {
			return write!(f, "a:{}", owner.identifier());
		}

		let mut written: Vec<OwnerKind> = Vec::new();
		for group in ModeGroup::iter() {
			let owner = owners.get(group);
			if written.contains(&owner) {
				continue;
			}
			if !written.is_empty() {
				f.write_str(" ")?;
			}
			written.push(owner);

			let mut letters = ModeGroup::iter()
				.filter(|g| owners.get(*g) == owner)
				.map(ModeGroup::letter);
			if let Some(first) = letters.next() {
				write!(f, "{first}")?;
			}
			for letter in letters {
				write!(f, "-{letter}")?;
			}
			write!(f, ":{}", owner.identifier())?;
		}
		Ok(())
	}
}

impl FromStr for OwnershipPolicy {
	type Err = NotationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}

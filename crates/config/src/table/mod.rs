//! Shortcut to policy tables.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use keyowner_ownership::{Mode, OwnerKind, OwnershipPolicy};
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};


/// On-disk shape of a handler file.
#[derive(Debug, Default, Deserialize)]
struct HandlerFile {
	#[serde(default)]
	handlers: BTreeMap<String, OwnershipPolicy>,
}

#[derive(Serialize)]
struct HandlerFileRef<'a> {
	handlers: &'a BTreeMap<String, OwnershipPolicy>,
}

/// Ownership policies keyed by shortcut.
///
/// Shortcuts are stored trimmed. Each entry is replaced wholesale; policies
/// are never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerTable {
	entries: BTreeMap<String, OwnershipPolicy>,
}

impl HandlerTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the policy configured for `shortcut`.
	pub fn get(&self, shortcut: &str) -> Option<OwnershipPolicy> {
		self.entries.get(shortcut.trim()).copied()
	}

	/// Sets the policy for `shortcut`, returning the one it replaced.
	pub fn insert(&mut self, shortcut: &str, policy: OwnershipPolicy) -> Result<Option<OwnershipPolicy>> {
		let shortcut = normalize_shortcut(shortcut)?;
		Ok(self.entries.insert(shortcut.to_string(), policy))
	}

	/// Removes the policy for `shortcut`.
	pub fn remove(&mut self, shortcut: &str) -> Option<OwnershipPolicy> {
		self.entries.remove(shortcut.trim())
	}

	/// Number of configured shortcuts.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no shortcut is configured.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates entries in shortcut order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, OwnershipPolicy)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Resolves who owns `shortcut` in `mode`.
	///
	/// Unconfigured shortcuts are [`OwnerKind::Undefined`].
	pub fn owner_for(&self, shortcut: &str, mode: Mode) -> OwnerKind {
		self.get(shortcut)
			.map_or(OwnerKind::Undefined, |policy| policy.resolve(mode))
	}

	/// Merge another table into this one, with `other` taking precedence.
	pub fn merge(&mut self, other: HandlerTable) {
		self.entries.extend(other.entries);
	}

	/// Applies a `SHORTCUT NOTATION` line such as `<C-A> n-v:vim i:ide`.
	///
	/// Returns the shortcut and the policy it was set to.
	pub fn apply_line(&mut self, line: &str) -> Result<(String, OwnershipPolicy)> {
		let line = line.trim();
		if line.is_empty() {
			return Err(ConfigError::EmptyShortcut);
		}
		let (shortcut, notation) = line
			.split_once(char::is_whitespace)
			.ok_or_else(|| ConfigError::MissingNotation(line.to_string()))?;

		let policy: OwnershipPolicy =
			notation.trim().parse().map_err(|source| ConfigError::Notation {
				shortcut: shortcut.to_string(),
				source,
			})?;
		self.insert(shortcut, policy)?;
		Ok((shortcut.to_string(), policy))
	}

	/// Parse a TOML handler document.
	///
	/// Keys that name the same shortcut after trimming are rejected.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let file: HandlerFile = toml::from_str(input)?;
		let mut table = Self::new();
		for (shortcut, policy) in file.handlers {
			if table.insert(&shortcut, policy)?.is_some() {
				return Err(ConfigError::DuplicateShortcut(shortcut.trim().to_string()));
			}
		}
		Ok(table)
	}

	/// Encode the table as a TOML handler document.
	pub fn to_toml_string(&self) -> Result<String> {
		Ok(toml::to_string(&HandlerFileRef {
			handlers: &self.entries,
		})?)
	}

	/// Load a handler table from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let table = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), count = table.len(), "loaded shortcut handlers");
		Ok(table)
	}

	/// Load a handler table, treating a missing file as an empty table.
	pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		match Self::load(path) {
			Err(ConfigError::Io { error, .. }) if error.kind() == ErrorKind::NotFound => {
				tracing::debug!(path = %path.display(), "no shortcut handler file, starting empty");
				Ok(Self::default())
			}
			other => other,
		}
	}

	/// Write the table to a file, replacing its contents.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let content = self.to_toml_string()?;
		std::fs::write(path, content).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		tracing::debug!(path = %path.display(), count = self.len(), "saved shortcut handlers");
		Ok(())
	}
}

fn normalize_shortcut(shortcut: &str) -> Result<&str> {
	let shortcut = shortcut.trim();
	if shortcut.is_empty() {
		return Err(ConfigError::EmptyShortcut);
	}
	Ok(shortcut)
}

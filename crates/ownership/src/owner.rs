//! Shortcut owners and their persisted identifiers.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::EnumIter;

/// Which input authority handles a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum OwnerKind {
	/// No decision recorded; the caller applies its own default.
	#[default]
	Undefined,
	/// The host application handles the shortcut natively.
	Ide,
	/// The modal editor emulator handles the shortcut.
	Vim,
}

impl OwnerKind {
	/// Returns the stable lowercase identifier used for persistence.
	pub const fn identifier(self) -> &'static str {
		match self {
			OwnerKind::Undefined => "undefined",
			OwnerKind::Ide => "ide",
			OwnerKind::Vim => "vim",
		}
	}

	/// Returns the human-readable label used for presentation.
	pub const fn label(self) -> &'static str {
		match self {
			OwnerKind::Undefined => "Undefined",
			OwnerKind::Ide => "IDE",
			OwnerKind::Vim => "Vim",
		}
	}

	/// Looks up an owner by its exact identifier.
	///
	/// Returns `None` for anything other than `undefined`, `ide` or `vim`.
	/// Matching is case-sensitive and does not trim.
	pub fn parse_identifier(s: &str) -> Option<Self> {
		match s {
			"undefined" => Some(OwnerKind::Undefined),
			"ide" => Some(OwnerKind::Ide),
			"vim" => Some(OwnerKind::Vim),
			_ => None,
		}
	}

	/// Decodes a persisted identifier, falling back to [`OwnerKind::Undefined`].
	///
	/// Never fails: unknown, empty or differently cased input decodes as
	/// undecided.
	pub fn from_identifier(s: &str) -> Self {
		Self::parse_identifier(s).unwrap_or_default()
	}

	/// [`OwnerKind::from_identifier`] for stored data, logging substitutions.
	pub(crate) fn decode_persisted(value: &str) -> Self {
		Self::parse_identifier(value).unwrap_or_else(|| {
			tracing::debug!(identifier = value, "unrecognized shortcut owner, using undefined");
			OwnerKind::Undefined
		})
	}

	/// Returns true unless this is [`OwnerKind::Undefined`].
	pub const fn is_defined(self) -> bool {
		!matches!(self, OwnerKind::Undefined)
	}
}

impl fmt::Display for OwnerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl Serialize for OwnerKind {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.identifier())
	}
}

impl<'de> Deserialize<'de> for OwnerKind {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct IdentifierVisitor;

		impl Visitor<'_> for IdentifierVisitor {
			type Value = OwnerKind;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a shortcut owner identifier")
			}

			fn visit_str<E: de::Error>(self, value: &str) -> Result<OwnerKind, E> {
				Ok(OwnerKind::decode_persisted(value))
			}
		}

		deserializer.deserialize_str(IdentifierVisitor)
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn identifier_round_trip() {
		for owner in OwnerKind::iter() {
			assert_eq!(OwnerKind::from_identifier(owner.identifier()), owner);
		}
	}

	#[test]
	fn unknown_identifiers_fall_back_to_undefined() {
		for input in ["", " ", "bogus", "IDE", "Vim", " vim", "vim\n", "undefined "] {
			assert_eq!(OwnerKind::from_identifier(input), OwnerKind::Undefined, "{input:?}");
		}
	}

	#[test]
	fn labels_differ_from_identifiers() {
		assert_ne!(OwnerKind::Ide.label(), OwnerKind::Ide.identifier());
		assert_eq!(OwnerKind::Ide.label(), "IDE");
		assert_eq!(OwnerKind::Ide.identifier(), "ide");
		for owner in OwnerKind::iter() {
			assert!(!owner.label().is_empty());
			assert!(!owner.identifier().is_empty());
			assert_eq!(owner.label(), owner.label());
			assert_eq!(owner.to_string(), owner.label());
		}
	}

	#[test]
	fn only_undefined_is_undecided() {
		assert!(!OwnerKind::Undefined.is_defined());
		assert!(OwnerKind::Ide.is_defined());
		assert!(OwnerKind::Vim.is_defined());
	}

	#[derive(Debug, Serialize, Deserialize)]
	struct Doc {
		owner: OwnerKind,
	}

	#[test]
	fn serde_uses_identifier() {
		let text = toml::to_string(&Doc { owner: OwnerKind::Ide }).unwrap();
		assert_eq!(text.trim(), r#"owner = "ide""#);
	}

	#[test]
	fn serde_decodes_unknown_as_undefined() {
		let doc: Doc = toml::from_str(r#"owner = "emacs""#).unwrap();
		assert_eq!(doc.owner, OwnerKind::Undefined);
		let doc: Doc = toml::from_str(r#"owner = "vim""#).unwrap();
		assert_eq!(doc.owner, OwnerKind::Vim);
	}
}

//! Error types for handler configuration.

use std::path::PathBuf;

use keyowner_ownership::NotationError;
use thiserror::Error;

/// Errors that can occur when loading, editing or saving handler tables.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading or writing a handler file.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path to the file that failed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The document is not valid TOML or does not match the handler schema.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// The table could not be encoded as TOML.
	#[error("TOML encode error: {0}")]
	Encode(#[from] toml::ser::Error),

	/// A handler line carried malformed notation.
	#[error("invalid handler for {shortcut}: {source}")]
	Notation {
		/// Shortcut the notation was attached to.
		shortcut: String,
		/// The notation problem.
		#[source]
		source: NotationError,
	},

	/// A handler line named a shortcut but no owners.
	#[error("missing handler notation for {0}")]
	MissingNotation(String),

	/// Two document keys name the same shortcut once trimmed.
	#[error("duplicate shortcut: {0}")]
	DuplicateShortcut(String),

	/// A shortcut was empty after trimming.
	#[error("empty shortcut")]
	EmptyShortcut,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

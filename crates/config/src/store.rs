//! Live handler table shared between the key dispatcher and config editors.

use std::sync::Arc;

use arc_swap::ArcSwap;
use keyowner_ownership::{Mode, OwnerKind};

use crate::HandlerTable;

/// Atomically replaceable [`HandlerTable`].
///
/// Readers see a complete table snapshot; writers publish a new table in one
/// swap, so a lookup never observes a half-applied edit.
pub struct HandlerStore {
	table: ArcSwap<HandlerTable>,
}

impl HandlerStore {
	/// Creates a store publishing `table`.
	pub fn new(table: HandlerTable) -> Self {
		Self {
			table: ArcSwap::from_pointee(table),
		}
	}

	/// Returns the current table.
	#[inline]
	pub fn snapshot(&self) -> Arc<HandlerTable> {
		self.table.load_full()
	}

	/// Resolves who owns `shortcut` in `mode` against the current table.
	#[inline]
	pub fn owner_for(&self, shortcut: &str, mode: Mode) -> OwnerKind {
		self.table.load().owner_for(shortcut, mode)
	}

	/// Publishes `table`, returning the one it replaced.
	pub fn replace(&self, table: HandlerTable) -> Arc<HandlerTable> {
		tracing::trace!(count = table.len(), "replacing shortcut handlers");
		self.table.swap(Arc::new(table))
	}

	/// Applies `f` to a copy of the current table and publishes the result.
	///
	/// Retries on concurrent writers; nothing is published if `f` fails.
	pub fn try_update<F, E>(&self, mut f: F) -> Result<Arc<HandlerTable>, E>
	where
		F: FnMut(&mut HandlerTable) -> Result<(), E>,
	{
		loop {
			let cur = self.table.load_full();
			let mut next = HandlerTable::clone(&cur);
			f(&mut next)?;

			let next_arc = Arc::new(next);
			let prev = self.table.compare_and_swap(&cur, next_arc.clone());
			if Arc::ptr_eq(&prev, &cur) {
				tracing::trace!(count = next_arc.len(), "updated shortcut handlers");
				return Ok(next_arc);
			}
		}
	}

	/// Infallible [`HandlerStore::try_update`].
	pub fn update(&self, mut f: impl FnMut(&mut HandlerTable)) -> Arc<HandlerTable> {
		match self.try_update::<_, std::convert::Infallible>(|table| {
			f(table);
			Ok(())
		}) {
			Ok(table) => table,
			Err(never) => match never {},
		}
	}
}

impl Default for HandlerStore {
	fn default() -> Self {
		Self::new(HandlerTable::default())
	}
}

impl std::fmt::Debug for HandlerStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HandlerStore")
			.field("table", &*self.table.load())
			.finish()
	}
}

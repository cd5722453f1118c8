//! Algebraic laws every policy must satisfy, checked over generated policies.

use keyowner_ownership::{GroupOwners, Mode, ModeGroup, OwnerKind, OwnershipPolicy};
use proptest::prelude::*;
use proptest::sample::select;
use strum::IntoEnumIterator;

fn arb_owner() -> impl Strategy<Value = OwnerKind> {
	select(OwnerKind::iter().collect::<Vec<_>>())
}

fn arb_mode() -> impl Strategy<Value = Mode> {
	select(Mode::all().collect::<Vec<_>>())
}

fn arb_policy() -> impl Strategy<Value = OwnershipPolicy> {
	prop_oneof![
		arb_owner().prop_map(OwnershipPolicy::Uniform),
		(arb_owner(), arb_owner(), arb_owner(), arb_owner()).prop_map(
			|(normal, insert, visual, select)| {
				OwnershipPolicy::ByModeGroup(GroupOwners {
					normal,
					insert,
					visual,
					select,
				})
			}
		),
	]
}

proptest! {
	/// Widening never changes what a policy resolves to.
	#[test]
	fn prop_normalize_preserves_resolution(policy in arb_policy(), mode in arb_mode()) {
		prop_assert_eq!(policy.normalize().resolve(mode), policy.resolve(mode));
		prop_assert_eq!(OwnershipPolicy::from(policy.normalize()).resolve(mode), policy.resolve(mode));
	}

	#[test]
	fn prop_normalize_idempotent(policy in arb_policy()) {
		let once = policy.normalize();
		prop_assert_eq!(OwnershipPolicy::from(once).normalize(), once);
	}

	#[test]
	fn prop_compact_preserves_resolution(policy in arb_policy(), mode in arb_mode()) {
		prop_assert_eq!(policy.compact().resolve(mode), policy.resolve(mode));
		prop_assert_eq!(policy.compact().normalize(), policy.normalize());
	}

	/// Uniform policies are indistinguishable from four equal groups.
	#[test]
	fn prop_uniform_equals_four_groups(owner in arb_owner(), mode in arb_mode()) {
		let wide = OwnershipPolicy::ByModeGroup(GroupOwners::uniform(owner));
		prop_assert_eq!(OwnershipPolicy::Uniform(owner).resolve(mode), wide.resolve(mode));
		prop_assert_eq!(OwnershipPolicy::Uniform(owner).normalize(), wide.normalize());
	}

	#[test]
	fn prop_resolve_reads_coarsened_group(policy in arb_policy(), mode in arb_mode()) {
		prop_assert_eq!(policy.resolve(mode), policy.for_group(ModeGroup::of(mode)));
	}

	#[test]
	fn prop_notation_round_trip(policy in arb_policy()) {
		let text = policy.to_string();
		prop_assert_eq!(text.parse::<OwnershipPolicy>(), Ok(policy.compact()));
	}

	#[test]
	fn prop_identifier_decoding_total(input in ".*") {
		let owner = OwnerKind::from_identifier(&input);
		let known = matches!(input.as_str(), "undefined" | "ide" | "vim");
		prop_assert_eq!(owner.identifier() == input, known);
	}
}

#[test]
fn identifier_round_trip() {
	for owner in OwnerKind::iter() {
		assert_eq!(OwnerKind::from_identifier(owner.identifier()), owner);
	}
}

#[test]
fn fail_safe_identifiers() {
	assert_eq!(OwnerKind::from_identifier(""), OwnerKind::Undefined);
	assert_eq!(OwnerKind::from_identifier("bogus"), OwnerKind::Undefined);
	assert_eq!(OwnerKind::from_identifier("IDE"), OwnerKind::Undefined);
}

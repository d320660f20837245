//! Property-based tests for tray position assignment.
//!
//! These exercise the largest-gap assigner over arbitrary sets of occupied
//! dots and check the invariants that hold for every input.

#[cfg(test)]
mod tests {
    use crate::layout::TrayPositionAssigner;
    use crate::profile::{ConfigurationTypeProfile, DotPosition};
    use crate::rack::{Tray, TrayId};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    // ============================================================================
    // STRATEGY DEFINITIONS
    // ============================================================================

    /// Strategy for a set of distinct occupied dots on a 200-dot rack.
    fn occupied_strategy() -> impl Strategy<Value = BTreeSet<u16>> {
        proptest::collection::btree_set(1u16..=200, 0..40)
    }

    fn to_dots(values: impl IntoIterator<Item = u16>) -> Vec<DotPosition> {
        values
            .into_iter()
            .map(|v| DotPosition::try_from(v).unwrap())
            .collect()
    }

    // ============================================================================
    // PROPERTY 1: DETERMINISM
    // ============================================================================
    // The result depends only on the set of occupied dots, not on their order
    // or on how many times the assigner is called.

    proptest! {
        #[test]
        fn prop_assignment_ignores_input_order(
            occupied in occupied_strategy(),
            seed in any::<u64>(),
        ) {
            let ascending: Vec<u16> = occupied.iter().copied().collect();
            let mut shuffled = ascending.clone();
            // Deterministic rotation stands in for a shuffle.
            if !shuffled.is_empty() {
                #[allow(clippy::cast_possible_truncation)]
                let by = (seed % shuffled.len() as u64) as usize;
                shuffled.rotate_left(by);
                shuffled.reverse();
            }

            let first = TrayPositionAssigner::assign_from_dots(to_dots(ascending.clone()));
            let second = TrayPositionAssigner::assign_from_dots(to_dots(shuffled));
            let third = TrayPositionAssigner::assign_from_dots(to_dots(ascending));

            prop_assert_eq!(first, second);
            prop_assert_eq!(first, third);
        }
    }

    // ============================================================================
    // PROPERTY 2: NEVER REUSES AN OCCUPIED DOT
    // ============================================================================
    // The midpoint of a gap wider than one dot lies strictly inside it, and
    // the fallback lands above the topmost tray.

    proptest! {
        #[test]
        fn prop_assigned_dot_is_free(occupied in occupied_strategy()) {
            let assigned = TrayPositionAssigner::assign_from_dots(to_dots(occupied.iter().copied()));
            prop_assert!(
                !occupied.contains(&assigned.value()),
                "dot {} is already occupied", assigned
            );
        }
    }

    // ============================================================================
    // PROPERTY 3: BOUNDED RESULT
    // ============================================================================
    // The result is at least 1 and at most one above the topmost tray.

    proptest! {
        #[test]
        fn prop_assigned_dot_is_bounded(occupied in occupied_strategy()) {
            let assigned = TrayPositionAssigner::assign_from_dots(to_dots(occupied.iter().copied()));
            let highest = occupied.iter().next_back().copied().unwrap_or(0);

            prop_assert!(assigned.value() >= 1);
            prop_assert!(assigned.value() <= highest + 1);
        }
    }

    // ============================================================================
    // PROPERTY 4: RENUMBERING
    // ============================================================================
    // Display order is dense, follows dot order, and leaves dots untouched.

    proptest! {
        #[test]
        fn prop_renumber_is_dense_and_keeps_dots(occupied in occupied_strategy()) {
            let profile = ConfigurationTypeProfile::builder("p", 200).build().unwrap();
            let mut trays: Vec<Tray> = occupied
                .iter()
                .rev()
                .zip(1u32..)
                .map(|(dot, id)| {
                    Tray::new(TrayId::new(id), DotPosition::try_from(*dot).unwrap(), &profile)
                })
                .collect();

            TrayPositionAssigner::renumber_for_display(&mut trays);

            let dots: Vec<u16> = trays.iter().map(|t| t.dot_position().value()).collect();
            let expected: Vec<u16> = occupied.iter().copied().collect();
            prop_assert_eq!(dots, expected);

            for (index, tray) in trays.iter().enumerate() {
                prop_assert_eq!(tray.display_order(), index + 1);
            }
        }
    }
}

//! Property-based tests for collision detection.

#[cfg(test)]
mod tests {
    use crate::layout::CollisionDetector;
    use crate::profile::{ConfigurationTypeProfile, DotPosition};
    use crate::rack::{Tray, TrayId};
    use proptest::prelude::*;

    // ============================================================================
    // STRATEGY DEFINITIONS
    // ============================================================================

    fn profile(margin: u32) -> ConfigurationTypeProfile {
        ConfigurationTypeProfile::builder("p", 60)
            .dot_delta(25)
            .min_tray_height(100)
            .collision_margin(margin)
            .reserved_dot(60)
            .elevator_reservation("lift", [1, 2, 3])
            .double_dot(10)
            .double_dot(30)
            .build()
            .unwrap()
    }

    fn trays_strategy() -> impl Strategy<Value = Vec<u16>> {
        proptest::collection::btree_set(1u16..=60, 0..20)
            .prop_map(|dots| dots.into_iter().collect())
    }

    fn build_trays(dots: &[u16], profile: &ConfigurationTypeProfile) -> Vec<Tray> {
        dots.iter()
            .zip(1u32..)
            .map(|(dot, id)| Tray::new(TrayId::new(id), DotPosition::try_from(*dot).unwrap(), profile))
            .collect()
    }

    // ============================================================================
    // PROPERTY 1: IDEMPOTENCE
    // ============================================================================

    proptest! {
        #[test]
        fn prop_detect_is_idempotent(
            dots in trays_strategy(),
            margin in 0u32..50,
            lift in any::<bool>(),
        ) {
            let profile = profile(margin);
            let trays = build_trays(&dots, &profile);
            let elevator = lift.then_some("lift");

            let first = CollisionDetector::detect(&trays, &profile, elevator);
            let second = CollisionDetector::detect(&trays, &profile, elevator);
            prop_assert_eq!(first, second);
        }
    }

    // ============================================================================
    // PROPERTY 2: ORDER INDEPENDENCE
    // ============================================================================
    // The report does not depend on the order trays are passed in.

    proptest! {
        #[test]
        fn prop_detect_ignores_tray_order(
            dots in trays_strategy(),
            margin in 0u32..50,
        ) {
            let profile = profile(margin);
            let trays = build_trays(&dots, &profile);
            let mut reversed = trays.clone();
            reversed.reverse();

            prop_assert_eq!(
                CollisionDetector::detect(&trays, &profile, None),
                CollisionDetector::detect(&reversed, &profile, None)
            );
        }
    }

    // ============================================================================
    // PROPERTY 3: COLLISIONS COME IN PAIRS
    // ============================================================================
    // A flagged tray always has at least one overlapping partner.

    proptest! {
        #[test]
        fn prop_collisions_have_partners(
            dots in trays_strategy(),
            margin in 0u32..50,
        ) {
            let profile = profile(margin);
            let trays = build_trays(&dots, &profile);
            let report = CollisionDetector::detect(&trays, &profile, None);

            prop_assert_ne!(report.colliding().count(), 1);
            for tray in &trays {
                let (lo, hi) = CollisionDetector::footprint(tray, &profile);
                let has_partner = trays.iter().filter(|other| other.id() != tray.id()).any(|other| {
                    let (other_lo, other_hi) = CollisionDetector::footprint(other, &profile);
                    lo < other_hi && other_lo < hi
                });
                prop_assert_eq!(report.get(tray.id()).unwrap().has_collision, has_partner);
            }
        }
    }

    // ============================================================================
    // PROPERTY 4: MARGIN MONOTONICITY
    // ============================================================================
    // Widening the margin never clears a collision.

    proptest! {
        #[test]
        fn prop_larger_margin_keeps_collisions(
            dots in trays_strategy(),
            margin in 0u32..25,
            extra in 0u32..25,
        ) {
            let narrow = profile(margin);
            let wide = profile(margin + extra);
            let trays = build_trays(&dots, &narrow);

            let narrow_report = CollisionDetector::detect(&trays, &narrow, None);
            let wide_report = CollisionDetector::detect(&trays, &wide, None);
            for id in narrow_report.colliding() {
                prop_assert!(wide_report.get(id).unwrap().has_collision);
            }
        }
    }
}

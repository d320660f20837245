//! Property-based tests for product placement and tray height.

#[cfg(test)]
mod tests {
    use crate::layout::{HeightResolver, ProductPlacer};
    use crate::product::Product;
    use crate::profile::{ConfigurationTypeProfile, DotPosition};
    use crate::rack::{Tray, TrayId};
    use proptest::prelude::*;

    // ============================================================================
    // STRATEGY DEFINITIONS
    // ============================================================================

    fn product_strategy() -> impl Strategy<Value = Product> {
        (1u32..=300, 1u32..=400, 1u32..=400, any::<bool>())
            .prop_map(|(width, height, depth, stable)| Product::new(width, height, depth, stable))
    }

    /// A sequence of operations: `Ok` places a product, `Err` removes by index.
    fn operations_strategy() -> impl Strategy<Value = Vec<Result<Product, usize>>> {
        proptest::collection::vec(
            prop_oneof![
                4 => product_strategy().prop_map(Ok),
                1 => (0usize..10).prop_map(Err),
            ],
            0..30,
        )
    }

    fn setup(width: u32) -> (ConfigurationTypeProfile, Tray) {
        let profile = ConfigurationTypeProfile::builder("p", 40)
            .tray_width(width)
            .build()
            .unwrap();
        let tray = Tray::new(TrayId::new(1), DotPosition::FIRST, &profile);
        (profile, tray)
    }

    // ============================================================================
    // PROPERTY 1: NO OVERLAP
    // ============================================================================
    // After any sequence of placements and removals, product intervals on a
    // tray are disjoint and lie inside the tray.

    proptest! {
        #[test]
        fn prop_products_never_overlap(
            width in 100u32..=1000,
            operations in operations_strategy(),
        ) {
            let (profile, mut tray) = setup(width);

            for operation in operations {
                match operation {
                    Ok(product) => {
                        let _ = ProductPlacer::place(product, &mut tray, &profile);
                    }
                    Err(index) => {
                        let _ = ProductPlacer::remove(&mut tray, index);
                    }
                }
            }

            let products = tray.products();
            for placed in products {
                prop_assert!(placed.right() <= tray.width());
            }
            for pair in products.windows(2) {
                prop_assert!(
                    pair[0].right() <= pair[1].x_offset(),
                    "[{}, {}) overlaps [{}, {})",
                    pair[0].x_offset(), pair[0].right(),
                    pair[1].x_offset(), pair[1].right()
                );
            }
        }
    }

    // ============================================================================
    // PROPERTY 2: INDICES FOLLOW OFFSETS
    // ============================================================================
    // Products are stored in ascending offset order and their on-tray index
    // is their position in that order.

    proptest! {
        #[test]
        fn prop_indices_are_dense(
            products in proptest::collection::vec(product_strategy(), 0..15),
        ) {
            let (profile, mut tray) = setup(640);
            for product in products {
                let _ = ProductPlacer::place(product, &mut tray, &profile);
            }

            for (index, placed) in tray.products().iter().enumerate() {
                prop_assert_eq!(placed.on_tray_index(), index);
            }
        }
    }

    // ============================================================================
    // PROPERTY 3: FAILED PLACEMENT LEAVES THE TRAY UNCHANGED
    // ============================================================================

    proptest! {
        #[test]
        fn prop_no_fit_does_not_mutate(
            products in proptest::collection::vec(product_strategy(), 1..20),
        ) {
            let (profile, mut tray) = setup(300);
            for product in products {
                let before = tray.clone();
                if ProductPlacer::place(product, &mut tray, &profile).is_err() {
                    prop_assert_eq!(&tray, &before);
                }
            }
        }
    }

    // ============================================================================
    // PROPERTY 4: HEIGHT MONOTONICITY
    // ============================================================================
    // Adding a product never lowers the tray height, and the height never
    // drops below the profile minimum.

    proptest! {
        #[test]
        fn prop_height_never_drops_on_add(
            products in proptest::collection::vec(product_strategy(), 1..15),
        ) {
            let (profile, mut tray) = setup(1000);
            let mut previous = HeightResolver::resolve(&mut tray, &profile);

            for product in products {
                if ProductPlacer::place(product, &mut tray, &profile).is_ok() {
                    let height = HeightResolver::resolve(&mut tray, &profile);
                    prop_assert!(height >= previous);
                    prop_assert!(height >= profile.min_tray_height);
                    previous = height;
                }
            }
        }
    }

    // ============================================================================
    // PROPERTY 5: LEFTMOST FIT
    // ============================================================================
    // The chosen offset is free, and every smaller offset would overlap.

    proptest! {
        #[test]
        fn prop_offset_is_leftmost(
            products in proptest::collection::vec(product_strategy(), 1..10),
            probe in product_strategy(),
        ) {
            let (profile, mut tray) = setup(640);
            for product in products {
                let _ = ProductPlacer::place(product, &mut tray, &profile);
            }

            if let Ok(x) = ProductPlacer::find_offset(&probe, &tray, &profile) {
                for earlier in 0..x {
                    let right = earlier + probe.width;
                    prop_assert!(tray.products().iter().any(|p| p.overlaps(earlier, right)));
                }
            }
        }
    }
}

//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::output::OutputFormat;
use crate::profile::ConfigurationTypeProfile;
use proptest::prelude::*;

// Distinct names within one config; merging is what introduces overlap
fn profiles_strategy() -> impl Strategy<Value = Vec<ConfigurationTypeProfile>> {
    prop::collection::btree_map("[a-c]", 1u16..=60, 0..4).prop_map(|profiles| {
        profiles
            .into_iter()
            .map(|(name, dots)| ConfigurationTypeProfile::builder(name, dots).build().unwrap())
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(profiles_strategy()),
        prop::option::of("[a-z]{1,10}"),
        prop::option::of(0u32..50),
        prop::option::of(1u32..500),
        prop::option::of(prop_oneof![Just(OutputFormat::Human), Just(OutputFormat::Json)]),
    )
        .prop_map(
            |(profiles, elevator, collision_margin, max_product_height, output_format)| Config {
                profiles,
                elevator,
                collision_margin,
                max_product_height,
                output_format,
            },
        )
}

proptest! {
    // Scalar fields from the higher-precedence source win when present
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.elevator.as_ref(),
            high.elevator.as_ref().or(low.elevator.as_ref())
        );
        prop_assert_eq!(merged.collision_margin, high.collision_margin.or(low.collision_margin));
        prop_assert_eq!(
            merged.max_product_height,
            high.max_product_height.or(low.max_product_height)
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_with_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Every profile name from either side survives, and the higher
    // precedence definition is the one kept
    #[test]
    fn config_merge_profiles_by_name(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let merged_profiles = merged.profiles.clone().unwrap_or_default();
        for profile in low.profiles.iter().flatten().chain(high.profiles.iter().flatten()) {
            prop_assert!(merged_profiles.iter().any(|p| p.name == profile.name));
        }

        if let Some(high_profiles) = &high.profiles {
            for merged_profile in &merged_profiles {
                if let Some(winner) = high_profiles.iter().find(|p| p.name == merged_profile.name) {
                    prop_assert_eq!(merged_profile.amount_dots, winner.amount_dots);
                }
            }
        }
    }
}

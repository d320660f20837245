//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Profiles accumulate by name; everything else is overwritten.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;
use crate::profile::ConfigurationTypeProfile;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use rackplan::config::{Config, ConfigMerger};
///
/// let low = Config { elevator: Some("low".to_string()), ..Default::default() };
/// let high = Config { elevator: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.elevator, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Profiles: accumulated; a source profile replaces a target profile
    ///   with the same name and keeps its position
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.elevator.is_some() {
            target.elevator.clone_from(&source.elevator);
        }

        if source.collision_margin.is_some() {
            target.collision_margin = source.collision_margin;
        }

        if source.max_product_height.is_some() {
            target.max_product_height = source.max_product_height;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_profiles) = source.profiles {
            let target_profiles = target.profiles.get_or_insert_with(Vec::new);
            Self::merge_profiles(target_profiles, source_profiles);
        }
    }

    fn merge_profiles(
        target: &mut Vec<ConfigurationTypeProfile>,
        source: &[ConfigurationTypeProfile],
    ) {
        for profile in source {
            match target.iter_mut().find(|p| p.name == profile.name) {
                Some(existing) => existing.clone_from(profile),
                None => target.push(profile.clone()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::path::PathBuf;

    fn profile(name: &str, dots: u16) -> ConfigurationTypeProfile {
        ConfigurationTypeProfile::builder(name, dots).build().unwrap()
    }

    #[test]
    fn test_merge_simple_fields() {
        let mut target = Config {
            elevator: Some("lift".into()),
            collision_margin: Some(1),
            ..Default::default()
        };
        let source = Config {
            collision_margin: Some(4),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(target.elevator, Some("lift".into()));
        assert_eq!(target.collision_margin, Some(4));
        assert_eq!(target.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_merge_profiles_by_name() {
        let mut target = Config {
            profiles: Some(vec![profile("a", 10), profile("b", 20)]),
            ..Default::default()
        };
        let source = Config {
            profiles: Some(vec![profile("b", 30), profile("c", 40)]),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        let merged: Vec<(&str, u16)> = target
            .profiles
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| (p.name.as_str(), p.amount_dots))
            .collect();
        assert_eq!(merged, vec![("a", 10), ("b", 30), ("c", 40)]);
    }

    #[test]
    fn test_merge_sources_in_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("user.yaml"),
                precedence: 1,
                config: Config {
                    max_product_height: Some(300),
                    ..Default::default()
                },
            },
            ConfigSource {
                path: PathBuf::from("rackplan.yaml"),
                precedence: 2,
                config: Config {
                    max_product_height: Some(320),
                    ..Default::default()
                },
            },
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.max_product_height, Some(320));
    }
}

//! Property tests for the version registry.

use proptest::prelude::*;

use keystone::domain::entities::VersionRegistry;
use keystone::domain::value_objects::Version;
use keystone::ConfigurationError;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second registration of a name in one pass is rejected,
    /// even with the same version, and the first version stays pinned.
    #[test]
    fn property_duplicate_registration_is_rejected(
        name in "[A-Za-z][A-Za-z0-9.-]{0,15}",
        first in "[0-9]{1,2}\\.[0-9]{1,2}",
        second in "[0-9]{1,2}\\.[0-9]{1,2}",
    ) {
        let mut builder = VersionRegistry::builder();
        builder.set(name.as_str(), Version::new(first.as_str())).unwrap();

        let err = builder.set(name.as_str(), Version::new(second.as_str())).unwrap_err();
        let is_duplicate = matches!(
            &err,
            ConfigurationError::DuplicateKey { name: n, .. } if n == &name
        );
        prop_assert!(is_duplicate);

        let registry = builder.build();
        prop_assert_eq!(registry.get(&name).unwrap(), &Version::new(first.as_str()));
    }

    /// PROPERTY: distinct names never collide and lookups return what was set.
    #[test]
    fn property_distinct_names_are_all_registered(
        entries in proptest::collection::btree_map("[a-z]{1,8}", "[0-9]{1,2}\\.[0-9]{1,2}", 0..12),
    ) {
        let mut builder = VersionRegistry::builder();
        for (name, version) in &entries {
            builder.set(name.as_str(), Version::new(version.as_str())).unwrap();
        }
        let registry = builder.build();

        prop_assert_eq!(registry.len(), entries.len());
        for (name, version) in &entries {
            prop_assert_eq!(registry.get(name).unwrap().as_str(), version.as_str());
        }
        prop_assert!(!registry.contains("not-registered"));
    }
}

//! Property tests for convention selection of test-only modules.

use proptest::prelude::*;

use keystone::domain::entities::Module;
use keystone::domain::policies::{ConventionSelector, DEFAULT_TEST_PREFIX};
use keystone::domain::value_objects::{Convention, ModuleName, Role};

fn declared_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Standard), Just(Role::TestOnly)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a prefixed module is test-only whatever it declares, and is
    /// never published nor given module export checks.
    #[test]
    fn property_prefixed_modules_are_never_published(
        suffix in "[a-z][a-z0-9-]{0,12}",
        declared in declared_role(),
    ) {
        let selector = ConventionSelector::default();
        let module = Module::new(format!("{}{}", DEFAULT_TEST_PREFIX, suffix).as_str(), declared);

        let (role, conventions) = selector.select(&module);

        prop_assert_eq!(role, Role::TestOnly);
        prop_assert!(!conventions.contains(Convention::Publishing));
        prop_assert!(!conventions.contains(Convention::Module));
        prop_assert!(conventions.contains(Convention::Common));
    }

    /// PROPERTY: classification is a pure function of name and declared role.
    #[test]
    fn property_selection_is_deterministic(
        name in "[a-z][a-z0-9-]{0,12}",
        declared in declared_role(),
        prefix in "[a-z]{1,4}-",
    ) {
        let selector = ConventionSelector::new(prefix.clone());
        let module = Module::new(name.as_str(), declared);

        let first = selector.select(&module);
        let second = selector.select(&module);
        prop_assert_eq!(&first, &second);

        let prefixed = ModuleName::new(name.as_str()).has_prefix(&prefix);
        let test_only = first.0 == Role::TestOnly;
        prop_assert_eq!(test_only, prefixed || declared == Role::TestOnly);
        prop_assert_eq!(first.1.contains(Convention::Publishing), !test_only);
    }
}

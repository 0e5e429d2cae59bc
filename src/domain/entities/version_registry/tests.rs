use super::*;

#[test]
fn registry_get_after_set() {
    let mut builder = VersionRegistry::builder();
    builder.set("junit", Version::new("5.11.4")).unwrap();
    builder.set("hamcrest", Version::new("3.0")).unwrap();

    let registry = builder.build();
    assert_eq!(registry.get("junit").unwrap().as_str(), "5.11.4");
    assert_eq!(registry.len(), 2);
}

#[test]
fn registry_rejects_second_registration() {
    let mut builder = VersionRegistry::builder();
    builder.set("guava", Version::new("33.4.0-jre")).unwrap();

    let err = builder.set("guava", Version::new("33.3.1-jre")).unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::DuplicateKey {
            name: "guava".to_string(),
            existing: Version::new("33.4.0-jre"),
            rejected: Version::new("33.3.1-jre"),
        }
    );
    assert_eq!(builder.len(), 1);
}

#[test]
fn registry_rejects_identical_duplicate() {
    let mut builder = VersionRegistry::builder();
    builder.set("log4j", Version::new("2.24.3")).unwrap();
    assert!(builder.set("log4j", Version::new("2.24.3")).is_err());
}

#[test]
fn registry_missing_lookup_is_an_error() {
    let registry = VersionRegistry::builder().build();
    let err = registry.get("creekBase").unwrap_err();
    assert_eq!(err.name, "creekBase");

    let scoped = err.for_module(&ModuleName::new("util"));
    assert_eq!(
        scoped,
        ConfigurationError::UnknownDependency {
            module: ModuleName::new("util"),
            name: "creekBase".to_string(),
        }
    );
}

#[test]
fn registry_iterates_sorted_by_name() {
    let mut builder = VersionRegistry::builder();
    builder
        .set("spotBugs", Version::new("4.8.6"))
        .unwrap()
        .set("classGraph", Version::new("4.8.177"))
        .unwrap();

    let registry = builder.build();
    let names: Vec<_> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["classGraph", "spotBugs"]);
}

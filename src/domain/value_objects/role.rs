//! Module role value object

use serde::{Deserialize, Serialize};

/// Role of a module in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// A regular library module, consumed through its compiled API
    #[default]
    Standard,
    /// Verifies another module's packaged artifact; never published
    TestOnly,
    /// The workspace root that owns every other module
    Root,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Standard => "standard",
            Role::TestOnly => "test-only",
            Role::Root => "root",
        }
    }

    pub fn is_test_only(&self) -> bool {
        matches!(self, Role::TestOnly)
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Role::Root)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_default_is_standard() {
        assert_eq!(Role::default(), Role::Standard);
    }

    #[test]
    fn role_serde_uses_kebab_case() {
        let role: Role = serde_json::from_str("\"test-only\"").unwrap();
        assert_eq!(role, Role::TestOnly);
        assert_eq!(serde_json::to_string(&Role::Root).unwrap(), "\"root\"");
    }

    #[test]
    fn role_display_matches_serde() {
        for role in [Role::Standard, Role::TestOnly, Role::Root] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json.trim_matches('"'), role.to_string());
        }
    }
}

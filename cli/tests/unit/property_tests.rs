//! Property-based tests for version, environment and workspace-list logic.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use cominty_cli::domain::environment::Environment;
use cominty_cli::domain::version::latest_version;
use cominty_cli::domain::{
    Version, ensure_publishable, is_valid_environment, parse_workspace_list, validate_version,
};

proptest! {
    /// Every well-formed tag validates, parses back to its segments and
    /// prints as the canonical form.
    #[test]
    fn prop_wellformed_tags_parse(major in 0u64..10_000, minor in 0u64..10_000, patch in 0u64..10_000) {
        let tag = format!("v{major}.{minor}.{patch}");
        prop_assert!(validate_version(&tag));
        let v = Version::parse(&tag).expect("valid");
        prop_assert_eq!(v, Version::new(major, minor, patch));
        prop_assert_eq!(v.to_string(), tag);
    }

    /// Tags without the lowercase `v` prefix never validate.
    #[test]
    fn prop_missing_prefix_rejected(major in 0u64..1000, minor in 0u64..1000, patch in 0u64..1000) {
        let bare = format!("{major}.{minor}.{patch}");
        let upper = format!("V{major}.{minor}.{patch}");
        prop_assert!(!validate_version(&bare));
        prop_assert!(!validate_version(&upper));
    }

    /// Arbitrary strings outside the grammar are rejected and never panic.
    #[test]
    fn prop_arbitrary_strings_never_panic(s in "\\PC*") {
        if !validate_version(&s) {
            prop_assert!(Version::parse(&s).is_err());
        }
    }

    /// Version ordering agrees with tuple ordering.
    #[test]
    fn prop_ordering_is_lexicographic(
        a in (0u64..50, 0u64..50, 0u64..50),
        b in (0u64..50, 0u64..50, 0u64..50),
    ) {
        let va = Version::new(a.0, a.1, a.2);
        let vb = Version::new(b.0, b.1, b.2);
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
    }

    /// A candidate is publishable exactly when it is strictly greater than the latest.
    #[test]
    fn prop_publishable_iff_strictly_newer(
        a in (0u64..20, 0u64..20, 0u64..20),
        b in (0u64..20, 0u64..20, 0u64..20),
    ) {
        let candidate = Version::new(a.0, a.1, a.2);
        let latest = Version::new(b.0, b.1, b.2);
        prop_assert_eq!(ensure_publishable(candidate, Some(latest)).is_ok(), candidate > latest);
        prop_assert!(ensure_publishable(candidate, None).is_ok());
    }

    /// The latest version is the maximum of the valid tags; junk is ignored.
    #[test]
    fn prop_latest_is_max(versions in prop::collection::vec((0u64..30, 0u64..30, 0u64..30), 0..12)) {
        let mut tags: Vec<String> = versions
            .iter()
            .map(|(x, y, z)| format!("v{x}.{y}.{z}"))
            .collect();
        tags.push("latest".to_string());
        tags.push("sha-3f4e2a1".to_string());
        let expected = versions.iter().map(|&(x, y, z)| Version::new(x, y, z)).max();
        prop_assert_eq!(latest_version(tags.iter().map(String::as_str)), expected);
    }

    /// Only the three known names are environments.
    #[test]
    fn prop_environment_names_closed(name in "[a-z]{0,12}") {
        let known = Environment::ALL.iter().any(|e| e.as_str() == name);
        prop_assert_eq!(is_valid_environment(&name), known);
    }

    /// Parsing a rendered listing returns the names in order, whichever one is active.
    #[test]
    fn prop_workspace_listing_round_trips(
        names in prop::collection::vec("[a-z][a-z0-9_-]{0,10}", 1..6),
        active in 0usize..6,
    ) {
        let active = active % names.len();
        let listing: String = names
            .iter()
            .enumerate()
            .map(|(i, n)| if i == active { format!("* {n}\n") } else { format!("  {n}\n") })
            .collect();
        prop_assert_eq!(parse_workspace_list(&format!("{listing}\n")), names);
    }
}

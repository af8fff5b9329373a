//! Property-based tests for `git submodule` output parsing.
//!
//! These tests use proptest to generate random submodule listings and
//! verify that the discovery invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::git::{component_identities, parse_submodule_status};
    use proptest::prelude::*;

    /// One listing line: optional status marker, commit, path, optional
    /// descriptor.
    fn submodule_line() -> impl Strategy<Value = String> {
        (
            prop_oneof![Just(" "), Just("-"), Just("+"), Just("U")],
            "[0-9a-f]{40}",
            prop_oneof![
                "components/[a-z0-9_]{1,12}",
                "(devtools|vendor)/[a-z0-9_]{1,12}",
            ],
            proptest::option::of("[0-9a-z.-]{1,12}"),
        )
            .prop_map(|(status, commit, path, descriptor)| match descriptor {
                Some(d) => format!("{}{} {} ({})", status, commit, path, d),
                None => format!("{}{} {}", status, commit, path),
            })
    }

    fn listing() -> impl Strategy<Value = String> {
        proptest::collection::vec(submodule_line(), 0..30).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        /// Property: identities never keep the `components/` prefix
        #[test]
        fn identities_have_prefix_stripped(output in listing()) {
            for identity in component_identities(&output) {
                prop_assert!(!identity.starts_with("components/"));
                prop_assert!(!identity.is_empty());
            }
        }

        /// Property: identities are strictly ascending (sorted, no duplicates)
        #[test]
        fn identities_sorted_and_unique(output in listing()) {
            let identities = component_identities(&output);
            for pair in identities.windows(2) {
                prop_assert!(pair[0] < pair[1], "{:?} not strictly ascending", pair);
            }
        }

        /// Property: every component line yields an identity, others do not
        #[test]
        fn identities_match_component_lines(output in listing()) {
            let identities = component_identities(&output);
            for line in output.lines() {
                let path = line.split_whitespace().nth(1).unwrap();
                if let Some(name) = path.strip_prefix("components/") {
                    prop_assert!(identities.iter().any(|id| id == name));
                } else {
                    prop_assert!(!identities.iter().any(|id| id == path));
                }
            }
        }

        /// Property: parsing is deterministic
        #[test]
        fn parsing_is_deterministic(output in listing()) {
            prop_assert_eq!(component_identities(&output), component_identities(&output));
        }

        /// Property: every non-empty line parses into a record
        #[test]
        fn every_line_parses(output in listing()) {
            let expected = output.lines().filter(|l| !l.trim().is_empty()).count();
            prop_assert_eq!(parse_submodule_status(&output).len(), expected);
        }
    }
}

//! Property-based tests for derived invocations.
//!
//! These tests use proptest to generate random parent flags and caller
//! parameters and verify that the forwarded global options always reflect
//! the parent invocation.

#[cfg(test)]
mod proptest_tests {
    use crate::definition::{InputArgument, InputDefinition, InputOption, GLOBAL_OPTIONS};
    use crate::input::{Input, Parameters, ValueMap};
    use crate::meta::derive_parameters;
    use proptest::prelude::*;
    use serde_json::Value;

    fn parent_input(no_debug: bool, quiet: bool, verbose: bool) -> Input {
        let mut options = ValueMap::new();
        options.insert("no-debug".to_string(), Value::Bool(no_debug));
        options.insert("quiet".to_string(), Value::Bool(quiet));
        options.insert("verbose".to_string(), Value::Bool(verbose));
        Input::new(ValueMap::new(), options)
    }

    fn parameters_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
        prop::collection::vec(
            (
                prop_oneof![
                    Just("--quiet".to_string()),
                    Just("--verbose".to_string()),
                    Just("--no-debug".to_string()),
                    "[a-z]{1,8}",
                ],
                any::<bool>(),
            ),
            0..6,
        )
    }

    proptest! {
        /// Property: the three forwarded options equal the parent's values,
        /// whatever the caller passed under the same keys
        #[test]
        fn forwarded_options_match_parent(
            no_debug in any::<bool>(),
            quiet in any::<bool>(),
            verbose in any::<bool>(),
            entries in parameters_strategy(),
        ) {
            let parent = parent_input(no_debug, quiet, verbose);
            let parameters: Parameters = entries
                .into_iter()
                .map(|(key, value)| (key, Value::Bool(value)))
                .collect();

            let derived = derive_parameters(parameters, &parent);

            prop_assert_eq!(derived.get("--no-debug"), Some(&Value::Bool(no_debug)));
            prop_assert_eq!(derived.get("--quiet"), Some(&Value::Bool(quiet)));
            prop_assert_eq!(derived.get("--verbose"), Some(&Value::Bool(verbose)));
        }

        /// Property: caller entries that are not forwarded survive unchanged
        #[test]
        fn non_forwarded_entries_are_preserved(
            entries in prop::collection::btree_map("[a-z]{1,8}", "[a-z0-9 ]{0,12}", 0..6),
        ) {
            let parameters: Parameters = entries
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();

            let derived = derive_parameters(parameters, &Input::default());

            prop_assert_eq!(derived.len(), entries.len() + GLOBAL_OPTIONS.len());
            for (key, value) in &entries {
                prop_assert_eq!(derived.get(key), Some(&Value::String(value.clone())));
            }
        }

        /// Property: a derived invocation always binds against a definition
        /// that only declares the global options plus the caller's arguments
        #[test]
        fn derived_invocation_binds(
            quiet in any::<bool>(),
            verbose in any::<bool>(),
            target in "[a-z]{1,10}",
            mode in prop::option::of("[a-z]{1,6}"),
        ) {
            let mut definition = InputDefinition::new();
            definition
                .add_argument(InputArgument::required("target", "Target"))
                .add_option(InputOption::value("mode", "Mode"));

            let mut parameters = Parameters::new().with("target", target.clone());
            if let Some(mode) = &mode {
                parameters.insert("--mode", mode.clone());
            }
            let parent = parent_input(false, quiet, verbose);

            let input = definition
                .bind("sub", &derive_parameters(parameters, &parent))
                .unwrap();

            prop_assert_eq!(input.argument_str("target"), Some(target.as_str()));
            prop_assert_eq!(input.flag("quiet"), quiet);
            prop_assert_eq!(input.flag("verbose"), verbose);
            prop_assert_eq!(input.option_str("mode"), mode.as_deref());
        }
    }
}

use brushgen::{build_tree, emit_dictionary, BrushDefinition, Theme, ThemeValues, BRUSH_PREFIX};
use proptest::prelude::*;

// Strategy for generating a brush name: the well-known prefix plus one to
// three capitalized segments.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z]{0,5}", 1..4)
        .prop_map(|segments| format!("{}{}", BRUSH_PREFIX, segments.join(".")))
}

// Strategy for generating a catalogue of definitions with distinct names.
// Color values are derived from the record index so any reordering of the
// input is observable in the emitted documents.
fn catalogue_strategy() -> impl Strategy<Value = Vec<BrushDefinition>> {
    prop::collection::btree_set(name_strategy(), 0..16).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                BrushDefinition::new(
                    name,
                    ThemeValues::new(format!("#FF{:06X}", i), format!("#AA{:06X}", i)),
                    Vec::new(),
                )
                .unwrap()
            })
            .collect()
    })
}

// A catalogue together with a shuffled copy of itself.
fn permuted_catalogue_strategy(
) -> impl Strategy<Value = (Vec<BrushDefinition>, Vec<BrushDefinition>)> {
    catalogue_strategy()
        .prop_flat_map(|defs| (Just(defs.clone()), Just(defs).prop_shuffle()))
}

// Extracts the x:Key attribute of a dictionary entry line, if present.
fn entry_key(line: &str) -> Option<&str> {
    let rest = line.split("x:Key=\"").nth(1)?;
    rest.split('"').next()
}

proptest! {
    #[test]
    fn test_emission_is_deterministic(defs in catalogue_strategy()) {
        for theme in Theme::ALL {
            let first = emit_dictionary(theme, &defs);
            let second = emit_dictionary(theme, &defs);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_emission_is_order_invariant((defs, shuffled) in permuted_catalogue_strategy()) {
        for theme in Theme::ALL {
            prop_assert_eq!(
                emit_dictionary(theme, &defs),
                emit_dictionary(theme, &shuffled)
            );
        }
    }

    #[test]
    fn test_emitted_documents_are_forward_reference_free(defs in catalogue_strategy()) {
        for theme in Theme::ALL {
            let document = emit_dictionary(theme, &defs);
            let mut seen_colors = Vec::new();

            for line in document.lines() {
                if line.trim_start().starts_with("<Color ") {
                    seen_colors.push(entry_key(line).unwrap().to_string());
                } else if let Some(reference) = line.split("{StaticResource ").nth(1) {
                    let key = reference.split('}').next().unwrap();
                    prop_assert!(
                        seen_colors.iter().any(|c| c == key),
                        "brush references '{}' before it is defined", key
                    );
                }
            }
        }
    }

    #[test]
    fn test_emitted_entry_count_matches_catalogue(defs in catalogue_strategy()) {
        let document = emit_dictionary(Theme::Light, &defs);
        let entries = document
            .lines()
            .filter(|line| entry_key(line).is_some())
            .count();
        prop_assert_eq!(entries, defs.len() * 2);
    }

    #[test]
    fn test_tree_holds_every_definition_exactly_once(defs in catalogue_strategy()) {
        let tree = build_tree(&defs);
        prop_assert_eq!(tree.iter().count(), defs.len());

        let mut names: Vec<&str> = tree.iter().map(|d| d.name()).collect();
        names.sort_unstable();
        let mut expected: Vec<&str> = defs.iter().map(|d| d.name()).collect();
        expected.sort_unstable();
        prop_assert_eq!(names, expected);
    }
}

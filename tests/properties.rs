//! Property tests for registry invariants.

use flexasset::{AssetKind, AssetRegistry, MemoryResolver};
use proptest::prelude::*;

fn area_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("default".to_string()),
        Just("admin".to_string()),
        Just("common".to_string()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn adding_an_existing_path_twice_adds_once(name in "[a-z]{1,10}", area in area_strategy()) {
        let path = format!("css/{}.css", name);
        let resolver = MemoryResolver::new().with_file(format!("assets/{}", path));
        let mut registry = AssetRegistry::new(resolver);

        let before = registry.css(&area).len();
        registry.add_css(&path, &area);
        registry.add_css(&path, &area);

        prop_assert_eq!(registry.css(&area).len(), before + 1);
        prop_assert!(registry.errors().is_empty());
    }

    #[test]
    fn blank_input_changes_nothing(blank in "[ \t\n]{0,6}", area in area_strategy()) {
        let mut registry = AssetRegistry::new(MemoryResolver::new());

        registry.add_css(&blank, &area);
        registry.add_js(&blank, &area);
        registry.add_inline_css(&blank, &area);
        registry.add_inline_js(&blank, &area);

        prop_assert!(registry.css(&area).is_empty());
        prop_assert!(registry.js(&area).is_empty());
        prop_assert!(registry.inline_css(&area).is_empty());
        prop_assert!(registry.inline_js(&area).is_empty());
        prop_assert!(registry.errors().is_empty());
    }

    #[test]
    fn missing_paths_are_recorded_in_order(names in proptest::collection::vec("[a-z]{1,6}", 1..8)) {
        let mut registry = AssetRegistry::new(MemoryResolver::new());
        let paths: Vec<String> = names.iter().map(|n| format!("js/{}.js", n)).collect();

        for path in &paths {
            registry.add_js(path, "default");
        }

        prop_assert!(registry.js("default").is_empty());
        prop_assert_eq!(registry.errors_of(AssetKind::Js), paths.as_slice());
    }

    #[test]
    fn inline_blocks_are_never_deduplicated(code in "[a-z]{1,5}\\(\\);", times in 1usize..5) {
        let mut registry = AssetRegistry::new(MemoryResolver::new());
        for _ in 0..times {
            registry.add_inline_js(&code, "widgets");
        }

        prop_assert_eq!(registry.inline_js("widgets"), vec![code; times]);
    }
}

//! Property tests for broadcast target resolution
//!
//! For any layout and any active id:
//! - `all` returns the layout unchanged
//! - `others` and `active` partition `all` when the active id is in the layout
//! - every mode returns a subset of the layout, in layout order

use overwatch_core::models::RelevantMaps;
use overwatch_sync::resolve_targets;
use proptest::prelude::*;

fn layout_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,4}", 0..8)
        .prop_map(|ids| ids.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn is_ordered_subset(subset: &[String], layout: &[String]) -> bool {
    let mut remaining = layout.iter();
    subset.iter().all(|id| remaining.any(|candidate| candidate == id))
}

proptest! {
    #[test]
    fn prop_all_is_layout(layout in layout_strategy(), active in "[a-z]{1,4}") {
        prop_assert_eq!(resolve_targets(RelevantMaps::All, &layout, Some(active.as_str())), layout);
    }

    #[test]
    fn prop_others_and_active_partition_all(
        layout in layout_strategy().prop_filter("non-empty", |layout| !layout.is_empty()),
        index in any::<prop::sample::Index>(),
    ) {
        let active = layout[index.index(layout.len())].clone();

        let others = resolve_targets(RelevantMaps::Others, &layout, Some(active.as_str()));
        let selected = resolve_targets(RelevantMaps::Active, &layout, Some(active.as_str()));

        prop_assert_eq!(&selected, &vec![active.clone()]);
        prop_assert!(!others.contains(&active));
        prop_assert_eq!(others.len() + selected.len(), layout.len());
    }

    #[test]
    fn prop_targets_are_ordered_subsets(
        layout in layout_strategy(),
        active in prop::option::of("[a-z]{1,4}"),
    ) {
        for mode in [RelevantMaps::All, RelevantMaps::Others, RelevantMaps::Active] {
            let targets = resolve_targets(mode, &layout, active.as_deref());
            prop_assert!(is_ordered_subset(&targets, &layout));
        }
    }

    #[test]
    fn prop_absent_active_id(layout in layout_strategy()) {
        let absent = "ABSENT";

        prop_assert_eq!(resolve_targets(RelevantMaps::Others, &layout, Some(absent)), layout.clone());
        prop_assert!(resolve_targets(RelevantMaps::Active, &layout, Some(absent)).is_empty());
    }
}

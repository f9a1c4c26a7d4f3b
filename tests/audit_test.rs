use docref::resolution::{find_shadowed, MappingTable, ShadowReason};

#[test]
fn test_well_ordered_table_is_clean() {
    let table = MappingTable::from_pairs(&[
        ("A.B.show_*", "F1"),
        ("A.B.*", "F2"),
        ("A.C.*", "F3"),
    ])
    .unwrap();
    assert!(find_shadowed(&table).is_empty());
}

#[test]
fn test_duplicate_pattern() {
    let table = MappingTable::from_pairs(&[("A.*", "one"), ("B.*", "b"), ("A.*", "two")]).unwrap();
    let shadowed = find_shadowed(&table);
    assert_eq!(shadowed.len(), 1);
    assert_eq!(shadowed[0].entry, 2);
    assert_eq!(shadowed[0].shadowed_by, 0);
    assert_eq!(shadowed[0].reason, ShadowReason::Duplicate);
}

#[test]
fn test_catch_all_before_specific() {
    let table = MappingTable::from_pairs(&[("G.*", "Base"), ("G.H.*", "Specific"), ("G.mute", "M")]).unwrap();
    let shadowed = find_shadowed(&table);
    let entries: Vec<(usize, usize)> = shadowed.iter().map(|s| (s.entry, s.shadowed_by)).collect();
    assert_eq!(entries, vec![(1, 0), (2, 0)]);
    assert!(shadowed
        .iter()
        .all(|s| s.reason == ShadowReason::CoveredByPrefix));
}

#[test]
fn test_sibling_names_are_not_confused() {
    // "Text." is not a prefix of "Texture.".
    let table = MappingTable::from_pairs(&[("T.Text.*", "a"), ("T.Texture.*", "b")]).unwrap();
    assert!(find_shadowed(&table).is_empty());
}

#[test]
fn test_audit_leaves_table_untouched() {
    let table = MappingTable::from_pairs(&[("G.*", "Base"), ("G.H.*", "Specific")]).unwrap();
    let _ = find_shadowed(&table);
    assert_eq!(table.len(), 2);
    assert_eq!(table.first_match("G.H.x").map(|(i, _)| i), Some(0));
}

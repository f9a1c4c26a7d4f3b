use docref::types::*;

#[test]
fn test_mapping_entry_undocumented() {
    assert!(MappingEntry::new("bpy.ops.file.*", "").is_undocumented());
    assert!(!MappingEntry::new("bpy.ops.uv.*", "UV").is_undocumented());
}

#[test]
fn test_outcome_as_str() {
    let documented = Outcome::Documented {
        url: "http://x/A".to_string(),
    };
    assert_eq!(documented.as_str(), "documented");
    assert_eq!(documented.url(), Some("http://x/A"));
    assert_eq!(Outcome::Undocumented.as_str(), "undocumented");
    assert_eq!(Outcome::Unmapped.as_str(), "unmapped");
}

#[test]
fn test_outcome_json_is_tagged() {
    let json = serde_json::to_value(Outcome::Undocumented).unwrap();
    assert_eq!(json["outcome"], "undocumented");

    let json = serde_json::to_value(Outcome::Documented {
        url: "http://x/A".to_string(),
    })
    .unwrap();
    assert_eq!(json["outcome"], "documented");
    assert_eq!(json["url"], "http://x/A");
}

#[test]
fn test_resolution_result_json() {
    let result = ResolutionResult {
        resolved: vec![("A.b".to_string(), "http://x/A".to_string())],
        unresolved: vec!["Z.y".to_string()],
        total: 2,
        resolved_count: 1,
    };
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["total"], 2);
    assert_eq!(json["resolved"][0][1], "http://x/A");
    assert_eq!(json["unresolved"][0], "Z.y");
}

#[test]
fn test_outcome_from_reference() {
    let mut reference = ResolvedReference {
        entry: 3,
        pattern: "A.*".to_string(),
        prefix: "http://x/".to_string(),
        target: "A".to_string(),
        url: Some("http://x/A".to_string()),
    };
    assert_eq!(
        Outcome::from(Some(&reference)),
        Outcome::Documented {
            url: "http://x/A".to_string()
        }
    );

    reference.target.clear();
    reference.url = None;
    assert_eq!(Outcome::from(Some(&reference)), Outcome::Undocumented);
    assert_eq!(Outcome::from(None::<&ResolvedReference>), Outcome::Unmapped);
}

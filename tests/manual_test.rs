use docref::manual::*;
use docref::resolution::find_shadowed;
use docref::types::Outcome;

fn url(target: &str) -> Option<String> {
    Some(format!("{}{}", MANUAL_PREFIX, target))
}

#[test]
fn test_builtin_table_has_every_entry() {
    assert_eq!(builtin_resolver().table().len(), MANUAL_MAPPING.len());
    assert_eq!(builtin_resolver().prefix(), MANUAL_PREFIX);
}

#[test]
fn test_builtin_table_compiles_in_order() {
    let table = builtin_table().expect("built-in patterns compile");
    let patterns: Vec<&str> = table.entries().map(|e| e.pattern.as_str()).collect();
    let expected: Vec<&str> = MANUAL_MAPPING.iter().map(|(p, _)| *p).collect();
    assert_eq!(patterns, expected);
}

#[test]
fn test_modifier_stack_options() {
    let r = builtin_resolver();
    assert_eq!(
        r.resolve("bpy.types.Modifier.show_viewport"),
        url("Modifiers/The_Stack")
    );
    assert_eq!(r.resolve("bpy.types.Modifier.name"), url("Modifiers"));
}

#[test]
fn test_specific_types() {
    let r = builtin_resolver();
    assert_eq!(
        r.resolve("bpy.types.ArrayModifier.count"),
        url("Modifiers/Generate/Array")
    );
    assert_eq!(
        r.resolve("bpy.types.Material.diffuse_color"),
        url("Materials/Properties/Diffuse_Shaders")
    );
    assert_eq!(r.resolve("bpy.types.Material.alpha"), url("Materials"));
    assert_eq!(
        r.resolve("bpy.types.RenderSettings.filepath"),
        url("Render/Output#File_Locations")
    );
    assert_eq!(r.resolve("bpy.types.RenderSettings.fps"), url("Render"));
}

#[test]
fn test_operators() {
    let r = builtin_resolver();
    assert_eq!(
        r.resolve("bpy.ops.image.open"),
        url("Textures/Types/Image")
    );
    assert_eq!(
        r.resolve("bpy.ops.uv.unwrap"),
        url("Textures/Mapping/UV/Layout_Editing")
    );
    assert_eq!(
        r.resolve("bpy.ops.view3d.zoom"),
        url("3D_interaction/Navigating/3D_View")
    );
}

#[test]
fn test_file_operators_are_undocumented() {
    let r = builtin_resolver();
    assert_eq!(r.resolve("bpy.ops.file.select_all"), None);
    assert_eq!(r.outcome("bpy.ops.file.select_all"), Outcome::Undocumented);
}

#[test]
fn test_unknown_identifiers_are_unmapped() {
    let r = builtin_resolver();
    assert_eq!(r.resolve("bpy.ops.paint.brush_stroke"), None);
    assert_eq!(r.outcome("bpy.types.Brush.size"), Outcome::Unmapped);
    assert_eq!(r.resolve("bpy.types.modifier.show_viewport"), None);
}

#[test]
fn test_constraint_mute_goes_to_catch_all() {
    // The catch-all precedes the `mute` entry, so the catch-all wins.
    let r = builtin_resolver();
    assert_eq!(r.resolve("bpy.types.Constraint.mute"), url("Constraints"));
}

#[test]
fn test_audit_finds_known_unreachable_entries() {
    let shadowed = find_shadowed(builtin_resolver().table());
    let patterns: Vec<&str> = shadowed.iter().map(|s| s.pattern.as_str()).collect();
    assert_eq!(
        patterns,
        vec![
            "bpy.types.Constraint.mute",
            "bpy.types.World.*",
            "bpy.types.Texture.*",
        ]
    );
}

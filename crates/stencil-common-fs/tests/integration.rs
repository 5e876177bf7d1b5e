use std::path::PathBuf;
use stencil_common_fs as fs;

#[test]
fn test_category_prefix_calculations() {
    let test_cases = vec![
        ("/cfg/fileTemplates/internal", "/cfg/fileTemplates", "internal"),
        ("/cfg/fileTemplates/includes/", "/cfg/fileTemplates", "includes"),
        ("/cfg/fileTemplates/./code", "/cfg/fileTemplates", "code"),
        ("/cfg/fileTemplates/j2ee/web", "/cfg/fileTemplates", "j2ee/web"),
        ("/cfg/fileTemplates", "/cfg/fileTemplates", "."),
    ];

    for (dir, base, expected) in test_cases {
        let relative = fs::path::relative_to(dir, base);
        assert_eq!(relative, PathBuf::from(expected), "Failed for {dir} relative to {base}");
    }
}

#[test]
fn test_relative_paths_render_with_forward_slashes() {
    let relative = fs::path::relative_to("/x/y/z", "/x");
    assert_eq!(fs::path::to_unix_string(relative), "y/z");
}

#[test]
fn test_read_to_string_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("NewClass.java.ft");
    std::fs::write(&path, "class ${NAME} {}").unwrap();

    let text = fs::read_to_string(&path, fs::DEFAULT_MAX_READ).unwrap();
    assert_eq!(text, "class ${NAME} {}");
}

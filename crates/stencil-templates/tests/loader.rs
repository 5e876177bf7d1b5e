use std::fs;
use std::path::Path;
use std::sync::Arc;

use stencil_common_i18n::Locale;
use stencil_templates::{
    DirectoryResourceProvider, ExtensionRegistry, LoaderOptions, PluginDescriptor,
    StaticPluginRegistry, TemplateSource, TemplatesLoader, Url,
};
use tempfile::tempdir;

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn load(registry: StaticPluginRegistry, config: &Path, locale: Locale) -> TemplatesLoader {
    TemplatesLoader::new(
        LoaderOptions::new(config).with_locale(locale),
        Arc::new(registry),
        Arc::new(ExtensionRegistry::new()),
    )
}

fn single_plugin(dir: &Path) -> StaticPluginRegistry {
    let provider = DirectoryResourceProvider::new([dir]).unwrap();
    StaticPluginRegistry::new().with_plugin(PluginDescriptor::new("java", Arc::new(provider)))
}

#[test]
fn test_new_class_end_to_end() {
    let plugin = tempdir().unwrap();
    let root = plugin.path().join("fileTemplates");
    write(&root, "NewClass.java.ft", "public class ${NAME} {}");
    write(&root, "NewClass.java_en.html", "<p>Creates a class</p>");
    write(&root, "includes/default.html", "<p>Include</p>");

    let config = tempdir().unwrap();
    let loader = load(single_plugin(plugin.path()), config.path(), Locale::new("en", "US"));

    let records = loader.default_manager().default_templates();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name(), "NewClass");
    assert_eq!(record.extension(), "java");
    assert_eq!(record.source(), TemplateSource::Bundled);

    let root_url = Url::from_file_path(&root).unwrap();
    assert_eq!(record.content_url().as_str(), format!("{root_url}/NewClass.java.ft"));
    assert_eq!(
        record.description_url().map(Url::as_str),
        Some(format!("{root_url}/NewClass.java_en.html").as_str())
    );
    assert_eq!(record.text().unwrap(), "public class ${NAME} {}");
    assert_eq!(
        record.description_text().unwrap().as_deref(),
        Some("<p>Creates a class</p>")
    );

    assert_eq!(
        loader.default_include_description().map(Url::as_str),
        Some(format!("{root_url}/includes/default.html").as_str())
    );
    assert!(loader.default_template_description().is_none());

    for manager in &loader.all_managers()[1..] {
        assert!(manager.default_templates().is_empty(), "{} not empty", manager.name());
    }
}

#[test]
fn test_description_follows_locale() {
    let plugin = tempdir().unwrap();
    let root = plugin.path().join("fileTemplates");
    write(&root, "includes/File Header.java.ft", "");
    write(&root, "includes/File Header.java.html", "");
    write(&root, "includes/File Header.java_de.html", "");
    write(&root, "includes/File Header.java_de_AT.html", "");

    let config = tempdir().unwrap();
    let cases = [
        (Locale::new("de", "AT"), "File%20Header.java_de_AT.html"),
        (Locale::new("de", "DE"), "File%20Header.java_de.html"),
        (Locale::new("de", ""), "File%20Header.java_de.html"),
        (Locale::new("fr", "FR"), "File%20Header.java.html"),
    ];

    for (locale, expected) in cases {
        let loader = load(single_plugin(plugin.path()), config.path(), locale.clone());
        let record = &loader.patterns_manager().default_templates()[0];
        assert_eq!(record.name(), "File Header");
        let description = record.description_url().unwrap();
        assert!(
            description.as_str().ends_with(&format!("/includes/{expected}")),
            "{locale}: {description}"
        );
    }
}

#[test]
fn test_root_shared_by_two_plugins_is_loaded_once() {
    let shared = tempdir().unwrap();
    write(&shared.path().join("fileTemplates"), "A.java.ft", "");
    let own = tempdir().unwrap();
    write(&own.path().join("fileTemplates"), "B.java.ft", "");

    let registry = StaticPluginRegistry::new()
        .with_plugin(PluginDescriptor::new(
            "first",
            Arc::new(DirectoryResourceProvider::new([shared.path()]).unwrap()),
        ))
        .with_plugin(PluginDescriptor::new(
            "second",
            Arc::new(DirectoryResourceProvider::new([own.path(), shared.path()]).unwrap()),
        ));

    let config = tempdir().unwrap();
    let loader = load(registry, config.path(), Locale::default());

    let names: Vec<_> = loader
        .default_manager()
        .default_templates()
        .iter()
        .map(|t| t.qualified_name())
        .collect();
    assert_eq!(names, vec!["A.java", "B.java"]);
    assert_eq!(loader.roots().len(), 2);
}

#[test]
fn test_disabled_plugin_contributes_nothing() {
    let plugin = tempdir().unwrap();
    write(&plugin.path().join("fileTemplates"), "A.java.ft", "");
    let provider = DirectoryResourceProvider::new([plugin.path()]).unwrap();
    let registry = StaticPluginRegistry::new()
        .with_plugin(PluginDescriptor::new("off", Arc::new(provider)).with_enabled(false));

    let config = tempdir().unwrap();
    let loader = load(registry, config.path(), Locale::default());
    assert!(loader.roots().is_empty());
    assert!(loader.default_manager().templates().is_empty());
}

#[test]
fn test_customizations_overlay_defaults() {
    let plugin = tempdir().unwrap();
    let root = plugin.path().join("fileTemplates");
    write(&root, "code/Test Method.java.ft", "@Test void m() {}");
    write(&root, "code/Test Method.java.html", "");

    let config = tempdir().unwrap();
    write(config.path(), "code/Test Method.java.ft", "@Test fun m() {}");
    write(config.path(), "code/Setup.java.ft", "");

    let mut loader = load(single_plugin(plugin.path()), config.path(), Locale::default());

    let code = loader.code_manager();
    assert_eq!(code.default_templates().len(), 1);
    let custom = code.find("Test Method.java").unwrap();
    assert_eq!(custom.source(), TemplateSource::Customized);
    assert_eq!(custom.text().unwrap(), "@Test fun m() {}");
    assert!(custom.description_url().is_some());
    assert_eq!(code.templates().len(), 2);

    fs::remove_file(config.path().join("code/Setup.java.ft")).unwrap();
    loader.reload();
    assert_eq!(loader.code_manager().templates().len(), 1);
}

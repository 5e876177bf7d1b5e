//! Bundled file template loading for Stencil
//!
//! Plugins ship default file templates under a `fileTemplates/` resource
//! directory. This crate discovers those directories, sorts every template
//! into a category and pairs it with the best localized description:
//! ```text
//! fileTemplates/
//! ├── default.html                  default template description
//! ├── NewClass.java.ft              "Default" category
//! ├── NewClass.java_en.html         description, English
//! ├── internal/Interface.java.ft    "Internal" category
//! ├── includes/default.html         default include description
//! ├── includes/File Header.java.ft  "Includes" category
//! ├── code/Test Method.java.ft      "Code" category
//! └── j2ee/web.xml.ft               "J2EE" category
//! ```
//!
//! [`TemplatesLoader`] runs the discovery pass; each category's records are
//! then read through its [`CategoryManager`].

pub mod category;
pub mod classify;
pub mod description;
pub mod enumerate;
pub mod filetype;
pub mod loader;
pub mod manager;
pub mod plugin;
pub mod record;
pub mod resource;

pub use category::Category;
pub use filetype::{ExtensionRegistry, FileTypeRegistry};
pub use loader::{LoaderOptions, TemplatesLoader};
pub use manager::CategoryManager;
pub use plugin::{PluginDescriptor, PluginRegistry, StaticPluginRegistry};
pub use record::{TemplateRecord, TemplateSource};
pub use resource::{DirectoryResourceProvider, ResourceProvider};

/// Re-exported so callers can name resource locations.
pub use url::Url;

/// Result type for template loading operations
pub type Result<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while loading templates
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Resource location could not be built or parsed
    #[error("Invalid resource URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Path cannot be expressed as a file URL
    #[error("Invalid resource path: {}", .0.display())]
    InvalidPath(std::path::PathBuf),

    /// Only `file:` resources can be listed and read
    #[error("Unsupported resource URL scheme `{scheme}`: {url}")]
    UnsupportedScheme { scheme: String, url: String },

    /// The file type registry knows no extension for a template file
    #[error("No registered extension for template file `{0}`")]
    UnknownExtension(String),

    /// A resource path that does not name a `.ft` template
    #[error("Not a template path: {0}")]
    InvalidTemplatePath(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reading template or description text failed
    #[error(transparent)]
    Fs(#[from] stencil_common_fs::FsError),
}

//! Template records.

use serde::Serialize;
use url::Url;

use crate::resource::read_url;
use crate::Result;

/// Where a template record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSource {
    /// Shipped by a plugin under its template resource directory.
    Bundled,
    /// Written by the user into the category's directory.
    Customized,
}

/// One named, typed template with an optional localized description.
///
/// Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    name: String,
    extension: String,
    content_url: Url,
    description_url: Option<Url>,
    source: TemplateSource,
}

impl TemplateRecord {
    /// Create a plugin-provided record.
    pub fn bundled(
        name: impl Into<String>,
        extension: impl Into<String>,
        content_url: Url,
        description_url: Option<Url>,
    ) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            content_url,
            description_url,
            source: TemplateSource::Bundled,
        }
    }

    /// Create a user override record.
    pub fn customized(
        name: impl Into<String>,
        extension: impl Into<String>,
        content_url: Url,
        description_url: Option<Url>,
    ) -> Self {
        Self {
            source: TemplateSource::Customized,
            ..Self::bundled(name, extension, content_url, description_url)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `{name}.{extension}`, the key overrides are matched on.
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    pub fn content_url(&self) -> &Url {
        &self.content_url
    }

    pub fn description_url(&self) -> Option<&Url> {
        self.description_url.as_ref()
    }

    pub fn source(&self) -> TemplateSource {
        self.source
    }

    /// Read the template body.
    pub fn text(&self) -> Result<String> {
        read_url(&self.content_url)
    }

    /// Read the description document, if the record has one.
    pub fn description_text(&self) -> Result<Option<String>> {
        self.description_url.as_ref().map(read_url).transpose()
    }
}

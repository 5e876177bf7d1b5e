//! Resource providers and resource root access.
//!
//! A [`ResourceProvider`] plays the part of a plugin class loader: given a
//! resource name it returns every location exposing it. Only `file:` URLs
//! can be listed and read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stencil_common_fs::path::{normalize, to_unix_string};
use tracing::{trace, warn};
use url::{ParseError, Url};
use walkdir::WalkDir;

use crate::{Result, TemplateError};

/// Source of plugin resources.
pub trait ResourceProvider: Send + Sync {
    /// Locations this provider was built from.
    ///
    /// An empty list marks an aggregate development provider whose
    /// resources are already exposed by another one.
    fn urls(&self) -> &[Url];

    /// Every location exposing the resource `name`, in provider order.
    fn resources(&self, name: &str) -> Result<Vec<Url>>;
}

/// Provider backed by a list of local directories.
#[derive(Debug, Clone)]
pub struct DirectoryResourceProvider {
    roots: Vec<PathBuf>,
    urls: Vec<Url>,
}

impl DirectoryResourceProvider {
    /// Create a provider over `roots`, made absolute against the working
    /// directory when relative.
    pub fn new<I, P>(roots: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut abs_roots = Vec::new();
        let mut urls = Vec::new();

        for root in roots {
            let root = absolute(root.as_ref())?;
            urls.push(path_url(&root)?);
            abs_roots.push(root);
        }

        Ok(Self {
            roots: abs_roots,
            urls,
        })
    }

    /// Directories searched, in order.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ResourceProvider for DirectoryResourceProvider {
    fn urls(&self) -> &[Url] {
        &self.urls
    }

    fn resources(&self, name: &str) -> Result<Vec<Url>> {
        let mut found = Vec::new();

        for root in &self.roots {
            let candidate = root.join(name);
            match fs::metadata(&candidate) {
                Ok(meta) if meta.is_dir() => found.push(path_url(&candidate)?),
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => {
                    warn!(root = %candidate.display(), error = %e, "skipping unreadable resource root");
                }
            }
        }

        trace!(name, count = found.len(), "resolved resources");
        Ok(found)
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(std::env::current_dir()?.join(path)))
    }
}

/// File URL of a local path, without a trailing slash.
pub fn path_url(path: &Path) -> Result<Url> {
    let url = Url::from_file_path(path).map_err(|()| TemplateError::InvalidPath(path.to_path_buf()))?;
    Ok(url)
}

/// URL of `relative` beneath `root`.
///
/// Each `/`-separated part of `relative` becomes one path segment, so
/// characters such as `#`, `?` and `%` stay part of the file name.
pub fn child_url(root: &Url, relative: &str) -> Result<Url> {
    let mut url = root.clone();
    url.path_segments_mut()
        .map_err(|()| TemplateError::InvalidUrl(ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(relative.split('/'));
    Ok(url)
}

/// Local path of a `file:` URL.
pub fn local_path(url: &Url) -> Result<PathBuf> {
    if url.scheme() != "file" {
        return Err(TemplateError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
            url: url.to_string(),
        });
    }
    url.to_file_path()
        .map_err(|()| TemplateError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
            url: url.to_string(),
        })
}

/// Every file beneath `root` as a `/`-separated relative path, sorted.
///
/// Symbolic links are followed. A root that no longer exists has no
/// children.
pub fn list_relative_paths(root: &Url) -> Result<Vec<String>> {
    let base = local_path(root)?;
    if !base.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(&base).min_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(root = %base.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }
        if let Ok(relative) = entry.path().strip_prefix(&base) {
            paths.push(to_unix_string(relative));
        }
    }

    paths.sort();
    Ok(paths)
}

/// Read the text behind a `file:` URL.
pub fn read_url(url: &Url) -> Result<String> {
    let path = local_path(url)?;
    Ok(stencil_common_fs::read_to_string(path, stencil_common_fs::DEFAULT_MAX_READ)?)
}

//! Filesystem and URL resolution for relative asset paths.
//!
//! The registry never touches the filesystem directly. It hands each relative
//! location (`base_path + "/" + path`) to an [`AssetResolver`], which answers
//! two questions: does the file exist, and what public URL serves it.
//!
//! - [`PublicDirResolver`]: checks a public directory on disk
//! - [`MemoryResolver`]: a fixed set of known files, for tests and embedding
//!
//! This separation keeps the registry's merge and deduplication rules testable
//! without real files.

use std::collections::HashSet;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Capability used by the registry to validate and publish relative paths.
pub trait AssetResolver {
    /// Returns whether `path` (relative to the public root) exists.
    ///
    /// Errors are treated by the registry as "does not exist".
    fn exists(&self, path: &str) -> io::Result<bool>;

    /// Returns the public URL for `path` (relative to the public root).
    fn public_url(&self, path: &str) -> String;
}

impl<R: AssetResolver + ?Sized> AssetResolver for &R {
    fn exists(&self, path: &str) -> io::Result<bool> {
        (**self).exists(path)
    }

    fn public_url(&self, path: &str) -> String {
        (**self).public_url(path)
    }
}

impl<R: AssetResolver + ?Sized> AssetResolver for Box<R> {
    fn exists(&self, path: &str) -> io::Result<bool> {
        (**self).exists(path)
    }

    fn public_url(&self, path: &str) -> String {
        (**self).public_url(path)
    }
}

fn join_url(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Resolves paths against a public directory on disk.
///
/// # Example
///
/// ```rust,no_run
/// use flexasset::{AssetRegistry, PublicDirResolver};
///
/// let resolver = PublicDirResolver::new("public").with_url_prefix("https://example.com");
/// let mut registry = AssetRegistry::new(resolver);
///
/// // Served as https://example.com/assets/css/app.css if public/assets/css/app.css exists
/// registry.add_css("css/app.css", "default");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicDirResolver {
    public_dir: PathBuf,
    url_prefix: String,
}

impl PublicDirResolver {
    /// Creates a resolver rooted at `public_dir`, serving URLs from `/`.
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            url_prefix: String::new(),
        }
    }

    /// Sets the prefix prepended to public URLs (e.g. the application URL).
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Returns the public directory.
    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }

    /// Returns the on-disk location for a relative path.
    pub fn locate(&self, path: &str) -> PathBuf {
        self.public_dir.join(path.trim_start_matches('/'))
    }
}

impl AssetResolver for PublicDirResolver {
    /// Paths with `..` components never exist, so nothing outside the
    /// public directory can be published.
    fn exists(&self, path: &str) -> io::Result<bool> {
        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return Ok(false);
        }
        self.locate(path).try_exists()
    }

    fn public_url(&self, path: &str) -> String {
        join_url(&self.url_prefix, path)
    }
}

/// Resolves paths against an in-memory set of known files.
///
/// # Example
///
/// ```rust
/// use flexasset::{AssetResolver, MemoryResolver};
///
/// let resolver = MemoryResolver::new().with_file("assets/app.css");
/// assert!(resolver.exists("assets/app.css").unwrap());
/// assert_eq!(resolver.public_url("assets/app.css"), "/assets/app.css");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryResolver {
    files: HashSet<String>,
    url_prefix: String,
}

impl MemoryResolver {
    /// Creates a resolver that knows no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a known file, returning the resolver for chaining.
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.add_file(path);
        self
    }

    /// Sets the prefix prepended to public URLs.
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Adds a known file.
    pub fn add_file(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.files.insert(path.trim_start_matches('/').to_string());
    }
}

impl AssetResolver for MemoryResolver {
    fn exists(&self, path: &str) -> io::Result<bool> {
        Ok(self.files.contains(path.trim_start_matches('/')))
    }

    fn public_url(&self, path: &str) -> String {
        join_url(&self.url_prefix, path)
    }
}

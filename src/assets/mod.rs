//! Local image assets embedded into rendered pages.
//!
//! Every image on the site is looked up by file name in a single assets
//! directory. Files that exist are inlined as `data:` URIs so the rendered
//! document is self-contained; files that are missing (or empty) fall back to
//! a remote placeholder. Resolution never fails.

mod cache;
pub mod chart;

pub use cache::{AssetCache, DEFAULT_TTL};

use std::fmt;
use std::path::Path;

use base64::Engine;

/// A logical image used by the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Name used by templates ("logo", "computer", ...).
    pub name: &'static str,
    /// File name inside the assets directory.
    pub file_name: &'static str,
    /// URL used when the file is unavailable.
    pub placeholder: &'static str,
}

pub const LOGO: CatalogEntry = CatalogEntry {
    name: "logo",
    file_name: "logo_R1.jpg",
    placeholder: "https://via.placeholder.com/240x90.png?text=Benchmark3x",
};

pub const COMPUTER: CatalogEntry = CatalogEntry {
    name: "computer",
    file_name: "computer.jpg",
    placeholder: "https://via.placeholder.com/800x600.png?text=computer.jpg+not+found",
};

pub const CHART: CatalogEntry = CatalogEntry {
    name: "chart",
    file_name: "downturn_chart.jpg",
    placeholder: "https://via.placeholder.com/600x350.png?text=Chart+Generation+Failed",
};

pub const GEARS: CatalogEntry = CatalogEntry {
    name: "gears",
    file_name: "gears.png",
    placeholder: "https://via.placeholder.com/600x600.png?text=gears.png+not+found",
};

/// All assets referenced by the site, in display order.
pub const CATALOG: [CatalogEntry; 4] = [LOGO, COMPUTER, CHART, GEARS];

/// A resolved reference to an image, ready to drop into a `src` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// File contents inlined as base64.
    Inline { mime: String, data: String },
    /// The file was missing or unreadable.
    Placeholder(&'static str),
}

impl AssetRef {
    pub fn is_inline(&self) -> bool {
        matches!(self, AssetRef::Inline { .. })
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRef::Inline { mime, data } => write!(f, "data:{};base64,{}", mime, data),
            AssetRef::Placeholder(url) => f.write_str(url),
        }
    }
}

/// Read a file and return its contents as standard base64.
///
/// Returns `None` when the file does not exist, cannot be read, or is empty.
pub fn load_base64(path: &Path) -> Option<String> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Asset not found: {}", path.display());
            return None;
        }
        Err(e) => {
            tracing::warn!("Failed to read asset {}: {}", path.display(), e);
            return None;
        }
    };

    if bytes.is_empty() {
        tracing::debug!("Asset is empty, ignoring: {}", path.display());
        return None;
    }

    Some(base64::engine::general_purpose::STANDARD.encode(&bytes))
}

/// Resolve one asset against `dir`, consulting `cache` when given.
pub fn resolve(entry: &CatalogEntry, dir: &Path, cache: Option<&AssetCache>) -> AssetRef {
    let path = dir.join(entry.file_name);

    let encoded = match cache {
        Some(cache) => match cache.get(&path) {
            Some(hit) => {
                tracing::trace!("Asset cache hit: {}", entry.name);
                hit
            }
            None => {
                let loaded = load_base64(&path);
                cache.insert(path.clone(), loaded.clone());
                loaded
            }
        },
        None => load_base64(&path),
    };

    match encoded {
        Some(data) => AssetRef::Inline {
            mime: mime_guess::from_path(&path)
                .first_or_octet_stream()
                .to_string(),
            data,
        },
        None => AssetRef::Placeholder(entry.placeholder),
    }
}

/// The full set of images needed to render a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAssets {
    pub logo: AssetRef,
    pub computer: AssetRef,
    pub chart: AssetRef,
    pub gears: AssetRef,
}

impl ResolvedAssets {
    /// Resolve every catalog entry against `dir`.
    pub fn resolve_all(dir: &Path, cache: Option<&AssetCache>) -> Self {
        Self {
            logo: resolve(&LOGO, dir, cache),
            computer: resolve(&COMPUTER, dir, cache),
            chart: resolve(&CHART, dir, cache),
            gears: resolve(&GEARS, dir, cache),
        }
    }

    /// All placeholders, no filesystem access.
    pub fn placeholders() -> Self {
        Self {
            logo: AssetRef::Placeholder(LOGO.placeholder),
            computer: AssetRef::Placeholder(COMPUTER.placeholder),
            chart: AssetRef::Placeholder(CHART.placeholder),
            gears: AssetRef::Placeholder(GEARS.placeholder),
        }
    }

    /// Pairs of (entry, reference) in catalog order.
    pub fn entries(&self) -> [(&'static CatalogEntry, &AssetRef); 4] {
        [
            (&LOGO, &self.logo),
            (&COMPUTER, &self.computer),
            (&CHART, &self.chart),
            (&GEARS, &self.gears),
        ]
    }
}

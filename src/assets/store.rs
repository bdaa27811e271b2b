use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::decode::{self, PreparedImage},
    foundation::error::{CardwrightError, CardwrightResult},
};

/// Memoizing loader for raster and font assets under one root directory.
///
/// A library front-loads filesystem IO and decoding so repeated draws of the
/// same named asset reuse the prepared pixels. Paths are normalized before
/// lookup so the same file referenced with different separators shares one
/// cache entry.
#[derive(Debug, Default)]
pub struct AssetLibrary {
    root: PathBuf,
    images: HashMap<String, PreparedImage>,
    fonts: HashMap<String, Arc<Vec<u8>>>,
}

impl AssetLibrary {
    /// Create a library resolving relative asset paths under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            images: HashMap::new(),
            fonts: HashMap::new(),
        }
    }

    /// Load (or reuse) the image at the given library-relative path.
    pub fn image(&mut self, rel_path: &str) -> CardwrightResult<PreparedImage> {
        let key = normalize_rel_path(rel_path)?;
        if let Some(img) = self.images.get(&key) {
            return Ok(img.clone());
        }
        let bytes = self.read_bytes(&key)?;
        let prepared = decode::decode_image(&bytes)?;
        self.images.insert(key, prepared.clone());
        Ok(prepared)
    }

    /// Load (or reuse) raw font bytes at the given library-relative path.
    pub fn font_bytes(&mut self, rel_path: &str) -> CardwrightResult<Arc<Vec<u8>>> {
        let key = normalize_rel_path(rel_path)?;
        if let Some(bytes) = self.fonts.get(&key) {
            return Ok(Arc::clone(bytes));
        }
        let bytes = Arc::new(self.read_bytes(&key)?);
        self.fonts.insert(key, Arc::clone(&bytes));
        Ok(bytes)
    }

    fn read_bytes(&self, norm_path: &str) -> CardwrightResult<Vec<u8>> {
        let path = self.root.join(Path::new(norm_path));
        std::fs::read(&path)
            .with_context(|| format!("read asset bytes from '{}'", path.display()))
            .map_err(CardwrightError::from)
    }
}

/// Normalize and validate library-relative asset paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> CardwrightResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(CardwrightError::validation("asset paths must be relative"));
    }
    if s.is_empty() {
        return Err(CardwrightError::validation("asset path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(CardwrightError::validation(
                "asset paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(CardwrightError::validation(
            "asset path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;

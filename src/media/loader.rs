// SPDX-License-Identifier: MPL-2.0
//! Image loading and the navigation cache.
//!
//! Loading runs as an async task so gallery navigation never blocks the UI.
//! Decoded images go into an LRU cache keyed by source string; neighbors of
//! the active image are prefetched so stepping through a gallery is
//! immediate.

use super::{classify, ImageData, SourceKind};
use crate::config;
use crate::error::{Error, Result};
use lru::LruCache;
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

/// Maximum number of decoded images kept for navigation.
pub const CACHE_MAX_IMAGES: usize = 16;

/// Number of neighbors prefetched in each direction.
pub const PREFETCH_COUNT: usize = 2;

/// Loads and decodes a single source, local or remote.
///
/// Remote fetches are bounded by [`config::load_timeout`].
///
/// # Errors
///
/// Returns [`Error::Io`] for unreadable paths, [`Error::Fetch`] for network
/// failures or timeouts, and [`Error::Image`] for undecodable bytes.
pub async fn load(source: String) -> Result<ImageData> {
    match classify(&source) {
        SourceKind::Local(path) => load_local(&path),
        SourceKind::Remote(url) => fetch_remote(&url).await,
    }
}

fn load_local(path: &Path) -> Result<ImageData> {
    let bytes = fs::read(path)?;
    ImageData::decode(&bytes)
}

async fn fetch_remote(url: &str) -> Result<ImageData> {
    let response = tokio::time::timeout(config::load_timeout(), reqwest::get(url))
        .await
        .map_err(|_| Error::Fetch(format!("timed out fetching {url}")))??;
    let response = response
        .error_for_status()
        .map_err(|err| Error::Fetch(err.to_string()))?;
    let bytes = tokio::time::timeout(config::load_timeout(), response.bytes())
        .await
        .map_err(|_| Error::Fetch(format!("timed out reading {url}")))??;
    ImageData::decode(&bytes)
}

/// LRU cache of decoded images, keyed by source string.
#[derive(Debug)]
pub struct ImageCache {
    entries: LruCache<String, ImageData>,
}

impl ImageCache {
    /// Creates a cache bounded at [`CACHE_MAX_IMAGES`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: LruCache::new(
                NonZeroUsize::new(CACHE_MAX_IMAGES).expect("cache capacity is non-zero"),
            ),
        }
    }

    /// Returns the cached image for a source, refreshing its recency.
    pub fn get(&mut self, source: &str) -> Option<ImageData> {
        self.entries.get(source).cloned()
    }

    /// Returns whether a source is cached, without touching recency.
    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains(source)
    }

    /// Stores a decoded image, evicting the least recently used entry when
    /// full.
    pub fn insert(&mut self, source: String, image: ImageData) {
        self.entries.put(source, image);
    }

    /// Returns the number of cached images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the neighbor sources worth prefetching around `index`, nearest
    /// first, skipping anything already cached.
    #[must_use]
    pub fn prefetch_plan(&self, sources: &[String], index: usize) -> Vec<String> {
        let mut plan = Vec::new();
        for distance in 1..=PREFETCH_COUNT {
            if let Some(next) = index.checked_add(distance) {
                if let Some(source) = sources.get(next) {
                    if !self.contains(source) && !plan.contains(source) {
                        plan.push(source.clone());
                    }
                }
            }
            if let Some(previous) = index.checked_sub(distance) {
                if let Some(source) = sources.get(previous) {
                    if !self.contains(source) && !plan.contains(source) {
                        plan.push(source.clone());
                    }
                }
            }
        }
        plan
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

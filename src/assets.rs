use crate::error::{Result, SceneError};
use dashmap::DashMap;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use tracing::debug;

/// Mass figure drawn inside the radiation bubble, relative to the asset root
pub const WEIGHT_FIGURE: &str = "figures/weight.svg";

static VIEW_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"viewBox\s*=\s*["']\s*([-\d.eE+]+)[\s,]+([-\d.eE+]+)[\s,]+([\d.eE+]+)[\s,]+([\d.eE+]+)\s*["']"#)
        .expect("viewBox pattern is valid")
});

static SIZE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s(width|height)\s*=\s*["']\s*([\d.]+)"#).expect("size pattern is valid")
});

/// Vector figure read from disk
#[derive(Debug, Clone, PartialEq)]
pub struct SvgAsset {
    pub path: PathBuf,
    /// Intrinsic width from the viewBox (or width attribute)
    pub width: f64,
    pub height: f64,
}

impl SvgAsset {
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Asset loader that manages loading and caching of figures.
///
/// The cache is shared, so one loader can serve parallel builds.
#[derive(Debug)]
pub struct AssetLoader {
    assets: DashMap<PathBuf, Arc<SvgAsset>>,
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with a base path for resolving relative paths
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            assets: DashMap::new(),
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Load an SVG figure, reading the file only the first time
    pub fn load_svg(&self, path: &Path) -> Result<Arc<SvgAsset>> {
        let full_path = self.resolve_path(path);

        if let Some(cached) = self.assets.get(&full_path) {
            return Ok(Arc::clone(cached.value()));
        }

        if !full_path.is_file() {
            return Err(SceneError::AssetNotFound { path: full_path });
        }

        let content = std::fs::read_to_string(&full_path).map_err(|e| SceneError::MalformedAsset {
            path: full_path.clone(),
            reason: e.to_string(),
        })?;
        let (width, height) = parse_svg_size(&content).map_err(|reason| SceneError::MalformedAsset {
            path: full_path.clone(),
            reason,
        })?;

        debug!(path = %full_path.display(), width, height, "loaded svg asset");
        let asset = Arc::new(SvgAsset {
            path: full_path.clone(),
            width,
            height,
        });
        self.assets.insert(full_path, Arc::clone(&asset));
        Ok(asset)
    }

    /// Resolve a path relative to the base path
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(path)
        }
    }

    /// Number of cached figures
    pub fn cached(&self) -> usize {
        self.assets.len()
    }

    /// Clear all loaded assets from memory
    pub fn clear(&self) {
        self.assets.clear();
    }
}

fn parse_svg_size(content: &str) -> std::result::Result<(f64, f64), String> {
    if !content.contains("<svg") {
        return Err("no <svg> root element".to_string());
    }

    if let Some(caps) = VIEW_BOX.captures(content) {
        let width: f64 = caps[3].parse().map_err(|_| "bad viewBox width".to_string())?;
        let height: f64 = caps[4].parse().map_err(|_| "bad viewBox height".to_string())?;
        return positive(width, height);
    }

    let mut width = None;
    let mut height = None;
    for caps in SIZE_ATTR.captures_iter(content) {
        let value = caps[2].parse::<f64>().ok();
        match &caps[1] {
            "width" if width.is_none() => width = value,
            "height" if height.is_none() => height = value,
            _ => {}
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => positive(w, h),
        _ => Err("missing viewBox and width/height".to_string()),
    }
}

fn positive(width: f64, height: f64) -> std::result::Result<(f64, f64), String> {
    if width > 0.0 && height > 0.0 {
        Ok((width, height))
    } else {
        Err(format!("degenerate size {}x{}", width, height))
    }
}

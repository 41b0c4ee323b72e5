use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Output file names, relative to the output directory
    #[serde(default)]
    pub outputs: OutputNames,

    /// Nearest-neighbour upscale factor for the diff image
    #[serde(default = "default_diff_scale")]
    pub diff_scale: u32,
}

fn default_diff_scale() -> u32 {
    4
}

/// Largest accepted `diff_scale`; a 128×64 diff becomes 2048×1024
pub const MAX_DIFF_SCALE: u32 = 16;

/// File names written into an output directory
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputNames {
    pub front: String,
    pub back: String,
    pub normal_palette: String,
    pub shiny_palette: String,
    /// Diff at working resolution; the scaled copy gets a `_{n}x` suffix
    pub diff: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            front: "front.png".to_string(),
            back: "back.png".to_string(),
            normal_palette: "normal.pal".to_string(),
            shiny_palette: "shiny.pal".to_string(),
            diff: "diff.png".to_string(),
        }
    }
}

impl OutputNames {
    /// Name of the upscaled diff: `diff.png` at scale 4 becomes `diff_4x.png`.
    pub fn scaled_diff(&self, scale: u32) -> String {
        let path = Path::new(&self.diff);
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.diff.clone());
        match path.extension() {
            Some(ext) => format!("{stem}_{scale}x.{}", ext.to_string_lossy()),
            None => format!("{stem}_{scale}x"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            outputs: OutputNames::default(),
            diff_scale: default_diff_scale(),
        }
    }
}

impl AppConfig {
    /// Resolve the config file: explicit path first, then `CONFIG_FILE`.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// Load configuration; unreadable or invalid files fall back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        diff_scale = config.diff_scale,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse YAML and normalize out-of-range values
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(content)?;
        if config.diff_scale == 0 {
            tracing::warn!("diff_scale must be at least 1, using 1");
            config.diff_scale = 1;
        } else if config.diff_scale > MAX_DIFF_SCALE {
            tracing::warn!(
                diff_scale = config.diff_scale,
                max = MAX_DIFF_SCALE,
                "diff_scale too large, clamping"
            );
            config.diff_scale = MAX_DIFF_SCALE;
        }
        Ok(config)
    }
}

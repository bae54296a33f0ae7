use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::MetadataNaming;

/// Staging parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingParams {
    /// Root of the local output tree
    pub output_root: PathBuf,
    /// Metadata file naming on disk
    pub naming: MetadataNaming,
    /// Storage CLI binary, looked up on PATH when not absolute
    pub ipfs_bin: PathBuf,
    /// Used for `<name> #<id>` token names in batch mode
    pub collection_name: String,
    /// None means "A unique member of the <collection_name> collection."
    pub collection_description: Option<String>,
    pub single_trait_type: String,
    pub single_trait_value: String,
    /// Extensions (without dot, case-insensitive) treated as images in batch mode
    pub image_extensions: Vec<String>,
}

impl Default for StagingParams {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("output"),
            naming: MetadataNaming::Bare,
            ipfs_bin: PathBuf::from("ipfs"),
            collection_name: "MetaCore".to_string(),
            collection_description: None,
            single_trait_type: "Type".to_string(),
            single_trait_value: "Single Artwork".to_string(),
            image_extensions: ["png", "jpg", "jpeg", "gif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl StagingParams {
    /// Load a JSON preset. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write the parameters as a pretty JSON preset.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn collection_description(&self) -> String {
        match &self.collection_description {
            Some(description) => description.clone(),
            None => format!("A unique member of the {} collection.", self.collection_name),
        }
    }

    pub fn is_image(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.image_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

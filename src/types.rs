//! Shared types used across nftprep.
//! Includes the `Workflow` selector, the metadata file `MetadataNaming` mode,
//! and the `Cid` content identifier returned by the storage network.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub enum Workflow {
    /// One image, one metadata document uploaded inline
    Single,
    /// A folder of images plus a folder of per-token metadata files
    Batch,
}

impl std::fmt::Display for Workflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Workflow::Single => write!(f, "Single"),
            Workflow::Batch => write!(f, "Batch"),
        }
    }
}

/// How metadata files are named on disk.
///
/// Contracts that append `.json` to the base URI need `JsonSuffix`; standard
/// ERC-721A contracts resolve `<base>/<id>` and need `Bare`.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetadataNaming {
    #[default]
    Bare,
    JsonSuffix,
}

impl std::fmt::Display for MetadataNaming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetadataNaming::Bare => write!(f, "none"),
            MetadataNaming::JsonSuffix => write!(f, ".json"),
        }
    }
}

/// Content identifier printed by the storage CLI.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cid(String);

impl Cid {
    pub fn new(value: impl Into<String>) -> Self {
        Cid(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `ipfs://<cid>`
    pub fn uri(&self) -> String {
        format!("ipfs://{}", self.0)
    }
}

impl std::fmt::Display for Cid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cid_uri_uses_ipfs_scheme() {
        let cid = Cid::new("bafybeia22ed2lhakgwu76ojojhuavlxkccpclciy6hgqsmn6o7ur7cw44e");
        assert_eq!(
            cid.uri(),
            "ipfs://bafybeia22ed2lhakgwu76ojojhuavlxkccpclciy6hgqsmn6o7ur7cw44e"
        );
    }

    #[test]
    fn naming_deserializes_from_snake_case() {
        let naming: MetadataNaming = serde_json::from_str("\"json_suffix\"").unwrap();
        assert_eq!(naming, MetadataNaming::JsonSuffix);
        assert_eq!(MetadataNaming::default(), MetadataNaming::Bare);
    }
}

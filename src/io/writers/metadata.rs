use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::core::metadata::NftMetadata;
use crate::error::Result;
use crate::types::MetadataNaming;

/// On-disk name of the metadata file for `stem`
pub fn metadata_file_name(stem: &str, naming: MetadataNaming) -> String {
    match naming {
        MetadataNaming::Bare => stem.to_string(),
        MetadataNaming::JsonSuffix => format!("{}.json", stem),
    }
}

/// Pretty JSON with four-space indentation; non-ASCII text is written as-is.
pub fn to_pretty_json(metadata: &NftMetadata) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    metadata.serialize(&mut ser)?;
    Ok(buf)
}

/// Write the metadata file for `stem` into `dir`
pub fn write_metadata_file(
    dir: &Path,
    stem: &str,
    naming: MetadataNaming,
    metadata: &NftMetadata,
) -> Result<PathBuf> {
    let path = dir.join(metadata_file_name(stem, naming));
    std::fs::write(&path, to_pretty_json(metadata)?)?;
    debug!("Wrote metadata file: {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::{Attribute, AttributeValue};

    fn sample() -> NftMetadata {
        NftMetadata {
            name: "元气 #1".to_string(),
            description: "d".to_string(),
            image: "ipfs://bafy/1.png".to_string(),
            attributes: vec![Attribute {
                trait_type: "ID".to_string(),
                value: AttributeValue::Number(1),
            }],
        }
    }

    #[test]
    fn naming_controls_suffix() {
        assert_eq!(metadata_file_name("7", MetadataNaming::Bare), "7");
        assert_eq!(metadata_file_name("7", MetadataNaming::JsonSuffix), "7.json");
    }

    #[test]
    fn pretty_output_uses_four_spaces_and_raw_utf8() {
        let text = String::from_utf8(to_pretty_json(&sample()).unwrap()).unwrap();
        assert!(text.starts_with("{\n    \"name\": \"元气 #1\""));
        assert!(text.contains("\n            \"trait_type\": \"ID\""));
    }

    #[test]
    fn written_file_parses_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path =
            write_metadata_file(tmp.path(), "1", MetadataNaming::JsonSuffix, &sample()).unwrap();
        assert_eq!(path, tmp.path().join("1.json"));
        let parsed: NftMetadata =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(parsed, sample());
    }
}

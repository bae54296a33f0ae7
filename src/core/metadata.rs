//! Token metadata documents in the common ERC-721 JSON shape.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::params::StagingParams;
use crate::error::{Error, Result};
use crate::types::Cid;

/// A trait value: free text for one-off pieces, the token id for collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(u64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}

impl NftMetadata {
    /// Metadata for a standalone image uploaded on its own.
    pub fn for_single_image(
        image_file_name: &str,
        stem: &str,
        image_cid: &Cid,
        params: &StagingParams,
    ) -> Self {
        Self {
            name: stem.to_string(),
            description: format!("Metadata generated for image {}.", image_file_name),
            image: image_cid.uri(),
            attributes: vec![Attribute {
                trait_type: params.single_trait_type.clone(),
                value: AttributeValue::Text(params.single_trait_value.clone()),
            }],
        }
    }

    /// Metadata for one member of a collection whose images live in `folder_cid`.
    ///
    /// The token name keeps the stem as written (`007` stays `007`); only the
    /// `ID` trait carries the parsed number.
    pub fn for_collection_item(
        stem: &str,
        token_id: u64,
        image_file_name: &str,
        folder_cid: &Cid,
        params: &StagingParams,
    ) -> Self {
        Self {
            name: format!("{} #{}", params.collection_name, stem),
            description: params.collection_description(),
            image: format!("{}/{}", folder_cid.uri(), image_file_name),
            attributes: vec![Attribute {
                trait_type: "ID".to_string(),
                value: AttributeValue::Number(token_id),
            }],
        }
    }

    /// Compact JSON, as uploaded to the store.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Token ids are the image file stems (`7.png` is token 7).
pub fn parse_token_id(stem: &str, path: &Path) -> Result<u64> {
    stem.parse::<u64>().map_err(|_| Error::InvalidTokenId {
        stem: stem.to_string(),
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_image_metadata_shape() {
        let cid = Cid::new("bafyimage");
        let meta = NftMetadata::for_single_image(
            "IMG_20210626_180340.jpg",
            "IMG_20210626_180340",
            &cid,
            &StagingParams::default(),
        );
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "IMG_20210626_180340",
                "description": "Metadata generated for image IMG_20210626_180340.jpg.",
                "image": "ipfs://bafyimage",
                "attributes": [{ "trait_type": "Type", "value": "Single Artwork" }],
            })
        );
    }

    #[test]
    fn collection_item_uses_numeric_id_trait() {
        let cid = Cid::new("bafyfolder");
        let meta = NftMetadata::for_collection_item("3", 3, "3.png", &cid, &StagingParams::default());
        assert_eq!(meta.name, "MetaCore #3");
        assert_eq!(meta.image, "ipfs://bafyfolder/3.png");
        let value = serde_json::to_value(&meta.attributes).unwrap();
        assert_eq!(value, json!([{ "trait_type": "ID", "value": 3 }]));
    }

    #[test]
    fn zero_padded_stem_keeps_padding_in_name() {
        let cid = Cid::new("bafyfolder");
        let meta =
            NftMetadata::for_collection_item("007", 7, "007.png", &cid, &StagingParams::default());
        assert_eq!(meta.name, "MetaCore #007");
        assert_eq!(meta.attributes[0].value, AttributeValue::Number(7));
    }

    #[test]
    fn field_order_is_stable_in_compact_json() {
        let meta = NftMetadata::for_collection_item(
            "1",
            1,
            "1.gif",
            &Cid::new("bafy"),
            &StagingParams::default(),
        );
        let text = String::from_utf8(meta.to_json_bytes().unwrap()).unwrap();
        let name = text.find("\"name\"").unwrap();
        let description = text.find("\"description\"").unwrap();
        let image = text.find("\"image\"").unwrap();
        let attributes = text.find("\"attributes\"").unwrap();
        assert!(name < description && description < image && image < attributes);
        assert!(!text.contains('\n'));
    }

    #[test]
    fn token_id_must_be_numeric() {
        assert_eq!(parse_token_id("42", Path::new("42.png")).unwrap(), 42);
        assert!(matches!(
            parse_token_id("cover", Path::new("cover.png")),
            Err(Error::InvalidTokenId { .. })
        ));
        assert!(parse_token_id("-1", Path::new("-1.png")).is_err());
    }
}

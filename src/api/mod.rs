//! High-level library API: the single-item and batch-collection workflows.
//! Prefer these entrypoints over the lower-level `io` and `core` modules when
//! integrating nftprep.
//!
//! Both workflows run strictly in order and stop at the first failing step.
//! Files already staged by earlier steps are left in place.
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tracing::info;

use crate::core::metadata::{NftMetadata, parse_token_id};
use crate::core::params::StagingParams;
use crate::error::Result;
use crate::io::ContentStore;
use crate::io::staging::{
    CollectionLayout, copy_directory, copy_file_into, file_name_parts, list_image_files,
    prepare_metadata_dir, single_output_dir,
};
use crate::io::writers::metadata::write_metadata_file;
use crate::types::Cid;

/// Result of the single-item workflow
#[derive(Debug, Clone)]
pub struct SingleReport {
    pub image_cid: Cid,
    pub metadata_cid: Cid,
    pub output_dir: PathBuf,
    pub image_path: PathBuf,
    pub metadata_path: PathBuf,
}

impl SingleReport {
    /// Token URI to pass to the contract's mint call
    pub fn token_uri(&self) -> String {
        self.metadata_cid.uri()
    }
}

/// Result of the batch-collection workflow
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub images_cid: Cid,
    pub metadata_cid: Cid,
    pub collection_dir: PathBuf,
    pub images_dir: PathBuf,
    pub metadata_dir: PathBuf,
    /// Number of metadata files written
    pub generated: usize,
}

impl BatchReport {
    /// Base URI for the contract; token `n` resolves to `<base>n`
    pub fn base_uri(&self) -> String {
        format!("{}/", self.metadata_cid.uri())
    }
}

/// Upload one image plus an inline metadata document, then stage both under
/// `<output_root>/<stem>/`.
pub fn process_single_nft<S: ContentStore + ?Sized>(
    store: &S,
    image_path: &Path,
    params: &StagingParams,
) -> Result<SingleReport> {
    info!("Processing single NFT: {:?}", image_path);
    info!("Metadata file suffix: {}", params.naming);

    let image_cid = store.add_path(image_path)?;
    info!("Image CID: {}", image_cid);

    let (image_name, stem) = file_name_parts(image_path)?;
    let metadata = NftMetadata::for_single_image(image_name, stem, &image_cid, params);
    let metadata_cid = store.add_bytes(&metadata.to_json_bytes()?)?;
    info!("Metadata CID: {}", metadata_cid);

    let output_dir = single_output_dir(&params.output_root, stem);
    let image_copy = copy_file_into(image_path, &output_dir)?;
    let metadata_path = write_metadata_file(&output_dir, stem, params.naming, &metadata)?;

    info!("Image and metadata staged in {:?}", output_dir);
    Ok(SingleReport {
        image_cid,
        metadata_cid,
        output_dir,
        image_path: image_copy,
        metadata_path,
    })
}

/// Batch workflow stamped with the current local time.
pub fn process_batch_collection<S: ContentStore + ?Sized>(
    store: &S,
    images_dir: &Path,
    params: &StagingParams,
) -> Result<BatchReport> {
    process_batch_collection_at(store, images_dir, params, &Local::now())
}

/// Upload an image folder, write one metadata file per image into
/// `<output_root>/collection_<timestamp>/metadata/`, and upload that folder.
pub fn process_batch_collection_at<S, Tz>(
    store: &S,
    images_dir: &Path,
    params: &StagingParams,
    timestamp: &DateTime<Tz>,
) -> Result<BatchReport>
where
    S: ContentStore + ?Sized,
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    info!("Processing batch collection: {:?}", images_dir);
    info!("Metadata file suffix: {}", params.naming);

    let images_cid = store.add_path(images_dir)?;
    info!("Image folder CID: {}", images_cid);

    let layout = CollectionLayout::new(&params.output_root, timestamp);
    copy_directory(images_dir, &layout.images_dir)?;
    info!("Images copied to {:?}", layout.images_dir);

    prepare_metadata_dir(&layout.metadata_dir)?;
    let images = list_image_files(images_dir, params)?;
    for image in &images {
        let (image_name, stem) = file_name_parts(image)?;
        let token_id = parse_token_id(stem, image)?;
        let metadata =
            NftMetadata::for_collection_item(stem, token_id, image_name, &images_cid, params);
        write_metadata_file(&layout.metadata_dir, stem, params.naming, &metadata)?;
    }
    info!(
        "Generated {} metadata files in {:?}",
        images.len(),
        layout.metadata_dir
    );

    let metadata_cid = store.add_path(&layout.metadata_dir)?;
    info!("Metadata folder CID: {}", metadata_cid);

    Ok(BatchReport {
        images_cid,
        metadata_cid,
        collection_dir: layout.collection_dir,
        images_dir: layout.images_dir,
        metadata_dir: layout.metadata_dir,
        generated: images.len(),
    })
}

/// Manual next steps once the local tree is staged.
pub fn pinning_handoff(output_root: &Path) -> String {
    let collection = output_root.join("collection_<timestamp>");
    format!(
        "Local preparation complete. Publish through a pinning service (e.g. Pinata):\n\
         1. Sign in to the pinning service.\n\
         2. Upload the folder {}.\n\
         3. Upload the folder {}.\n\
         4. Set the contract base URI from the CID the pinning service returns for the metadata folder.",
        collection.join("images").display(),
        collection.join("metadata").display(),
    )
}

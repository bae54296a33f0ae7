#![doc = r#"
nftprep — stage NFT assets for publishing on IPFS.

This crate uploads images (one file or a whole folder) through the `ipfs`
command-line tool, generates ERC-721 style JSON metadata pointing at the returned
content identifiers, and stages everything in a local output tree ready to be
handed to a pinning service. It powers the `nftprep` CLI and can be embedded in
your own Rust applications.

Requirements
------------
- The `ipfs` (Kubo) binary on `PATH`, or a path passed via `StagingParams::ipfs_bin`.
- A running node (`ipfs daemon`).

Quick start: a single image
---------------------------
```rust,no_run
use std::path::Path;
use nftprep::{process_single_nft, ContentStore, IpfsCli, StagingParams};

fn main() -> nftprep::Result<()> {
    let params = StagingParams::default();
    let store = IpfsCli::new(&params.ipfs_bin);
    store.check_connection()?;

    let report = process_single_nft(&store, Path::new("assets/image/art.jpg"), &params)?;
    println!("mint with token URI {}", report.token_uri());
    Ok(())
}
```

Batch: a folder of numbered images
----------------------------------
Images are named by token id (`1.png`, `2.png`, ...). Metadata files are written
as `1`, `2`, ... or `1.json`, `2.json`, ... depending on `MetadataNaming`.

```rust,no_run
use std::path::Path;
use nftprep::{process_batch_collection, IpfsCli, MetadataNaming, StagingParams};

fn main() -> nftprep::Result<()> {
    let params = StagingParams {
        naming: MetadataNaming::JsonSuffix,
        collection_name: "MetaCore".to_string(),
        ..StagingParams::default()
    };
    let report = process_batch_collection(&IpfsCli::default(), Path::new("assets/batch_images"), &params)?;
    println!("{} tokens, base URI {}", report.generated, report.base_uri());
    Ok(())
}
```

Error handling
--------------
All public functions return `nftprep::Result<T>`; match on `nftprep::Error` to handle
specific cases.

```rust,no_run
use std::path::Path;
use nftprep::{process_single_nft, Error, IpfsCli, StagingParams};

fn main() {
    let params = StagingParams::default();
    match process_single_nft(&IpfsCli::default(), Path::new("missing.png"), &params) {
        Ok(report) => println!("{}", report.token_uri()),
        Err(Error::PathNotFound(p)) => eprintln!("no such file: {p:?}"),
        Err(Error::CommandFailed { stderr, .. }) => eprintln!("ipfs failed: {stderr}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — the single-item and batch workflows.
- [`io`] — the `ContentStore` boundary, staging tree helpers, metadata writers.
- [`core`] — `StagingParams` and the `NftMetadata` model.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use core::metadata::{Attribute, AttributeValue, NftMetadata};
pub use core::params::StagingParams;
pub use error::{Error, Result};
pub use types::{Cid, MetadataNaming, Workflow};

pub use io::{CollectionLayout, ContentStore, IpfsCli};

pub use api::{
    BatchReport, SingleReport, pinning_handoff, process_batch_collection,
    process_batch_collection_at, process_single_nft,
};

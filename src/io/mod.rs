//! I/O layer: the `ipfs` storage boundary, the local staging tree,
//! and `writers` for metadata files.
pub mod ipfs;
pub use ipfs::{ContentStore, IpfsCli};

pub mod staging;
pub use staging::CollectionLayout;

pub mod writers;

use clap::Parser;
use std::path::PathBuf;

use nftprep::Workflow;

use super::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "nftprep", version, about = "Stage NFT images and metadata on IPFS")]
pub struct CliArgs {
    /// Input image (single item mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory of images named by token id, e.g. 1.png (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Root of the local output tree (default: output)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON preset with staging parameters; flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the effective staging parameters to this JSON preset file
    #[arg(long)]
    pub save_preset: Option<PathBuf>,

    /// Name metadata files `<id>.json` instead of `<id>`
    #[arg(long, default_value_t = false)]
    pub json_suffix: bool,

    /// Path to the ipfs binary
    #[arg(long)]
    pub ipfs_bin: Option<PathBuf>,

    /// Collection name used for token names in batch mode
    #[arg(long)]
    pub collection_name: Option<String>,

    /// Do not probe the node with `ipfs id` before uploading
    #[arg(long, default_value_t = false)]
    pub skip_node_check: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn workflow(&self) -> Result<Workflow, AppError> {
        match (&self.input, &self.input_dir) {
            (Some(_), None) => Ok(Workflow::Single),
            (None, Some(_)) => Ok(Workflow::Batch),
            (Some(_), Some(_)) => Err(AppError::ConflictingArguments {
                first: "--input".to_string(),
                second: "--input-dir".to_string(),
            }),
            (None, None) => Err(AppError::MissingArgument {
                arg: "--input or --input-dir".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_follows_input_flags() {
        let args = CliArgs::parse_from(["nftprep", "--input", "art.jpg"]);
        assert_eq!(args.workflow().unwrap(), Workflow::Single);

        let args = CliArgs::parse_from(["nftprep", "--input-dir", "batch", "--json-suffix"]);
        assert_eq!(args.workflow().unwrap(), Workflow::Batch);
        assert!(args.json_suffix);
    }

    #[test]
    fn save_preset_takes_a_path() {
        let args = CliArgs::parse_from(["nftprep", "--save-preset", "preset.json"]);
        assert_eq!(args.save_preset, Some(PathBuf::from("preset.json")));
    }

    #[test]
    fn workflow_requires_exactly_one_input() {
        let args = CliArgs::parse_from(["nftprep"]);
        assert!(matches!(
            args.workflow(),
            Err(AppError::MissingArgument { .. })
        ));

        let args = CliArgs::parse_from(["nftprep", "-i", "a.png", "--input-dir", "b"]);
        assert!(matches!(
            args.workflow(),
            Err(AppError::ConflictingArguments { .. })
        ));
    }
}

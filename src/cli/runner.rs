use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nftprep::{
    ContentStore, IpfsCli, MetadataNaming, StagingParams, Workflow, pinning_handoff,
    process_batch_collection, process_single_nft,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Preset file first, then command-line overrides.
fn build_params(args: &CliArgs) -> Result<StagingParams, AppError> {
    let mut params = match &args.config {
        Some(path) => StagingParams::from_file(path)?,
        None => StagingParams::default(),
    };
    if let Some(dir) = &args.output_dir {
        params.output_root = dir.clone();
    }
    if args.json_suffix {
        params.naming = MetadataNaming::JsonSuffix;
    }
    if let Some(bin) = &args.ipfs_bin {
        params.ipfs_bin = bin.clone();
    }
    if let Some(name) = &args.collection_name {
        params.collection_name = name.clone();
    }
    Ok(params)
}

/// Returns true when a preset was written.
fn save_preset(args: &CliArgs, params: &StagingParams) -> Result<bool, AppError> {
    let Some(path) = &args.save_preset else {
        return Ok(false);
    };
    params.save_to_file(path)?;
    info!("Saved preset to {:?}", path);
    Ok(true)
}

fn run_workflow(
    args: &CliArgs,
    workflow: Workflow,
    params: &StagingParams,
) -> Result<(), AppError> {
    let store = IpfsCli::new(&params.ipfs_bin);
    if !args.skip_node_check {
        store.check_connection()?;
    }

    match workflow {
        Workflow::Single => {
            let input = args.input.as_ref().ok_or(AppError::MissingArgument {
                arg: "--input".to_string(),
            })?;
            let report = process_single_nft(&store, input, params)?;
            info!("Single item complete");
            println!("Image CID:    {}", report.image_cid);
            println!("Metadata CID: {}", report.metadata_cid);
            println!("Staged in:    {}", report.output_dir.display());
            println!("Next: call mint with token URI {}", report.token_uri());
        }
        Workflow::Batch => {
            let input_dir = args.input_dir.as_ref().ok_or(AppError::MissingArgument {
                arg: "--input-dir".to_string(),
            })?;
            let report = process_batch_collection(&store, input_dir, params)?;
            info!("Batch collection complete");
            println!("Image folder CID:    {}", report.images_cid);
            println!("Metadata folder CID: {}", report.metadata_cid);
            println!("Metadata files:      {}", report.generated);
            println!("Staged in:           {}", report.collection_dir.display());
            println!("Next: set the contract base URI to {}", report.base_uri());
        }
    }

    println!();
    println!("{}", pinning_handoff(&params.output_root));
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.log);

    let params = build_params(&args)?;
    if save_preset(&args, &params)? && args.input.is_none() && args.input_dir.is_none() {
        return Ok(());
    }

    let workflow = args.workflow()?;
    info!("Workflow: {}", workflow);
    info!("Output root: {:?}", params.output_root);

    if let Err(e) = run_workflow(&args, workflow, &params) {
        error!("{} workflow failed: {}", workflow, e);
        return Err(e.into());
    }
    Ok(())
}

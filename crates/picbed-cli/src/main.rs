//! picbed — upload an image to Tencent COS or Aliyun OSS and print its
//! public URL.
//!
//! Settings live in a flat JSON file (see the keys in `picbed_core::config`);
//! the last-used directory is remembered in a state file next to it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use picbed_cli::{
    init_tracing, FileWorkspaceState, JsonSettings, StdoutEditor, TermNotifier, TermPicker,
    TermProgress,
};
use picbed_compress::TinifyClient;
use picbed_core::{CosConfig, OssConfig, UploadSettings};
use picbed_pipeline::{PipelineHost, PipelineOutcome, UploadPipeline};
use picbed_storage::{CosStorage, ObjectStorage, OssStorage};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "picbed", about = "Upload an image to COS or OSS and print its public URL")]
struct Cli {
    /// Path to the JSON settings file
    #[arg(long, default_value = "picbed.json")]
    settings: PathBuf,

    /// Path to the workspace state file (defaults to state.json next to the
    /// settings file)
    #[arg(long)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload to Tencent COS
    Cos {
        /// Image file to upload; prompts when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Upload to Aliyun OSS
    Oss {
        /// Image file to upload; prompts when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let settings = JsonSettings::load(&cli.settings)?;
    let state_path = cli
        .state
        .clone()
        .unwrap_or_else(|| cli.settings.with_file_name("state.json"));

    let (storage, upload_settings, file): (Arc<dyn ObjectStorage>, UploadSettings, _) =
        match &cli.command {
            Commands::Cos { file } => {
                let config = CosConfig::from_settings(&settings)?;
                let storage = CosStorage::new(
                    config.bucket.clone(),
                    config.region.clone(),
                    config.secret_id.clone(),
                    config.secret_key.clone(),
                );
                (Arc::new(storage), config.upload_settings(), file.clone())
            }
            Commands::Oss { file } => {
                let config = OssConfig::from_settings(&settings)?;
                let storage = OssStorage::new(
                    config.bucket.clone(),
                    config.region.clone(),
                    config.access_key_id.clone(),
                    config.access_key_secret.clone(),
                );
                (Arc::new(storage), config.upload_settings(), file.clone())
            }
        };

    let host = PipelineHost {
        picker: Arc::new(TermPicker::new(file)),
        workspace: Arc::new(FileWorkspaceState::load(state_path)),
        editor: Arc::new(StdoutEditor),
        progress: Arc::new(TermProgress),
        notifier: Arc::new(TermNotifier),
    };

    let pipeline = UploadPipeline::new(
        Arc::new(TinifyClient::new()),
        storage,
        upload_settings,
        host,
    );

    match pipeline.execute().await {
        PipelineOutcome::Completed(_) | PipelineOutcome::Cancelled => Ok(()),
        PipelineOutcome::Failed(_) => std::process::exit(1),
    }
}

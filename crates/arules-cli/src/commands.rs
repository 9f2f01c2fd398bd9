//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use arules_ingest::{IngestSummary, RecordPolicy, run_file};
use arules_layout::{Layout, load_layout};
use arules_model::Dataset;
use arules_output::{OutputFormat, write_outputs};
use arules_preprocess::{IdPolicy, Preprocessor};

use crate::cli::{LayoutArgs, OutputFormatArg, ProcessArgs, RecordPolicyArg};

/// Everything the summary printer needs about one process run.
pub struct ProcessResult {
    pub layout_name: String,
    pub summary: IngestSummary,
    pub dataset: Dataset,
    pub outputs: Vec<PathBuf>,
    pub preview: usize,
}

pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let layout = load_layout(&args.layout)
        .with_context(|| format!("load layout {}", args.layout.display()))?;
    let id_policy = if args.deferred_ids {
        IdPolicy::Deferred
    } else {
        IdPolicy::Eager
    };
    let record_policy = match args.on_error {
        RecordPolicyArg::Abort => RecordPolicy::Abort,
        RecordPolicyArg::Skip => RecordPolicy::Skip,
    };

    let mut preprocessor = Preprocessor::with_policy(id_policy);
    let summary = run_file(
        &args.data_file,
        &mut preprocessor,
        layout.fields(),
        record_policy,
    )
    .with_context(|| format!("process {}", args.data_file.display()))?;
    let dataset = preprocessor.into_dataset();

    let outputs = if args.dry_run {
        info!("dry run: not writing output files");
        Vec::new()
    } else {
        let output_dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| default_output_dir(&args.data_file));
        let format = match args.format {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Csv => OutputFormat::Csv,
            OutputFormatArg::Both => OutputFormat::Both,
        };
        write_outputs(&dataset, &output_dir, format)
            .with_context(|| format!("write outputs to {}", output_dir.display()))?
    };

    Ok(ProcessResult {
        layout_name: layout.name,
        summary,
        dataset,
        outputs,
        preview: args.preview,
    })
}

pub fn run_layout(args: &LayoutArgs) -> Result<Layout> {
    load_layout(&args.layout).with_context(|| format!("load layout {}", args.layout.display()))
}

fn default_output_dir(data_file: &Path) -> PathBuf {
    match data_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("output"),
        _ => PathBuf::from("output"),
    }
}

//! Batch processing command for multiple document files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error};

use autodoc_core::pipeline::{process, ProcessedDocument};
use autodoc_core::{extract_text, utils, DocumentStore};

use super::load_config;
use super::process::{format_result, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Persist each document and its fields to the configured database
    #[arg(long)]
    store: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    result: Option<ProcessedDocument>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Expand glob pattern, keeping only ingestible extensions
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(
                ext.to_lowercase().as_str(),
                "pdf" | "png" | "jpg" | "jpeg" | "bmp" | "tiff"
            )
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files for pattern: {}", args.input);
    }

    println!("Processing {} files...", files.len());

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let store = if args.store {
        Some(DocumentStore::new(&config.storage.database_url).await?)
    } else {
        None
    };

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        pb.set_message(path.display().to_string());

        let outcome = process_file(&path, &config, store.as_ref(), &args).await;

        match outcome {
            Ok(result) => {
                debug!("{}: {}", path.display(), result.doc_type);
                results.push(FileResult {
                    path,
                    result: Some(result),
                    error: None,
                });
            }
            Err(e) => {
                error!("failed to process {}: {e}", path.display());
                if !args.continue_on_error {
                    pb.abandon();
                    return Err(e);
                }
                results.push(FileResult {
                    path,
                    result: None,
                    error: Some(e.to_string()),
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    // Per-file status lines
    for file in &results {
        match (&file.result, &file.error) {
            (Some(result), _) => println!(
                "{} {} -> {} ({:.0}%)",
                style("✓").green(),
                file.path.display(),
                result.doc_type,
                result.confidence * 100.0
            ),
            (None, Some(error)) => println!(
                "{} {} -> {}",
                style("✗").red(),
                file.path.display(),
                error
            ),
            _ => {}
        }
    }

    let succeeded = results.iter().filter(|r| r.result.is_some()).count();
    println!(
        "\nProcessed {}/{} documents successfully in {:.1}s",
        succeeded,
        results.len(),
        start.elapsed().as_secs_f32()
    );

    if args.summary {
        let summary_path = summary_path(&args.output_dir);
        fs::write(&summary_path, summary_csv(&results)?)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    if succeeded < results.len() {
        anyhow::bail!("{} of {} files failed", results.len() - succeeded, results.len());
    }

    Ok(())
}

async fn process_file(
    path: &PathBuf,
    config: &autodoc_core::AutodocConfig,
    store: Option<&DocumentStore>,
    args: &BatchArgs,
) -> anyhow::Result<ProcessedDocument> {
    utils::validate_file(path, &config.ingestion)?;

    let mut text = extract_text(path)?;
    if text.chars().count() > config.ingestion.max_text_length {
        text = utils::truncate_text(&text, config.ingestion.max_text_length);
    }

    let result = process(&text);

    if let Some(store) = store {
        let document_id = store
            .insert_document(&path.display().to_string(), result.doc_type, &text)
            .await?;
        store
            .insert_fields(document_id, result.doc_type, &result.fields)
            .await?;
    }

    if let Some(dir) = &args.output_dir {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("document");
        let extension = match args.format {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        };
        let output_path = dir.join(format!("{stem}.{extension}"));
        fs::write(output_path, format_result(&result, args.format)?)?;
    }

    Ok(result)
}

fn summary_path(output_dir: &Option<PathBuf>) -> PathBuf {
    let name = format!("summary_{}.csv", Local::now().format("%Y%m%d_%H%M%S"));
    match output_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

fn summary_csv(results: &[FileResult]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["file", "document_type", "confidence", "fields_extracted", "error"])?;

    for file in results {
        match (&file.result, &file.error) {
            (Some(result), _) => wtr.write_record([
                file.path.display().to_string(),
                result.doc_type.to_string(),
                format!("{:.2}", result.confidence),
                result.fields.len().to_string(),
                String::new(),
            ])?,
            (None, Some(error)) => wtr.write_record([
                file.path.display().to_string(),
                String::new(),
                String::new(),
                String::new(),
                error.clone(),
            ])?,
            _ => {}
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

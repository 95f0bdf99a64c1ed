//! Process command - classify a single document and extract its fields.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use autodoc_core::pipeline::{process, ProcessedDocument};
use autodoc_core::{extract_text, utils, validate, DocumentStore};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or image)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Persist the document and extracted fields to the configured database
    #[arg(long)]
    store: bool,

    /// Report validation issues for the classified type
    #[arg(long)]
    validate: bool,

    /// Show classification confidence and file hash
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    utils::validate_file(&args.input, &config.ingestion)?;

    info!("Processing file: {}", args.input.display());

    // Create progress bar
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Extracting text...");
    pb.set_position(20);

    let mut text = extract_text(&args.input)?;
    if text.chars().count() > config.ingestion.max_text_length {
        text = utils::truncate_text(&text, config.ingestion.max_text_length);
    }
    debug!("extracted {} characters", text.len());

    pb.set_message("Classifying document...");
    pb.set_position(60);

    let result = process(&text);

    pb.set_position(80);

    if args.store {
        pb.set_message("Saving to database...");
        let store = DocumentStore::new(&config.storage.database_url).await?;
        let document_id = store
            .insert_document(&args.input.display().to_string(), result.doc_type, &text)
            .await?;
        store
            .insert_fields(document_id, result.doc_type, &result.fields)
            .await?;
        println!(
            "{} Document stored with ID {}",
            style("✓").green(),
            document_id
        );
    }

    pb.set_position(100);
    pb.finish_with_message("Done");

    // Report validation issues if requested
    if args.validate {
        let issues = validate(result.doc_type, &text);
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    // Format output
    let output = format_result(&result, args.format)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if result.confidence < config.classification.confidence_threshold {
        eprintln!(
            "{} Low classification confidence: {:.1}%",
            style("⚠").yellow(),
            result.confidence * 100.0
        );
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Classification confidence: {:.1}%",
            style("ℹ").blue(),
            result.confidence * 100.0
        );
        println!(
            "{} File hash (SHA-256): {}",
            style("ℹ").blue(),
            utils::file_sha256(&args.input)?
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_result(result: &ProcessedDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &ProcessedDocument) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header: Vec<&str> = vec!["document_type", "confidence"];
    header.extend(result.fields.keys().map(String::as_str));
    wtr.write_record(&header)?;

    let confidence = format!("{:.2}", result.confidence);
    let mut record: Vec<&str> = vec![result.doc_type.as_str(), &confidence];
    record.extend(result.fields.values().map(String::as_str));
    wtr.write_record(&record)?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ProcessedDocument) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document type: {}\n", result.doc_type));
    output.push_str(&format!("Confidence: {:.1}%\n", result.confidence * 100.0));

    if result.fields.is_empty() {
        output.push_str("No fields extracted\n");
    } else {
        output.push_str("Fields:\n");
        for (key, value) in &result.fields {
            output.push_str(&format!("  {}: {}\n", key, value));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text() {
        let result = process("INVOICE #12345\nInvoice Date: 2024-01-15\nTotal Amount: $1000.00");
        let text = format_text(&result);

        assert!(text.contains("Document type: invoice"));
        assert!(text.contains("invoice_date: 2024-01-15"));
    }

    #[test]
    fn test_format_csv_columns_follow_fields() {
        let result = process("INVOICE #12345\nInvoice Date: 2024-01-15\nTotal Amount: $1000.00");
        let csv = format_csv(&result).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next().unwrap(),
            "document_type,confidence,invoice_date,total_amount",
        );
        assert!(lines.next().unwrap().starts_with("invoice,"));
    }

    #[test]
    fn test_format_json_round_trips() {
        let result = process("Purchase Order PO-1\nPO Number: PO-1");
        let json = format_result(&result, OutputFormat::Json).unwrap();
        let parsed: ProcessedDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}

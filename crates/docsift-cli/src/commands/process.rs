//! Process command - extract a record from a single recognized-text file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use docsift_core::confidence::{ConfidenceTier, Detection, parse_detections};
use docsift_core::models::config::DocsiftConfig;
use docsift_core::models::records::{DocumentKind, ParsedDocument};
use docsift_core::pipeline::{DocumentProcessor, ProcessedDocument, RecognizedInput};

use super::config::default_config_path;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (recognized text, or a .json array of detections)
    #[arg(required = true)]
    input: PathBuf,

    /// Document type
    #[arg(short, long, value_enum)]
    kind: KindArg,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Minimum detection confidence (overrides config)
    #[arg(long)]
    min_confidence: Option<f64>,

    /// Join detections top-to-bottom, left-to-right
    #[arg(long)]
    reading_order: bool,

    /// Show the confidence breakdown for detection input
    #[arg(long)]
    show_confidence: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    /// Resume / CV
    Resume,
    /// Identity card
    Identity,
    /// Handwritten or typed notes
    Notes,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Resume => DocumentKind::Resume,
            KindArg::Identity => DocumentKind::Identity,
            KindArg::Notes => DocumentKind::Notes,
        }
    }
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

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let processor = build_processor(&config, args.min_confidence, args.reading_order)?;
    let input = read_input(&args.input)?;
    let document = processor.process(args.kind.into(), &input);

    for warning in &document.warnings {
        warn!("{}", warning);
    }

    let output = format_document(&document, args.format)?;

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

    if args.show_confidence {
        println!();
        print_confidence(&document);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load configuration from an explicit path, then the user config file,
/// falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<DocsiftConfig> {
    if let Some(path) = config_path {
        return Ok(DocsiftConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(DocsiftConfig::from_file(&default_path)?)
    } else {
        Ok(DocsiftConfig::default())
    }
}

/// Build a processor from configuration plus command-line overrides.
pub fn build_processor(
    config: &DocsiftConfig,
    min_confidence: Option<f64>,
    reading_order: bool,
) -> anyhow::Result<DocumentProcessor> {
    let mut processor = DocumentProcessor::from_config(config)?;

    if let Some(confidence) = min_confidence {
        processor = processor.with_min_confidence(confidence)?;
    }
    if reading_order {
        processor = processor.with_reading_order(true);
    }

    Ok(processor)
}

/// Read recognized text, or a detections array for `.json` files.
pub fn read_input(path: &Path) -> anyhow::Result<RecognizedInput> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let content = fs::read_to_string(path)?;

    if extension == "json" {
        let detections = parse_detections(&content)?;
        debug!("Loaded {} detections from {}", detections.len(), path.display());
        Ok(RecognizedInput::Detections(detections))
    } else {
        Ok(RecognizedInput::Text(content))
    }
}

pub fn format_document(document: &ProcessedDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(document)?),
        OutputFormat::Csv => format_csv(document),
        OutputFormat::Text => Ok(format_text(document)),
    }
}

fn format_csv(document: &ProcessedDocument) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let average = document
        .quality
        .as_ref()
        .map(|q| format!("{:.3}", q.average_confidence))
        .unwrap_or_default();

    match &document.record {
        ParsedDocument::Resume(r) => {
            wtr.write_record(["name", "email", "phone", "skills", "average_confidence"])?;
            wtr.write_record([&r.name, &r.email, &r.phone, &r.skills.join("; "), &average])?;
        }
        ParsedDocument::Identity(r) => {
            wtr.write_record([
                "name",
                "identifier_number",
                "date_of_birth",
                "gender",
                "average_confidence",
            ])?;
            wtr.write_record([
                r.name.as_str(),
                r.identifier_number.as_str(),
                r.date_of_birth.as_str(),
                r.gender.as_str(),
                average.as_str(),
            ])?;
        }
        ParsedDocument::Notes(r) => {
            wtr.write_record(["word_count", "line_count", "key_points", "average_confidence"])?;
            wtr.write_record([
                &r.word_count.to_string(),
                &r.line_count.to_string(),
                &r.key_points.join("; "),
                &average,
            ])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(document: &ProcessedDocument) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n\n", document.kind()));

    match &document.record {
        ParsedDocument::Resume(r) => {
            output.push_str(&format!("Name:  {}\n", r.name));
            output.push_str(&format!("Email: {}\n", r.email));
            output.push_str(&format!("Phone: {}\n", r.phone));
            output.push_str("Skills:\n");
            if r.skills.is_empty() {
                output.push_str("  (none detected)\n");
            }
            for skill in &r.skills {
                output.push_str(&format!("  • {}\n", skill));
            }
        }
        ParsedDocument::Identity(r) => {
            output.push_str(&format!("Name:          {}\n", r.name));
            output.push_str(&format!("Number:        {}\n", r.identifier_number));
            output.push_str(&format!("Date of birth: {}\n", r.date_of_birth));
            output.push_str(&format!("Gender:        {}\n", r.gender));
        }
        ParsedDocument::Notes(r) => {
            output.push_str(&format!("Words: {}\n", r.word_count));
            output.push_str(&format!("Lines: {}\n", r.line_count));
            output.push_str("Key points:\n");
            if r.key_points.is_empty() {
                output.push_str("  (none detected)\n");
            }
            for point in &r.key_points {
                output.push_str(&format!("  {}\n", point));
            }
        }
    }

    if let Some(quality) = &document.quality {
        let average = quality.average_confidence;
        output.push_str(&format!(
            "\nAverage confidence: {:.3} ({})\n",
            average,
            ConfidenceTier::for_score(average).color()
        ));
    }

    if !document.warnings.is_empty() {
        output.push_str("\nWarnings:\n");
        for warning in &document.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    output
}

fn print_confidence(document: &ProcessedDocument) {
    let Some(quality) = &document.quality else {
        println!(
            "{} No confidence data: input was plain text",
            style("ℹ").blue()
        );
        return;
    };

    println!(
        "{} Average confidence: {:.1}% over {} detections",
        style("ℹ").blue(),
        quality.average_confidence * 100.0,
        quality.retained()
    );

    for tier in [ConfidenceTier::High, ConfidenceTier::Medium, ConfidenceTier::Low] {
        let detections = quality.tier(tier);
        let label = format!("{:<6} {:>3}", tier.as_str(), detections.len());
        let label = match tier {
            ConfidenceTier::High => style(label).green(),
            ConfidenceTier::Medium => style(label).yellow(),
            ConfidenceTier::Low => style(label).red(),
        };
        let sample: Vec<&str> = detections.iter().take(5).map(Detection::text).collect();
        println!("  {}  {}", label, sample.join(" · "));
    }

    println!("  {} Processing time: {}ms", style("ℹ").blue(), document.processing_time_ms);
}

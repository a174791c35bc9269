//! Orate CLI - Command-line interface for the speech analysis engine
//!
//! Commands:
//! - analyze: Analyze a recording session and emit a performance report
//! - validate: Validate a session payload without analyzing it
//! - schema: Print input or output schema information

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use orate::encoder::ReportEncoder;
use orate::report::generate_performance_report;
use orate::session::parse_session;
use orate::{AnalysisError, ENGINE_VERSION};

/// Orate - Speech performance analysis for spoken-delivery coaching
#[derive(Parser)]
#[command(name = "orate")]
#[command(author = "Orate Labs")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Analyze practice recordings into performance reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a recording session and emit a performance report
    Analyze {
        /// Input session JSON path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Output format; defaults to pretty on a terminal, compact otherwise
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Wrap the report in a producer/provenance envelope
        #[arg(long)]
        envelope: bool,
    },

    /// Validate a session payload without analyzing it
    Validate {
        /// Input session JSON path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print schema information
    Schema {
        /// Schema to print
        #[arg(value_enum)]
        schema_type: SchemaType,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaType {
    /// Input schema (recording session payload)
    Input,
    /// Output schema (performance report)
    Output,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), OrateCliError> {
    match cli.command {
        Commands::Analyze {
            input,
            output,
            format,
            envelope,
        } => cmd_analyze(&input, &output, format, envelope),
        Commands::Validate { input, json } => cmd_validate(&input, json),
        Commands::Schema { schema_type } => cmd_schema(schema_type),
    }
}

fn cmd_analyze(
    input: &PathBuf,
    output: &PathBuf,
    format: Option<OutputFormat>,
    envelope: bool,
) -> Result<(), OrateCliError> {
    let session_json = read_input(input)?;
    let session = parse_session(&session_json)?;
    let report = generate_performance_report(&session);

    let format = format.unwrap_or_else(|| {
        if output.to_string_lossy() == "-" && atty::is(atty::Stream::Stdout) {
            OutputFormat::JsonPretty
        } else {
            OutputFormat::Json
        }
    });

    let rendered = if envelope {
        let wrapped = ReportEncoder::new().encode(&report);
        match format {
            OutputFormat::Json => serde_json::to_string(&wrapped)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&wrapped)?,
        }
    } else {
        match format {
            OutputFormat::Json => serde_json::to_string(&report)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&report)?,
        }
    };

    write_output(output, &rendered)
}

fn cmd_validate(input: &PathBuf, json: bool) -> Result<(), OrateCliError> {
    let session_json = read_input(input)?;

    match parse_session(&session_json) {
        Ok(session) => {
            let report = ValidationReport {
                valid: true,
                word_count: session.words.len(),
                volume_samples: session.volume_history.len(),
                duration_ms: session.duration_ms,
                error: None,
            };
            print_validation(&report, json)?;
            Ok(())
        }
        Err(e) => {
            let report = ValidationReport {
                valid: false,
                word_count: 0,
                volume_samples: 0,
                duration_ms: 0,
                error: Some(e.to_string()),
            };
            print_validation(&report, json)?;
            Err(OrateCliError::ValidationFailed)
        }
    }
}

fn print_validation(report: &ValidationReport, json: bool) -> Result<(), OrateCliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else if report.valid {
        println!(
            "Session OK: {} words, {} volume samples, {} ms",
            report.word_count, report.volume_samples, report.duration_ms
        );
    } else {
        println!(
            "Session invalid: {}",
            report.error.as_deref().unwrap_or("unknown error")
        );
    }
    Ok(())
}

fn cmd_schema(schema_type: SchemaType) -> Result<(), OrateCliError> {
    let schema = match schema_type {
        SchemaType::Input => input_json_schema(),
        SchemaType::Output => output_json_schema(),
    };
    println!("{}", schema);
    Ok(())
}

fn read_input(path: &PathBuf) -> Result<String, OrateCliError> {
    if path.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn write_output(path: &PathBuf, data: &str) -> Result<(), OrateCliError> {
    if path.to_string_lossy() == "-" {
        println!("{}", data);
        Ok(())
    } else {
        fs::write(path, data)?;
        Ok(())
    }
}

fn input_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "orate.session.v1",
        "description": "Finished recording session payload",
        "type": "object",
        "required": ["transcript", "duration_ms"],
        "properties": {
            "transcript": { "type": "string" },
            "words": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["word", "start", "end"],
                    "properties": {
                        "word": { "type": "string" },
                        "start": { "type": "number" },
                        "end": { "type": "number" }
                    }
                }
            },
            "volume_history": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["timestamp", "level"],
                    "properties": {
                        "timestamp": { "type": "number" },
                        "level": { "type": "number", "minimum": 0, "maximum": 100 }
                    }
                }
            },
            "duration_ms": { "type": "integer", "minimum": 0 },
            "eye_contact_percentage": { "type": "number", "minimum": 0, "maximum": 100 },
            "posture_score": { "type": "number", "minimum": 0, "maximum": 100 },
            "stuttering_report": { "type": "object" }
        }
    })
    .to_string()
}

fn output_json_schema() -> String {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "orate.report.v1",
        "description": "Performance report for one recording",
        "type": "object",
        "required": ["summary", "speech", "habits", "visual", "transcript", "recommendations"],
        "properties": {
            "summary": {
                "type": "object",
                "properties": {
                    "overall_score": { "type": "number" },
                    "clarity_score": { "type": "number" },
                    "habits_score": { "type": "number" },
                    "fluency_score": { "type": "number" }
                }
            },
            "speech": { "type": "object" },
            "habits": {
                "type": "object",
                "properties": {
                    "delivery": { "type": "object" },
                    "vocal": { "type": "object" },
                    "cognitive": { "type": "object" }
                }
            },
            "visual": { "type": "object" },
            "stuttering": { "type": "object" },
            "transcript": { "type": "string" },
            "recommendations": {
                "type": "array",
                "items": { "type": "string" },
                "maxItems": 8
            }
        }
    })
    .to_string()
}

// Error types

#[derive(Debug)]
enum OrateCliError {
    Io(io::Error),
    Analysis(AnalysisError),
    Json(serde_json::Error),
    ValidationFailed,
}

impl From<io::Error> for OrateCliError {
    fn from(e: io::Error) -> Self {
        OrateCliError::Io(e)
    }
}

impl From<AnalysisError> for OrateCliError {
    fn from(e: AnalysisError) -> Self {
        OrateCliError::Analysis(e)
    }
}

impl From<serde_json::Error> for OrateCliError {
    fn from(e: serde_json::Error) -> Self {
        OrateCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<OrateCliError> for CliError {
    fn from(e: OrateCliError) -> Self {
        match e {
            OrateCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            OrateCliError::Analysis(e) => CliError {
                code: "SESSION_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Run 'orate schema input' for the expected payload".to_string()),
            },
            OrateCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            OrateCliError::ValidationFailed => CliError {
                code: "VALIDATION_FAILED".to_string(),
                message: "Session payload failed validation".to_string(),
                hint: Some("Fix the reported error and retry".to_string()),
            },
        }
    }
}

#[derive(serde::Serialize)]
struct ValidationReport {
    valid: bool,
    word_count: usize,
    volume_samples: usize,
    duration_ms: u64,
    error: Option<String>,
}

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use legal_docgen::documents::{DocumentForm, DocumentType};
use legal_docgen::{render, DocError, FormSession, RenderConfig, RenderRequest, SignatureSlot, DEFAULT_WATERMARK};

#[derive(Parser)]
#[command(name = "legal-docgen", version, about = "Generate watermarked, signature-ready legal documents as PDF")]
struct Cli {
    /// JSON file overriding branding, footer, QR and logo settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the document types
    Types,

    /// Show the fields and signature slots of a document type
    Fields {
        #[arg(value_parser = parse_document_type)]
        doc_type: DocumentType,
    },

    /// Print the assembled body text without rendering
    Preview {
        #[arg(short = 't', long = "type", value_parser = parse_document_type)]
        doc_type: DocumentType,

        /// JSON object of field values, or a saved session
        #[arg(short, long)]
        form: PathBuf,

        /// "Made on" date, defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Validate a form and render it to PDF
    Generate {
        #[arg(short = 't', long = "type", value_parser = parse_document_type)]
        doc_type: DocumentType,

        #[arg(short, long)]
        form: PathBuf,

        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        assets: AssetArgs,

        /// Output file, defaults to the session file name or legal_document.pdf
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render raw body text with a subject line
    Render {
        /// Text file holding the body
        #[arg(long)]
        body: PathBuf,

        #[arg(long)]
        subject: String,

        #[command(flatten)]
        assets: AssetArgs,

        #[arg(short, long, default_value = "legal_document.pdf")]
        output: PathBuf,
    },
}

#[derive(Args)]
struct AssetArgs {
    /// Custom logo (PNG or JPEG)
    #[arg(long)]
    logo: Option<PathBuf>,

    #[arg(long)]
    sig_party1: Option<PathBuf>,

    #[arg(long)]
    sig_party2: Option<PathBuf>,

    #[arg(long)]
    sig_guarantor: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_WATERMARK)]
    watermark: String,
}

impl AssetArgs {
    fn signature_path(&self, slot: SignatureSlot) -> Option<&Path> {
        match slot {
            SignatureSlot::Party1 => self.sig_party1.as_deref(),
            SignatureSlot::Party2 => self.sig_party2.as_deref(),
            SignatureSlot::Guarantor => self.sig_guarantor.as_deref(),
        }
    }

    /// Attach logo, watermark and the signatures `accepts` allows
    fn apply(
        &self,
        mut request: RenderRequest,
        accepts: impl Fn(SignatureSlot) -> bool,
    ) -> Result<RenderRequest, DocError> {
        if let Some(path) = &self.logo {
            request = request.with_logo(std::fs::read(path)?);
        }
        request = request.with_watermark(self.watermark.clone());
        for slot in SignatureSlot::ALL {
            let Some(path) = self.signature_path(slot) else {
                continue;
            };
            if !accepts(slot) {
                warn!("{} signature is not used by this document, ignoring {}", slot, path.display());
                continue;
            }
            request = request.with_signature(slot, Some(std::fs::read(path)?));
        }
        Ok(request)
    }
}

fn parse_document_type(s: &str) -> Result<DocumentType, String> {
    s.parse::<DocumentType>().map_err(|unknown| {
        let known: Vec<&str> = DocumentType::ALL.iter().map(|t| t.slug()).collect();
        format!("unknown document type '{}' (expected one of: {})", unknown, known.join(", "))
    })
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("{}: {}", s, e))
}

fn load_config(path: Option<&Path>) -> Result<RenderConfig, DocError> {
    match path {
        Some(path) => Ok(RenderConfig::from_json_file(path)?),
        None => Ok(RenderConfig::default()),
    }
}

fn load_session(doc_type: DocumentType, path: &Path) -> Result<FormSession, DocError> {
    let json = std::fs::read_to_string(path)?;
    FormSession::from_form_json(doc_type, &json)
}

fn build_form(session: &FormSession) -> Result<DocumentForm, DocError> {
    let form = session.build_document()?;
    form.validate()?;
    Ok(form)
}

fn write_pdf(bytes: Vec<u8>, output: &Path) -> Result<(), DocError> {
    if bytes.is_empty() {
        return Err(DocError::EmptyOutput);
    }
    std::fs::write(output, &bytes)?;
    println!("Document generated: {} ({} bytes)", output.display(), bytes.len());
    Ok(())
}

fn run(cli: Cli) -> Result<(), DocError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Types => {
            for doc_type in DocumentType::ALL {
                println!("{:<12}{}", doc_type.slug(), doc_type.display_name());
            }
        }
        Command::Fields { doc_type } => {
            println!("{}", doc_type.display_name());
            for field in doc_type.fields() {
                println!("  {:<24}{:?}\t{}", field.key, field.kind, field.label);
            }
            for (slot, label) in doc_type.signature_labels() {
                println!("  {:<24}{}", slot.key(), label);
            }
        }
        Command::Preview { doc_type, form, date } => {
            let session = load_session(doc_type, &form)?;
            let form = build_form(&session)?;
            let made_on = date.unwrap_or_else(|| Local::now().date_naive());
            println!("{}", form.subject());
            print!("{}", form.body(made_on));
        }
        Command::Generate { doc_type, form, date, assets, output } => {
            let session = load_session(doc_type, &form)?;
            let form = build_form(&session)?;
            let made_on = date.unwrap_or_else(|| Local::now().date_naive());

            let request = form.to_render_request(made_on)?;
            let request = assets.apply(request, |slot| doc_type.accepts_signature(slot))?;
            let output = output.unwrap_or_else(|| PathBuf::from(session.output_file_name()));

            info!("Generating {} into {}", doc_type, output.display());
            write_pdf(render(&request, &config)?, &output)?;
        }
        Command::Render { body, subject, assets, output } => {
            let body = std::fs::read_to_string(body)?;
            let request = assets.apply(RenderRequest::new(body, subject), |_| true)?;
            write_pdf(render(&request, &config)?, &output)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(DocError::Validation(errors)) => {
            for error in errors.iter() {
                eprintln!("❌ {}", error);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

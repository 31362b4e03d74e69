use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use consult_core::battery::TEST_BATTERY;
use consult_core::{
    persist_report, ClinicalInput, JsonRenderer, MarkdownRenderer, ReportAssembler, ReportConfig,
    ReportRenderer, PAI_SCALE_STRUCTURE,
};
use dictation::{
    spawn_dictation, ChatCompletionsCleaner, CleanupConfig, PassthroughCleaner,
    TextFileTranscriber, Transcript,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "consult")]
#[command(about = "Psychological consult report generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply spoken punctuation commands to a raw transcript
    Normalize {
        /// Raw transcript file
        file: PathBuf,
    },
    /// Run the dictation pipeline on a raw transcript file
    Dictate {
        /// Raw transcript file
        file: PathBuf,
        /// Send the normalised transcript to the grammar cleanup service
        #[arg(long)]
        clean: bool,
    },
    /// Assemble a report from clinical input and write it to disk
    Generate {
        /// Clinical input (YAML, or JSON with a .json extension)
        #[arg(long)]
        input: PathBuf,
        /// Raw clinical interview transcript, overrides the input's interview
        #[arg(long)]
        interview: Option<PathBuf>,
        /// Raw consultation transcript, overrides the input's consultation
        #[arg(long)]
        consult: Option<PathBuf>,
        /// Practice configuration (YAML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
        /// Write the report even if required fields are blank
        #[arg(long)]
        allow_incomplete: bool,
    },
    /// List the PAI domains and their subscales
    Scales,
    /// List the test battery (* marks the default selection)
    Tests,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    fn renderer(self) -> Box<dyn ReportRenderer> {
        match self {
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
            OutputFormat::Json => Box::new(JsonRenderer::new(true)),
        }
    }
}

fn read_transcript(path: &Path) -> anyhow::Result<Transcript> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading transcript {}", path.display()))?;
    Ok(Transcript::new(raw).normalize())
}

fn dictate(file: PathBuf, clean: bool) -> anyhow::Result<Transcript> {
    let job = if clean {
        let cleaner = ChatCompletionsCleaner::new(CleanupConfig::from_env())
            .context("configuring transcript cleanup")?;
        spawn_dictation(TextFileTranscriber, cleaner, file)
    } else {
        spawn_dictation(TextFileTranscriber, PassthroughCleaner, file)
    };
    job.join().context("dictation failed")
}

fn generate(
    input: &Path,
    interview: Option<&Path>,
    consult: Option<&Path>,
    config: Option<&Path>,
    out: &Path,
    format: OutputFormat,
    allow_incomplete: bool,
) -> anyhow::Result<PathBuf> {
    let config = ReportConfig::resolve(config).context("loading report configuration")?;
    let mut clinical = ClinicalInput::load(input)
        .with_context(|| format!("loading clinical input {}", input.display()))?;

    if let Some(path) = interview {
        clinical.interview = read_transcript(path)?;
    }
    if let Some(path) = consult {
        clinical.consultation = read_transcript(path)?;
    }

    if allow_incomplete {
        let missing = clinical.missing_required();
        if !missing.is_empty() {
            tracing::warn!("writing incomplete report, missing: {}", missing.join(", "));
        }
    } else {
        clinical.ensure_complete()?;
    }

    let assembler = ReportAssembler::new(config);
    let document = assembler.assemble(&clinical);
    let renderer = format.renderer();

    let path = persist_report(
        out,
        &clinical.patient,
        assembler.config(),
        renderer.as_ref(),
        &document,
    )?;
    Ok(path)
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("consult=info".parse()?)
                .add_directive("dictation=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Normalize { file }) => {
            let transcript = read_transcript(&file)?;
            println!("{}", transcript.as_str());
        }
        Some(Commands::Dictate { file, clean }) => {
            let transcript = dictate(file, clean)?;
            println!("{}", transcript.as_str());
        }
        Some(Commands::Generate {
            input,
            interview,
            consult,
            config,
            out,
            format,
            allow_incomplete,
        }) => {
            let path = generate(
                &input,
                interview.as_deref(),
                consult.as_deref(),
                config.as_deref(),
                &out,
                format,
                allow_incomplete,
            )?;
            println!("Report written to {}", path.display());
        }
        Some(Commands::Scales) => {
            for domain in PAI_SCALE_STRUCTURE.iter() {
                if domain.subscales.is_empty() {
                    println!("{}", domain.name);
                } else {
                    println!("{}: {}", domain.name, domain.subscales.join(", "));
                }
            }
        }
        Some(Commands::Tests) => {
            for test in TEST_BATTERY.iter() {
                let marker = if test.default_selected { "*" } else { " " };
                println!("{marker} {}", test.name);
            }
        }
        None => {
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

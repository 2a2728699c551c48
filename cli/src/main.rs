//! docsect CLI - section detection and snippet extraction tool

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docsect::render::{to_json, to_text};
use docsect::{
    preprocess_for_matching, select_normalizer, AutoReader, BatchExtractor, BatchOptions,
    FontStatistics, JsonFormat, SectionOptions, SectionPipeline, SectionRecord, SectionType,
    SnippetScorer,
};

#[derive(Parser)]
#[command(name = "docsect")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Split document text into classified sections and query snippets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split documents into sections
    Sections {
        /// Input files (plain text or page JSON)
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output JSON instead of text
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Only keep sections of this type
        #[arg(long = "type", value_enum)]
        section_type: Option<TypeFilter>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Extract query-relevant snippets from a document's sections
    Snippet {
        /// Input file (plain text or page JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Query text
        #[arg(short, long)]
        query: String,

        /// Only this section (0-based index)
        #[arg(long)]
        section: Option<usize>,

        /// Maximum snippet length in characters
        #[arg(long)]
        max_length: Option<usize>,

        /// Normalize the query (lowercase, strip punctuation and short tokens)
        #[arg(long)]
        normalize: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Show page text and font statistics
    Stats {
        /// Input file (plain text or page JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct ConfigArgs {
    /// JSON configuration file
    #[arg(long, value_name = "FILE", env = "DOCSECT_CONFIG")]
    config: Option<PathBuf>,

    /// Minimum section body length in characters
    #[arg(long)]
    min_length: Option<usize>,

    /// Documents read concurrently
    #[arg(long, default_value = "4")]
    workers: usize,

    /// Per-document read timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

impl ConfigArgs {
    fn section_options(&self) -> Result<SectionOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => SectionOptions::from_json_file(path)?,
            None => SectionOptions::default(),
        };
        if let Some(len) = self.min_length {
            options = options.with_min_section_length(len);
        }
        Ok(options)
    }

    fn batch_options(&self) -> BatchOptions {
        BatchOptions::new()
            .with_max_workers(self.workers)
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TypeFilter {
    Introduction,
    Conclusion,
    Methodology,
    Results,
    Discussion,
    References,
    Content,
}

impl From<TypeFilter> for SectionType {
    fn from(filter: TypeFilter) -> Self {
        match filter {
            TypeFilter::Introduction => SectionType::Introduction,
            TypeFilter::Conclusion => SectionType::Conclusion,
            TypeFilter::Methodology => SectionType::Methodology,
            TypeFilter::Results => SectionType::Results,
            TypeFilter::Discussion => SectionType::Discussion,
            TypeFilter::References => SectionType::References,
            TypeFilter::Content => SectionType::Content,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sections {
            inputs,
            output,
            json,
            compact,
            section_type,
            config,
        } => cmd_sections(
            &inputs,
            output.as_deref(),
            json,
            compact,
            section_type,
            &config,
        ),
        Commands::Snippet {
            input,
            query,
            section,
            max_length,
            normalize,
            config,
        } => cmd_snippet(&input, &query, section, max_length, normalize, &config),
        Commands::Stats { input } => cmd_stats(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read and section `inputs`, reporting unreadable documents on stderr.
fn load_sections(
    inputs: &[PathBuf],
    config: &ConfigArgs,
) -> Result<(Vec<SectionRecord>, SectionPipeline), Box<dyn std::error::Error>> {
    let options = config.section_options()?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Reading {} documents...", inputs.len()));

    let batch = BatchExtractor::new(Arc::new(AutoReader::new()))
        .with_options(config.batch_options())
        .extract(inputs)?;

    pb.set_message("Detecting sections...");
    let pipeline = SectionPipeline::new(options);
    let sections = pipeline.process_documents(&batch.documents);
    pb.finish_and_clear();

    for failure in &batch.failures {
        eprintln!(
            "{} {}: {}",
            "Skipped".yellow(),
            failure.document,
            failure.error
        );
    }

    Ok((sections, pipeline))
}

fn cmd_sections(
    inputs: &[PathBuf],
    output: Option<&Path>,
    json: bool,
    compact: bool,
    section_type: Option<TypeFilter>,
    config: &ConfigArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (mut sections, _) = load_sections(inputs, config)?;

    if let Some(filter) = section_type {
        let wanted = SectionType::from(filter);
        sections.retain(|s| s.section_type == wanted);
    }

    let rendered = if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        to_json(&sections, format)?
    } else {
        to_text(&sections)
    };

    if let Some(path) = output {
        fs::write(path, &rendered)?;
        println!(
            "{} {} ({} sections)",
            "Saved to".green(),
            path.display(),
            sections.len()
        );
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn cmd_snippet(
    input: &Path,
    query: &str,
    section: Option<usize>,
    max_length: Option<usize>,
    normalize: bool,
    config: &ConfigArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (sections, pipeline) = load_sections(&[input.to_path_buf()], config)?;

    let query = if normalize {
        preprocess_for_matching(query, select_normalizer(None).as_ref())
    } else {
        query.to_string()
    };

    let mut scorer = pipeline.snippet_scorer();
    if let Some(max) = max_length {
        scorer = SnippetScorer::new(max).with_weights(pipeline.options().weights.clone());
    }

    let selected: Vec<(usize, &SectionRecord)> = match section {
        Some(index) => {
            let record = sections.get(index).ok_or_else(|| {
                format!(
                    "Section {} is out of range ({} sections found)",
                    index,
                    sections.len()
                )
            })?;
            vec![(index, record)]
        }
        None => sections.iter().enumerate().collect(),
    };

    for (index, record) in selected {
        println!(
            "{} {} {}",
            format!("[{}]", index).dimmed(),
            record.title.cyan().bold(),
            format!("({})", record.location()).dimmed()
        );
        println!("{}\n", scorer.extract(&record.body, &query));
    }

    Ok(())
}

fn cmd_stats(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let pages = docsect::read_file(input)?;

    println!("{}", "Document Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), pages.len());

    for page in &pages {
        let stats = page.statistics();
        println!();
        println!("{}", format!("Page {}", page.page_number).cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}: {}", "Words".bold(), stats.word_count);
        println!("{}: {}", "Characters".bold(), stats.char_count);
        println!("{}: {}", "Sentences".bold(), stats.sentence_count);
        println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
        println!(
            "{}: {:.2}",
            "Avg word length".bold(),
            stats.avg_word_length
        );
        println!(
            "{}: {:.3}",
            "Uppercase ratio".bold(),
            stats.uppercase_ratio
        );

        if let Some(fonts) = FontStatistics::from_spans(&page.font_spans) {
            println!(
                "{}: avg {:.1}pt, std {:.2}, max {:.1}pt, bold {:.0}%",
                "Fonts".bold(),
                fonts.avg_size,
                fonts.std_size,
                fonts.max_size,
                fonts.bold_ratio * 100.0
            );
            if page.is_misaligned() {
                println!(
                    "{}",
                    "  font spans do not align with text lines".yellow()
                );
            }
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docsect".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Section detection and snippet extraction tool");
    println!();
    println!("License: MIT");
}

mod echo;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use clearread_core::{
    Document, ExtractConfig, Extractor, FetchConfig, JsonConfig, MarkdownConfig, OutputFormat, TextConfig,
    convert_to_json, convert_to_markdown, convert_to_text, fetch_file, fetch_stdin, fetch_url,
};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use url::Url;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract a clean, readable document from a web page
#[derive(Parser, Debug)]
#[command(name = "clearread")]
#[command(author = "ClearRead Contributors")]
#[command(version)]
#[command(about = "Extract readable documents from web pages", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (markdown, json, text, speech, html)
    #[arg(short, long, default_value = "markdown", value_name = "FORMAT")]
    format: OutputFormat,

    /// Include TOML frontmatter (Markdown) or reading metrics (JSON)
    #[arg(long)]
    frontmatter: bool,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Shortest text, in characters, kept as a block
    #[arg(long, default_value = "10", value_name = "NUM")]
    min_block_chars: usize,

    /// A div must be longer than this to count as a paragraph
    #[arg(long, default_value = "50", value_name = "NUM")]
    min_div_chars: usize,

    /// Fewer structural blocks than this switches to sentence splitting
    #[arg(long, default_value = "3", value_name = "NUM")]
    min_structured_blocks: usize,

    /// A split sentence must be longer than this to be kept
    #[arg(long, default_value = "20", value_name = "NUM")]
    min_sentence_chars: usize,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,

    /// Wrap plain text output at this width (0 = no wrapping)
    #[arg(long, default_value = "0", value_name = "COLS")]
    width: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn extract_config(&self) -> ExtractConfig {
        ExtractConfig::builder()
            .min_block_chars(self.min_block_chars)
            .min_div_chars(self.min_div_chars)
            .min_structured_blocks(self.min_structured_blocks)
            .min_sentence_chars(self.min_sentence_chars)
            .build()
    }

    fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig { timeout: self.timeout, user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent) }
    }

    fn is_url(&self) -> bool {
        self.input.starts_with("http://") || self.input.starts_with("https://")
    }
}

/// Install a stderr subscriber when asked for, leaving stdout to the document.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clearread_core=debug"))
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

async fn load_input(args: &Args) -> anyhow::Result<String> {
    if args.input == "-" {
        if args.verbose {
            echo::print_step(1, 4, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")
    } else if args.is_url() {
        if args.verbose {
            echo::print_step(
                1,
                4,
                &format!("Fetching from {}", args.input.bright_white().underline()),
            );
        }
        fetch_url(&args.input, &args.fetch_config())
            .await
            .context("Failed to fetch URL")
    } else {
        if args.verbose {
            echo::print_step(1, 4, &format!("Reading from file {}", args.input.bright_white()));
        }
        fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    let html = load_input(&args).await?;

    if args.verbose {
        echo::print_field("Size", &echo::format_size(html.len()));
        eprintln!();
        echo::print_step(2, 4, "Parsing HTML document");
    }

    let doc = Document::parse(&html).context("Failed to parse HTML")?;
    let config = args.extract_config();

    if args.verbose {
        eprintln!();
        echo::print_step(3, 4, "Extracting main content");
    }

    let extractor = Extractor::with_config(config);
    let extraction = match extractor.extract_with_strategies(&doc) {
        Ok(extraction) => extraction,
        Err(e) if e.is_extraction_failure() => {
            echo::print_error(&e.to_string());
            std::process::exit(2);
        }
        Err(e) => return Err(e).context("Failed to extract content"),
    };

    if args.verbose {
        echo::print_strategies(extraction.locator, extraction.title_source, extraction.segmenter);
    }

    let mut extracted = extraction.document;

    if args.is_url() && Url::parse(&args.input).is_ok() {
        extracted = extracted.with_source_url(args.input.as_str());
    }

    if args.verbose {
        echo::print_extraction_details(&extracted);
    }

    let output = match args.format {
        OutputFormat::Markdown => {
            let config = MarkdownConfig { include_frontmatter: args.frontmatter, ..Default::default() };
            convert_to_markdown(&extracted, &config)
        }
        OutputFormat::Json => {
            let config = JsonConfig { include_metrics: args.frontmatter, pretty: args.pretty };
            let mut json = convert_to_json(&extracted, &config).context("Failed to convert to JSON")?;
            json.push('\n');
            json
        }
        OutputFormat::PlainText => {
            let config = TextConfig { line_width: args.width, ..Default::default() };
            let mut text = convert_to_text(&extracted, &config);
            text.push('\n');
            text
        }
        OutputFormat::Speech => {
            let mut speech = extracted.to_format(OutputFormat::Speech)?;
            speech.push('\n');
            speech
        }
        OutputFormat::Html => extracted.to_format(OutputFormat::Html)?,
    };

    if args.verbose {
        echo::print_step(4, 4, "Writing output");
        if args.format == OutputFormat::Markdown && args.frontmatter {
            echo::print_field("Frontmatter", "Yes");
        }
        echo::print_field("Format", &format!("{:?}", args.format));
        eprintln!();
    }

    match &args.output {
        Some(path) => {
            fs::write(path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            echo::print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}

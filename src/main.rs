use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use selector_lens::document::{self, Target};
use selector_lens::{browser, report, SelectorResult};

#[derive(Parser)]
#[command(name = "selector-lens")]
#[command(about = "Point at an element, get Cypress, Playwright and Selenium locators")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize locators for specific elements of an HTML file, URL, or stdin
    Inspect {
        /// HTML file path, URL (http/https), or '-' for stdin
        input: String,

        /// CSS selector picking the element(s) to inspect
        #[arg(short, long)]
        select: Option<String>,

        /// Viewport point "X,Y" to inspect (URL mode only), like hovering there
        #[arg(short, long, value_parser = parse_point)]
        at: Option<(f64, f64)>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Chrome debugging port (for URL mode)
        #[arg(short, long, default_value_t = 9222)]
        port: u16,

        /// Launch a new headless Chrome instead of connecting
        #[arg(short, long)]
        launch: bool,
    },

    /// Synthesize locators for every interactive element
    Scan {
        /// HTML file path, URL (http/https), or '-' for stdin
        input: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Chrome debugging port (for URL mode)
        #[arg(short, long, default_value_t = 9222)]
        port: u16,

        /// Launch a new headless Chrome instead of connecting
        #[arg(short, long)]
        launch: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect {
            input,
            select,
            at,
            format,
            port,
            launch,
        } => {
            info!(input = %input, format = %format, "inspect command");
            match (select, at) {
                (Some(_), Some(_)) => bail!("Use either --select or --at, not both"),
                (None, None) => bail!("Pick an element with --select <css> or --at <x,y>"),
                (Some(css), None) => {
                    let html = load_html(&input, port, launch)?;
                    run(&html, Target::Selector(&css), &format)
                }
                (None, Some((x, y))) => {
                    if !is_url(&input) {
                        bail!("--at needs a rendered page; pass an http(s) URL");
                    }
                    let rt = tokio::runtime::Runtime::new()?;
                    let html = rt.block_on(async {
                        let browser = browser::open(port, launch).await?;
                        browser::fetch_page_with_pointer(&browser, &input, x, y).await
                    })?;
                    run(&html, Target::Marked, &format)
                }
            }
        }
        Commands::Scan {
            input,
            format,
            port,
            launch,
        } => {
            info!(input = %input, format = %format, "scan command");
            let html = load_html(&input, port, launch)?;
            run(&html, Target::Interactive, &format)
        }
    }
}

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

fn load_html(input: &str, port: u16, launch: bool) -> Result<String> {
    if is_url(input) {
        let rt = tokio::runtime::Runtime::new()?;
        return rt.block_on(async {
            let browser = browser::open(port, launch).await?;
            browser::fetch_page(&browser, input).await
        });
    }

    document::read_source(input)
}

fn run(html: &str, target: Target<'_>, format: &str) -> Result<()> {
    let doc = document::parse(html);
    let results = document::inspect(&doc, target)?;
    debug!(results = results.len(), "locators synthesized");
    print_output(&results, format)
}

fn print_output<N>(results: &[SelectorResult<N>], format: &str) -> Result<()> {
    let output = match format {
        "json" => serde_json::to_string_pretty(results)?,
        _ => report::to_compact_text_all(results),
    };
    println!("{}", output.trim_end());
    Ok(())
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad X: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad Y: {e}"))?;
    Ok((x, y))
}

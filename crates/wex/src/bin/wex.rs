// ABOUTME: CLI binary for wex: extract the article from a URL, file, or stdin.
// ABOUTME: Prints Markdown (or raw HTML with --raw) to stdout and metadata JSON to stderr with --meta.

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use wex::{extract, resource, ArticleContent, Client, OutputFormat};

/// Extract article content from any URL.
///
/// Removes clutter like ads, navigation, and scripts, giving you clean,
/// readable content.
///
/// Examples:
///   wex https://example.com/article.html > article.md
///   wex --raw https://example.com/article.html > article.html
///   wex --meta https://example.com/article.html | less
#[derive(Parser, Debug)]
#[command(name = "wex", version)]
#[command(about = "Extract article content from any URL")]
struct Args {
    /// Output raw HTML instead of markdown
    #[arg(short = 'r', long = "raw")]
    raw: bool,

    /// Show article metadata (JSON on stderr)
    #[arg(short = 'm', long = "meta")]
    meta: bool,

    /// URL to extract (http/https), a local HTML file, or "-" for stdin
    target: String,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Reads markup from stdin ("-") or a local file.
fn load_markup(target: &str) -> Result<String> {
    let bytes = if target == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("error reading stdin")?;
        buf
    } else {
        fs::read(target).with_context(|| format!("error reading file {}", target))?
    };
    Ok(resource::decode_body(&bytes, None))
}

async fn load_article(target: &str) -> Result<ArticleContent> {
    if is_url(target) {
        debug!(url = target, "fetching page");
        let client = Client::builder().build()?;
        Ok(client.parse(target).await?)
    } else {
        debug!(path = target, "reading local markup");
        let markup = load_markup(target)?;
        Ok(extract(&markup)?)
    }
}

async fn run(args: Args) -> Result<()> {
    let article = load_article(&args.target)
        .await
        .context("extraction failed")?;
    debug!(
        content_len = article.content.len(),
        title = %article.metadata.title,
        "article extracted"
    );

    if args.meta {
        let json = article
            .metadata
            .to_json_pretty()
            .context("error formatting metadata")?;
        eprintln!("{}", json);
    }

    let format = if args.raw {
        OutputFormat::Html
    } else {
        OutputFormat::Markdown
    };
    let output = Client::render(&article, format).context("markdown conversion failed")?;
    println!("{}", output);

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

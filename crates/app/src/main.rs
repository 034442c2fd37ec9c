use chrono::Utc;
use clap::{Parser, Subcommand};
use news_search_core::{Article, CmsFeedClient, SearchRequest, SearchSession};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "news-search", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the CMS content API
    #[arg(long, env = "NEWS_API_BASE", default_value = "http://127.0.0.1:8000")]
    api_base: String,

    /// Section feeds assembled into the corpus, in priority order
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "politics,business,sports"
    )]
    sections: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble the corpus and print the full ranked results page.
    Search {
        /// Search query
        #[arg(long)]
        query: String,
        /// Restrict results to one section before scoring.
        #[arg(long)]
        section: Option<String>,
        /// Maximum number of results to print (unlimited by default).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print the inline suggestion list for a partial query.
    Suggest {
        /// Query typed so far
        #[arg(long)]
        query: String,
    },
    /// Assemble the corpus and print every article in priority order.
    Corpus,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let feeds = CmsFeedClient::new(&cli.api_base)?;
    let session = SearchSession::new(feeds, cli.sections.clone());

    info!(
        version = app_version,
        api_base = %cli.api_base,
        started_at = %Utc::now().to_rfc3339(),
        "news-search boot"
    );

    match cli.command {
        Command::Search {
            query,
            section,
            limit,
        } => {
            let request = SearchRequest {
                text: query.clone(),
                section,
                limit,
            };

            let results = session.search(&request).await;
            println!("query: {query}");
            println!(
                "{} result{} found",
                results.len(),
                if results.len() == 1 { "" } else { "s" }
            );
            for article in &results {
                print_article(article);
            }
        }
        Command::Suggest { query } => {
            let suggestions = session.suggest(&query).await;
            if suggestions.is_empty() {
                println!("no suggestions for \"{query}\"");
            }
            for article in &suggestions {
                print_article(article);
            }
        }
        Command::Corpus => {
            let corpus = session.corpus().await;
            println!("{} articles assembled", corpus.len());
            for article in corpus.iter() {
                print_article(article);
            }
        }
    }

    Ok(())
}

fn print_article(article: &Article) {
    let section = if article.section.is_empty() {
        "-"
    } else {
        article.section.as_str()
    };
    println!("[{}] {} ({})", section, article.title, article.slug);
    if !article.excerpt.is_empty() {
        println!("  {}", article.excerpt);
    }
}

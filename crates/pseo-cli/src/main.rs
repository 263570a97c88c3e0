mod serve;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, WrapErr};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pseo_core::analytics::{
    generate_graduation_report, identify_graduation_candidates, suggest_promotion_actions,
    MockAnalyticsProvider,
};
use pseo_core::quality::quality_grade;
use pseo_core::{Config, PseoEngine};

#[derive(Parser)]
#[command(name = "pseo")]
#[command(about = "Programmatic SEO content engine", long_about = None)]
struct Cli {
    /// Config file (defaults to ./pseo.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level for pseo crates (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print one page
    Page {
        slug: String,
        #[arg(long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },
    /// List every page with its quality score
    List {
        /// Only pages that belong in the sitemap
        #[arg(long)]
        qualified: bool,
    },
    /// Print sitemap XML (the index when no option is given)
    Sitemap {
        /// Programmatic chunk id, starting at 1
        #[arg(long, conflicts_with_all = ["index", "static_sitemap"])]
        chunk: Option<usize>,
        #[arg(long, conflicts_with = "static_sitemap")]
        index: bool,
        /// Home, landing and category hub URLs
        #[arg(long = "static")]
        static_sitemap: bool,
    },
    /// Show related links for a slug, or check the whole link graph
    Links { slug: Option<String> },
    /// Show the category overview, or one category hub
    Hub { category: Option<String> },
    /// Graduation reports from the mock analytics provider
    Graduation {
        /// Slugs to report on (all pages when empty)
        slugs: Vec<String>,
    },
    /// Print the default configuration as TOML
    Config,
    /// Serve pages and sitemaps over HTTP
    Serve {
        #[arg(long)]
        port: Option<u16>,
        /// Open the browser once listening
        #[arg(long)]
        open: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    if let Commands::Config = cli.command {
        print!("{}", Config::default_config_string());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    let engine = Arc::new(PseoEngine::builtin(config).wrap_err("failed to build engine")?);

    match cli.command {
        Commands::Page { slug, format } => print_page(&engine, &slug, format)?,
        Commands::List { qualified } => list_pages(&engine, qualified),
        Commands::Sitemap {
            chunk,
            index: _,
            static_sitemap,
        } => print_sitemap(&engine, chunk, static_sitemap)?,
        Commands::Links { slug } => print_links(&engine, slug.as_deref())?,
        Commands::Hub { category } => print_hubs(&engine, category.as_deref())?,
        Commands::Graduation { slugs } => print_graduation(&engine, slugs).await?,
        Commands::Serve { port, open } => {
            let mut serve_config = serve::ServeConfig::from(&engine.config().server);
            if let Some(port) = port {
                serve_config.port = port;
            }
            serve_config.open_browser |= open;
            serve::start_server(engine, serve_config)
                .await
                .map_err(|e| eyre!("server error: {e}"))?;
        }
        Commands::Config => {}
    }

    Ok(())
}

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean.
fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("pseo={log_level},pseo_core={log_level},info").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> color_eyre::Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)
            .wrap_err_with(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load().wrap_err("failed to load config")?,
    };
    apply_env_overrides(&mut config)?;
    config.validate()?;
    debug!(base_url = %config.sitemap.base_url, chunk_size = config.sitemap.chunk_size, "config loaded");
    Ok(config)
}

/// Apply `PSEO_*` environment variable overrides.
fn apply_env_overrides(config: &mut Config) -> color_eyre::Result<()> {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from `lookup`; a value that does not parse is an error.
fn apply_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> color_eyre::Result<()> {
    if let Some(url) = lookup("PSEO_BASE_URL") {
        config.sitemap.base_url = url;
    }
    if let Some(size) = lookup("PSEO_CHUNK_SIZE") {
        config.sitemap.chunk_size = size
            .trim()
            .parse()
            .wrap_err_with(|| format!("PSEO_CHUNK_SIZE must be a positive integer, got {size:?}"))?;
    }
    if let Some(port) = lookup("PSEO_PORT") {
        config.server.port = port
            .trim()
            .parse()
            .wrap_err_with(|| format!("PSEO_PORT must be a port number, got {port:?}"))?;
    }
    Ok(())
}

// =============================================================================
// Commands
// =============================================================================

fn print_page(engine: &PseoEngine, slug: &str, format: Format) -> color_eyre::Result<()> {
    let page = engine
        .page_by_slug(slug)
        .ok_or_else(|| eyre!("unknown slug: {slug}"))?;
    let quality = engine.check_quality(&page);
    let grade = quality_grade(quality.score);

    match format {
        Format::Markdown => {
            print!("{}", page.to_markdown());
            println!("---");
            println!("Quality: {} ({})", quality.score, grade);
            for failure in &quality.failures {
                println!(
                    "  [{:?}] {}: {}",
                    failure.severity,
                    failure.rule.as_str(),
                    failure.message
                );
            }
        }
        Format::Json => {
            let json = serde_json::json!({
                "page": &page,
                "quality": &quality,
                "grade": grade,
                "metadata": engine.metadata(slug),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    if engine.should_return_404(Some(&page)) {
        return Err(eyre!("page '{slug}' fails the quality bar and would be served as not found"));
    }
    Ok(())
}

fn list_pages(engine: &PseoEngine, qualified: bool) {
    let pages = if qualified {
        engine.qualified_pages()
    } else {
        engine.all_pages()
    };

    for page in &pages {
        println!(
            "{:<3} {:>3}  {}{}",
            quality_grade(page.quality_score),
            page.quality_score,
            page.slug,
            if page.exclude_from_sitemap { "  (noindex)" } else { "" }
        );
    }
    println!("\n{} of {} pages", pages.len(), engine.page_count());
}

fn print_sitemap(
    engine: &PseoEngine,
    chunk: Option<usize>,
    static_sitemap: bool,
) -> color_eyre::Result<()> {
    let xml = match chunk {
        Some(id) => engine
            .sitemap_chunk(id)
            .map(|chunk| chunk.to_xml())
            .ok_or_else(|| eyre!("sitemap chunk {id} not found"))?,
        None if static_sitemap => engine.static_sitemap_xml(Utc::now()),
        None => engine.sitemap_index_xml(Utc::now()),
    };
    println!("{xml}");
    Ok(())
}

fn print_links(engine: &PseoEngine, slug: Option<&str>) -> color_eyre::Result<()> {
    let Some(slug) = slug else {
        let report = engine.validate_links();
        println!("Orphaned pages: {}", report.orphaned.len());
        for orphan in &report.orphaned {
            println!("  {orphan}");
        }
        println!("Mutual links: {}", report.circular_chains.len());
        for [a, b] in &report.circular_chains {
            println!("  {a} <-> {b}");
        }
        return Ok(());
    };

    if engine.taxonomy().intent_by_slug(slug).is_none() {
        return Err(eyre!("unknown slug: {slug}"));
    }
    for link in engine.related_links(slug) {
        println!("{:<14} {:<50} {}", link.link_type.as_str(), link.slug, link.title);
    }
    Ok(())
}

fn print_hubs(engine: &PseoEngine, category: Option<&str>) -> color_eyre::Result<()> {
    match category {
        Some(id) => {
            let hub = engine
                .category_hub(id)
                .ok_or_else(|| eyre!("unknown category: {id}"))?;
            println!("{} ({} pages)", hub.category.name, hub.total_intents);
            println!("{}\n", hub.category.description);
            for cluster in &hub.clusters {
                println!("{}", cluster.name);
                for intent in &cluster.intents {
                    println!("  {:<50} {}", intent.slug, intent.intent);
                }
            }
        }
        None => {
            let overview = engine.hub_overview();
            for group in &overview.groups {
                println!("{}", group.category_type.as_str());
                for hub in &group.hubs {
                    println!("  {:<20} {:>3}  {}", hub.category.id, hub.total_intents, hub.category.name);
                }
            }
            println!("\n{} pages total", overview.total_pages);
        }
    }
    Ok(())
}

async fn print_graduation(engine: &PseoEngine, slugs: Vec<String>) -> color_eyre::Result<()> {
    let criteria = &engine.config().graduation;
    let slugs = if slugs.is_empty() {
        engine
            .taxonomy()
            .all_slugs()
            .into_iter()
            .map(String::from)
            .collect()
    } else {
        slugs
    };
    let provider = MockAnalyticsProvider::with_tracked_slugs(slugs.iter().cloned());

    for slug in &slugs {
        let Some(report) = generate_graduation_report(&provider, slug, criteria).await? else {
            println!("{slug}: no data");
            continue;
        };
        println!(
            "{:<50} {:<9} {}",
            report.slug,
            report.recommendation.as_str(),
            report.reason
        );
        for action in suggest_promotion_actions(&report) {
            println!(
                "    -> {} ({}): {}",
                action.action.as_str(),
                action.priority.as_str(),
                action.notes
            );
        }
    }

    let candidates = identify_graduation_candidates(&provider, criteria).await?;
    println!("\nGraduation candidates: {}", candidates.len());
    for slug in candidates {
        println!("  {slug}");
    }
    Ok(())
}

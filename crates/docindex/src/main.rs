//! docindex: inspect, check and search Documenter search indexes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use docindex::search::DEFAULT_SNIPPET_RADIUS;
use docindex::{Category, FormatKind, RenderOptions, SearchIndex, SearchOptions, ValidationConfig};

#[derive(Parser)]
#[command(name = "docindex")]
#[command(author, version, about = "Inspect, check and search Documenter search indexes", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the structure of an index
    Validate {
        /// Index file (search_index.js or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Require every location to be non-empty and unique
        #[arg(long)]
        strict: bool,
    },

    /// Search titles and text
    Search {
        /// Index file (search_index.js or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Search query
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum results to return (0 for all)
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only return entries of this category (repeatable)
        #[arg(short, long)]
        category: Vec<CategoryArg>,

        /// Only return entries of the page with this title
        #[arg(long)]
        page: Option<String>,

        /// Characters of context kept on each side of the match
        #[arg(long, default_value_t = DEFAULT_SNIPPET_RADIUS)]
        snippet_radius: usize,

        /// Site root to prefix links with
        #[arg(long)]
        base_url: Option<String>,
    },

    /// List entries in index order
    List {
        /// Index file (search_index.js or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only list entries of this category (repeatable)
        #[arg(short, long)]
        category: Vec<CategoryArg>,

        /// Site root to prefix links with
        #[arg(long)]
        base_url: Option<String>,
    },

    /// List pages with their entry counts
    Pages {
        /// Index file (search_index.js or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Re-serialize an index in another form
    Convert {
        /// Index file (search_index.js or JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output form
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    /// Page paragraphs
    Page,
    /// Section headings
    Section,
    /// Module docstrings
    Module,
    /// Type docstrings
    Type,
    /// Method docstrings
    Method,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Page => Category::Page,
            CategoryArg::Section => Category::Section,
            CategoryArg::Module => Category::Module,
            CategoryArg::Type => Category::Type,
            CategoryArg::Method => Category::Method,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Compact JSON object
    Json,
    /// Indented JSON object
    Pretty,
    /// `var documenterSearchIndex = ...` script
    Script,
}

impl From<OutputFormat> for FormatKind {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => FormatKind::Json,
            OutputFormat::Pretty => FormatKind::PrettyJson,
            OutputFormat::Script => FormatKind::Script,
        }
    }
}

fn load(file: &Path) -> Result<SearchIndex> {
    tracing::info!("Loading index from {:?}", file);
    SearchIndex::load(file).with_context(|| format!("failed to load {}", file.display()))
}

fn render_options(base_url: Option<String>) -> RenderOptions {
    base_url.map(RenderOptions::with_base_url).unwrap_or_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Validate { file, strict } => {
            let index = load(&file)?;
            let config = if strict {
                ValidationConfig::strict()
            } else {
                ValidationConfig::default()
            };
            let report = index.validate(&config);
            for violation in report.violations() {
                println!("{}", violation);
            }
            if !report.is_valid() {
                anyhow::bail!("{} failed validation: {}", file.display(), report);
            }
            println!("{}: {} entries, ok", file.display(), report.checked());
        }

        Commands::Search {
            file,
            query,
            limit,
            category,
            page,
            snippet_radius,
            base_url,
        } => {
            let index = load(&file)?;
            let mut options = SearchOptions::new()
                .with_limit(limit)
                .with_snippet_radius(snippet_radius);
            for c in category {
                options = options.with_category(c.into());
            }
            if let Some(page) = page {
                options = options.with_page(page);
            }
            let render = render_options(base_url);
            let hits = index.search(&query, &options);
            if hits.is_empty() {
                tracing::info!("No results for {:?}", query);
            }
            for hit in &hits {
                println!("{}", render.hit(hit));
            }
        }

        Commands::List {
            file,
            category,
            base_url,
        } => {
            let index = load(&file)?;
            let categories: Vec<Category> = category.into_iter().map(Category::from).collect();
            let render = render_options(base_url);
            for (position, entry) in index.iter().enumerate() {
                if categories.is_empty() || categories.contains(&entry.category) {
                    println!("{}", render.entry(position, entry));
                }
            }
        }

        Commands::Pages { file } => {
            let index = load(&file)?;
            for page in index.pages() {
                println!("{:>4}  {} ({:?})", page.entry_count, page.title, page.path);
            }
        }

        Commands::Convert {
            file,
            format,
            output,
        } => {
            let index = load(&file)?;
            let kind = FormatKind::from(format);
            match output {
                Some(output) => {
                    index
                        .save(&output, kind)
                        .with_context(|| format!("failed to write {}", output.display()))?;
                    tracing::info!("Wrote {} entries to {:?}", index.len(), output);
                }
                None => {
                    let text = index.write(kind)?;
                    print!("{}", text);
                    if !text.ends_with('\n') {
                        println!();
                    }
                }
            }
        }
    }

    Ok(())
}

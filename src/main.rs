//! CLI entry point for siteset

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "siteset")]
#[command(version)]
#[command(about = "Content backend for the Site.Set blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug to use instead of the slugified title
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// List posts, newest first
    List {
        /// Only show posts whose title or summary contains this text
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print a single post as JSON
    Show {
        /// Post slug
        slug: String,
    },

    /// Print the route parameters for every post
    Params,

    /// Export the blog as JSON files
    #[command(alias = "g")]
    Export,

    /// Start the HTTP API server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Remove the exported files
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "siteset=debug,info"
    } else {
        "siteset=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            siteset::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::New { title, slug } => {
            let site = siteset::Site::new(&base_dir)?;
            let path = siteset::commands::new::create_post(&site, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::List { query } => {
            let site = siteset::Site::new(&base_dir)?;
            siteset::commands::list::run(&site, query.as_deref())?;
        }

        Commands::Show { slug } => {
            let site = siteset::Site::new(&base_dir)?;
            siteset::commands::show::run(&site, &slug)?;
        }

        Commands::Params => {
            let site = siteset::Site::new(&base_dir)?;
            siteset::commands::params::run(&site)?;
        }

        Commands::Export => {
            let site = siteset::Site::new(&base_dir)?;
            tracing::info!("Exporting posts...");
            let report = siteset::commands::generate::run(&site)?;
            println!(
                "Exported {} posts ({} files)",
                report.posts,
                report.files.len()
            );
        }

        Commands::Server { port, ip } => {
            let site = siteset::Site::new(&base_dir)?;
            let port = port.unwrap_or(site.config.server.port);
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            siteset::server::start(&site, &ip, port).await?;
        }

        Commands::Clean => {
            let site = siteset::Site::new(&base_dir)?;
            tracing::info!("Cleaning export directory...");
            siteset::commands::clean::run(&site)?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("siteset version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use blog_server::config::loader::{load_config, ConfigError};
use blog_server::config::ServerConfig;
use blog_server::routing::{catalog, RouteTable};

#[derive(Parser)]
#[command(name = "blog-cli")]
#[command(about = "Management CLI for the blog server", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    Check,
    /// Print the effective route table
    Routes {
        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            let Some(path) = &cli.config else {
                eprintln!("check requires --config <FILE>");
                std::process::exit(2);
            };
            match load_config(path) {
                Ok(config) => {
                    println!(
                        "{}: OK ({} configured routes)",
                        path.display(),
                        config.routes.len()
                    );
                }
                Err(ConfigError::Validation(errors)) => {
                    eprintln!("{}: {} validation error(s)", path.display(), errors.len());
                    for err in errors {
                        eprintln!("  - {}", err);
                    }
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("{}: {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Routes { json } => {
            let config = match &cli.config {
                Some(path) => load_config(path)?,
                None => ServerConfig::default(),
            };
            let table = if config.routes.is_empty() {
                catalog::builtin_table()?
            } else {
                RouteTable::from_config(&config.routes)?
            };

            let mut routes: Vec<_> = table.iter().collect();
            routes.sort_by_key(|(path, _)| *path);

            if json {
                let entries: Vec<_> = routes
                    .iter()
                    .map(|(path, resource)| {
                        serde_json::json!({ "path": path, "resource": resource })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                println!("[routes] count={}", routes.len());
                for (path, resource) in routes {
                    println!("[route] /{} -> {}", path, resource);
                }
            }
        }
    }

    Ok(())
}

use clap::{Parser, Subcommand};
use thiserror::Error;

use routedoc::{Node, RouteTree};

#[derive(Parser)]
#[command(name = "routedoc-cli")]
#[command(about = "Inspect the route documentation of a running service", long_about = None)]
struct Cli {
    /// Base URL of the service.
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Path the documentation is served at.
    #[arg(short, long, default_value = "/_docs")]
    docs_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole tree as JSON
    Tree,
    /// List every documented endpoint
    Routes,
    /// Print the node at a path
    Show {
        /// Route pattern, e.g. /users/:id
        path: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("docs endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no route documented at {0}")]
    NotFound(String),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let tree = fetch_tree(&client, &cli.url, &cli.docs_path).await?;

    match cli.command {
        Commands::Tree => {
            println!("{}", serde_json::to_string_pretty(&tree).map_err(CliError::from)?);
        }
        Commands::Routes => {
            print!("{}", render_routes(&tree));
        }
        Commands::Show { path } => {
            let node = show(&tree, &path)?;
            println!("{}", serde_json::to_string_pretty(node).map_err(CliError::from)?);
        }
    }

    Ok(())
}

/// One `METHOD path  title` line per documented endpoint.
fn render_routes(tree: &RouteTree) -> String {
    tree.endpoints()
        .into_iter()
        .map(|endpoint| {
            let title = endpoint.doc.title.as_deref().unwrap_or("");
            let line = format!("{:<8} {:<32} {}", endpoint.method, endpoint.path, title);
            format!("{}\n", line.trim_end())
        })
        .collect()
}

/// The node documented at `path`.
fn show<'a>(tree: &'a RouteTree, path: &str) -> Result<&'a Node, CliError> {
    tree.node(path)
        .ok_or_else(|| CliError::NotFound(path.to_string()))
}

async fn fetch_tree(
    client: &reqwest::Client,
    base: &str,
    docs_path: &str,
) -> Result<RouteTree, CliError> {
    let url = format!("{}{}", base.trim_end_matches('/'), docs_path);
    let res = client.get(url).send().await?;

    let status = res.status();
    if !status.is_success() {
        return Err(CliError::Status(status));
    }

    let body = res.text().await?;
    Ok(serde_json::from_str(&body)?)
}

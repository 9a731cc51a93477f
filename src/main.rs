mod db;
mod entities;
mod error;
mod models;
mod routes;
mod state;
mod templates;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use clap::{Parser, Subcommand};
use tower_http::services::ServeDir;

use entities::chai_table::ChaiType;
use models::{Chai, NewChai};
use state::AppState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Database path
    #[arg(short, long, env = "DATABASE_PATH", default_value = "db.sqlite3")]
    db_path: String,

    /// Directory holding the HTML templates
    #[arg(long, env = "TEMPLATE_DIR", default_value = "templates")]
    template_dir: PathBuf,

    /// Directory served under /media (catalog images live in chai_images/)
    #[arg(long, env = "MEDIA_ROOT", default_value = "media")]
    media_root: PathBuf,

    /// Extra host names to accept besides localhost (comma separated,
    /// ".example.com" matches subdomains, "*" matches anything)
    #[arg(long, env = "ALLOWED_HOSTS", value_delimiter = ',')]
    allowed_hosts: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Add one chai to the catalog
    AddChai {
        #[arg(long)]
        name: String,
        /// Image path, stored under chai_images/
        #[arg(long)]
        image: String,
        /// One of: ml, gr, ki, pt, eh
        #[arg(long)]
        chai_type: ChaiType,
    },
    /// Print every chai in the catalog
    ListChai,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> error::Result<()> {
    tracing::info!("Initializing database at {}", args.db_path);
    let pool = db::init_pool(&args.db_path, 5).await?;
    let db = db::connect(pool);

    match args.command.unwrap_or(Command::Serve) {
        Command::AddChai {
            name,
            image,
            chai_type,
        } => {
            let chai = NewChai {
                name,
                image,
                chai_type,
            }
            .insert(&db)
            .await?;
            tracing::info!("Added chai {} ({})", chai.id, chai);
            println!("{}", format_chai_row(&chai));
            Ok(())
        }
        Command::ListChai => {
            for chai in routes::chai::chai_list(&db).await? {
                println!("{}", format_chai_row(&chai));
            }
            Ok(())
        }
        Command::Serve => {
            let templates = templates::load(&args.template_dir)?;
            tokio::fs::create_dir_all(args.media_root.join(entities::chai_table::UPLOAD_TO)).await?;

            let state = AppState::new(db, templates);
            let app = app(state, &args.media_root, args.allowed_hosts);

            let addr = format!("0.0.0.0:{}", args.port);

            println!();
            println!("  ╔══════════════════════════════════════════════╗");
            println!("  ║               Chai Site v0.1.0               ║");
            println!("  ╠══════════════════════════════════════════════╣");
            println!("  ║  Running on: http://localhost:{:<14}║", args.port);
            println!("  ╚══════════════════════════════════════════════╝");
            println!();

            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on {addr}");
            axum::serve(listener, app).await?;
            Ok(())
        }
    }
}

/// `id  code  label  name`, one catalog row per line.
fn format_chai_row(chai: &Chai) -> String {
    format!(
        "{:>4}  {}  {:<12} {}",
        chai.id,
        chai.chai_type.code(),
        chai.chai_type.label(),
        chai
    )
}

fn app(state: AppState, media_root: &std::path::Path, allowed_hosts: Vec<String>) -> Router {
    let allowed_hosts: Arc<[String]> = allowed_hosts
        .into_iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .filter(|h| !h.is_empty())
        .collect();

    routes::router()
        .nest_service("/media", ServeDir::new(media_root))
        .layer(middleware::from_fn(move |req, next| {
            validate_host(req, next, allowed_hosts.clone())
        }))
        .with_state(state)
}

/// Reject requests whose Host header is neither local nor allowed.
async fn validate_host(req: Request, next: Next, allowed_hosts: Arc<[String]>) -> Response {
    if let Some(host_val) = req.headers().get("host").and_then(|v| v.to_str().ok()) {
        let host = strip_port(host_val).to_ascii_lowercase();
        let is_local = host == "localhost" || host == "127.0.0.1" || host == "[::1]";
        if !is_local && !allowed_hosts.iter().any(|pattern| host_matches(&host, pattern)) {
            tracing::warn!("Rejected request for disallowed host {host_val:?}");
            return (StatusCode::BAD_REQUEST, "Bad Request (400)").into_response();
        }
    }
    next.run(req).await
}

fn strip_port(host: &str) -> &str {
    if host.starts_with('[') {
        // IPv6 literal: keep the brackets, drop anything after them
        match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        }
    } else {
        host.split(':').next().unwrap_or(host)
    }
}

fn host_matches(host: &str, pattern: &str) -> bool {
    if pattern == "*" {
        return true;
    }
    match pattern.strip_prefix('.') {
        Some(domain) => host == domain || host.ends_with(pattern),
        None => host == pattern,
    }
}

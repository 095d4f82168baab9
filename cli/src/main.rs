//! humidor binary: find cigars similar to one you like, or run the recommendation server.
//!
//! Subcommands: `serve` (HTTP server), `search` (remote by default, `--local` in-process).

mod repl;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use cli::{resolve_server_url, LocalBackend, RemoteBackend, SearchBackend, Session};

#[derive(Parser, Debug)]
#[command(name = "humidor")]
#[command(about = "humidor: US-market cigar recommendations from the command line")]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Run the HTTP server (POST /recommend, GET /health)
    Serve(ServeArgs),
    /// Ask for three cigars similar to the one given
    Search(SearchArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct ServeArgs {
    /// Listen address (default 127.0.0.1:8787)
    #[arg(long, value_name = "ADDR", env = "HUMIDOR_ADDR")]
    addr: Option<String>,
}

#[derive(clap::Args, Debug, Clone)]
struct SearchArgs {
    /// Cigar name; several words are joined with spaces
    #[arg(trailing_var_arg = true)]
    cigar: Vec<String>,

    /// Run the recommender in-process instead of calling a server
    #[arg(long)]
    local: bool,

    /// Server URL (default http://127.0.0.1:8787)
    #[arg(long, value_name = "URL", env = "HUMIDOR_URL")]
    server: Option<String>,

    /// Print the response body as JSON instead of cards
    #[arg(long)]
    json: bool,

    /// Keep reading cigar names from stdin, avoiding what was already shown
    #[arg(short, long)]
    interactive: bool,
}

fn make_backend(args: &SearchArgs) -> Arc<dyn SearchBackend> {
    if args.local {
        Arc::new(LocalBackend::from_env())
    } else {
        Arc::new(RemoteBackend::new(resolve_server_url(args.server.as_deref())))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config::load_and_apply("humidor", None) {
        eprintln!("humidor: config: {}", e);
    }
    let args = Args::parse();

    match args.cmd {
        Command::Serve(sa) => {
            config::tracing_init::init("info");
            if let Err(e) = serve::run_serve(sa.addr.as_deref()).await {
                eprintln!("serve error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Search(sa) => {
            config::tracing_init::init("warn");
            let mut session = Session::new(make_backend(&sa));
            let query = sa.cigar.join(" ");

            if sa.interactive {
                if !query.trim().is_empty() {
                    let outcome = session.search(&query).await;
                    println!("{}", outcome.render(sa.json)?);
                }
                repl::run_repl_loop(&mut session, sa.json).await?;
            } else {
                let outcome = session.search(&query).await;
                println!("{}", outcome.render(sa.json)?);
                if outcome.is_failure() {
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use vitrine::logging;
use vitrine::mockd::{MockAuthServer, UserTable, DEFAULT_PORT};

#[derive(Debug, Parser)]
#[command(name = "vitrine-mockd", version, about = "Mock authentication server")]
struct Args {
    /// Port to listen on. Falls back to the PORT environment variable,
    /// then 3000.
    #[arg(long)]
    port: Option<u16>,

    /// TOML file of [[users]] entries replacing the built-in demo users.
    #[arg(long, value_name = "PATH")]
    users: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_server_tracing();

    let port = match args.port {
        Some(port) => port,
        None => match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid PORT value '{value}'"))?,
            Err(_) => DEFAULT_PORT,
        },
    };

    let users = match &args.users {
        Some(path) => UserTable::load(path)?,
        None => UserTable::defaults(),
    };

    let mut server = MockAuthServer::new(users);
    let addr = server.try_bind(port).await?;
    tracing::info!("Mock auth server running at http://{addr}");
    for line in server.startup_lines() {
        tracing::info!("{line}");
    }

    server.run().await?;
    Ok(())
}

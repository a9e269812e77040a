use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use vitrine::api::{ApiClient, AuthStrategy, HttpCatalog};
use vitrine::catalog::CatalogController;
use vitrine::config::Config;
use vitrine::logging;
use vitrine::notify::ToastQueue;
use vitrine::session::{FileTokenStore, Session, TokenStore};
use vitrine::ui;
use vitrine::ui::app::App;
use vitrine::ui::events::{EventHandler, TICK_RATE};
use vitrine::ui::worker::spawn_worker;

#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about = "Terminal storefront client")]
struct Args {
    /// Config file to use instead of the platform default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tui_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::info!(
        catalog_url = %config.catalog.base_url,
        auth_mode = %config.auth.mode,
        "starting"
    );

    let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(FileTokenStore::default_dir()));
    let session = Session::new(AuthStrategy::from_config(&config.auth)?, Arc::clone(&store));
    session.load_persisted();

    let client = ApiClient::new(
        config.defaults.request_timeout(),
        config.defaults.connect_timeout(),
        store,
    );
    let toasts = ToastQueue::new();
    let controller = CatalogController::new(
        HttpCatalog::new(client, &config.catalog.base_url),
        toasts.clone(),
        config.defaults.page_size,
    );

    // The UI loop stays synchronous on this thread; fetches and logins run
    // on the tokio workers and report back through the event channel.
    let runtime = tokio::runtime::Runtime::new()?;
    let _enter = runtime.enter();

    let events = EventHandler::new(TICK_RATE);
    let commands = spawn_worker(controller.clone(), session.clone(), events.sender());

    let mut app = App::new(session, toasts);
    app.set_command_sender(commands);
    let provider = controller.clone();
    app.set_catalog_provider(Arc::new(move || provider.snapshot()));

    ui::runtime::run(&mut app, &events)?;
    Ok(())
}

use anyhow::Result;
use emsys::commands::App;
use emsys::libs::config::Config;
use emsys::libs::messages::macros::is_debug_mode;
use emsys::libs::prompt::DialoguerPrompter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let app = App::open(Config::read()?)?;
    app.run(&mut DialoguerPrompter::new())
}

/// Installs a subscriber only in debug mode; otherwise messages go straight
/// to the terminal.
fn init_logging() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emsys=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

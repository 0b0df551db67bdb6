use anyhow::Result;
use pacman_arcade::app::App;
use pacman_arcade::logging::setup_logging;
use tracing::info;

fn main() -> Result<()> {
    setup_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "Starting Pac-Man");

    let mut app = App::new()?;
    while app.run() {}

    info!("Goodbye");
    Ok(())
}

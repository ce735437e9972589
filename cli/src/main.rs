use log::info;
use tour_sentinel_core::App;

mod screens;
mod terminal;

use screens::Shell;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();
    info!("Starting Tour Sentinel terminal shell");

    let app = App::new();
    let mut shell = Shell::new(app);
    shell.run()?;

    info!("Session ended");
    Ok(())
}

use std::io::stdout;

use backdrop_config::Config;
use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;

mod app;
mod host;
mod logging;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load().wrap_err("failed to load configuration")?;
    logging::init(&config.log)?;
    tracing::info!("backdrop v{}", env!("CARGO_PKG_VERSION"));

    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

/// Run the app with mouse and focus reporting enabled for its lifetime.
fn run(terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;
    let size = terminal.size()?;
    let result = App::new(config, size.width, size.height).run(terminal);
    let cleanup = execute!(stdout(), DisableMouseCapture, DisableFocusChange);
    result?;
    cleanup?;
    Ok(())
}

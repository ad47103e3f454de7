//! Interactive alumni browser: search line, table, detail panel and status bar
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::dataset::LoadHandle;

/// Run the browser while `loader` delivers the dataset in the background
pub fn run_browser(loader: LoadHandle) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::loading(loader);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;

    res
}

// Entrypoint for the menu application.
// - Keeps `main` small: build the command table and a terminal console,
//   then hand both to the menu loop.
// - Bad input never reaches here; only console failures do.

use anyhow::Context;
use menu_demo::{console::Terminal, menu::CommandTable, setup_logging, ui::MenuLoop};

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    let table = CommandTable::standard();

    // Blocks until the user confirms exit.
    MenuLoop::new(&table, Terminal::new())
        .run()
        .context("menu loop stopped on a console failure")?;
    Ok(())
}

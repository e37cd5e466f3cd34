use anyhow::{Result, bail};
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::tui::{PickerApp, run_picker};

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stderr().is_terminal() {
        bail!("pick needs an interactive terminal; try 'emokbd search <QUERY>'");
    }

    let board = ctx.open_board()?;
    let key_width = ctx.environment()?.config.terminal.min_key_width;

    if let Some(text) = run_picker(PickerApp::new(board), key_width)?
        && !text.is_empty()
    {
        println!("{}", text);
    }
    Ok(())
}

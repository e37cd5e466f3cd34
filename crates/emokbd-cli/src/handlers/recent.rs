use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let recent = ctx.environment()?.open_recent();

    let result = presenters::present_recent_list(recent.items());
    ConsoleRenderer::for_format(format).render(result)
}

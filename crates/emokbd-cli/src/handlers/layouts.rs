use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let env = ctx.environment()?;
    let layouts = env.config.layouts()?;
    let active = env.active_layout(ctx.layout());

    if !layouts.iter().any(|l| l.name.eq_ignore_ascii_case(active)) {
        return Err(emokbd_engine::Error::UnknownLayout(active.to_string()).into());
    }

    let result = presenters::present_layout_list(&layouts, active);
    ConsoleRenderer::for_format(format).render(result)
}

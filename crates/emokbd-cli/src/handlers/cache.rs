use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle_rebuild(ctx: &ExecutionContext, format: OutputFormat) -> Result<()> {
    let env = ctx.environment()?;
    let corpus = env.rebuild_corpus()?;

    let result = presenters::present_cache_rebuild(&corpus, &env.dirs.cache);
    ConsoleRenderer::for_format(format).render(result)
}

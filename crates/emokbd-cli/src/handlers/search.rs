use anyhow::Result;

use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::renderers::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, query: &str, limit: usize, format: OutputFormat) -> Result<()> {
    let corpus = ctx.environment()?.load_corpus()?;
    let matches = emokbd_engine::search(&corpus.items, query);

    let result = presenters::present_search_results(query, &matches, limit);
    ConsoleRenderer::for_format(format).render(result)
}

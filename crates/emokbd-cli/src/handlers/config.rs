use anyhow::Result;

use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let env = ctx.environment()?;
    print!("{}", env.config.to_toml()?);
    Ok(())
}

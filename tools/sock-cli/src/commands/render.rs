//! Render the product page as HTML.

use std::fs;

use anyhow::{Context as _, Result};

use super::replay::replay_file;
use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront()?;

    if let Some(session) = &args.session {
        let path = ctx.resolve_path(session);
        let summary = replay_file(&mut store, &path, ctx)?;
        ctx.output.debug(&format!(
            "Replayed {} events ({} ignored)",
            summary.applied + summary.ignored,
            summary.ignored
        ));
    }

    let html = sock_pdp::render_page(&store);

    match args.output {
        Some(output) => {
            let path = ctx.resolve_path(&output);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output.success(&format!("Rendered {} ({} bytes)", path.display(), html.len()));
        }
        None => print!("{}", html),
    }

    Ok(())
}

//! `slipway modules` command

use anyhow::{Context, Result};

use slipway::resolver::resolve_modules;

use crate::cli::ModulesArgs;

pub fn execute(args: ModulesArgs) -> Result<()> {
    let resolved = resolve_modules(&args.config_root, args.include_runtime)
        .with_context(|| "failed to resolve dependency modules")?;

    for module in &resolved.modules {
        println!("{}", module);
    }

    Ok(())
}

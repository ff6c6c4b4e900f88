//! `slipway plan` command

use anyhow::{Context, Result};

use slipway::core::module::ModuleSpec;
use slipway::core::target::{LinkType, TargetDescriptor};
use slipway::resolver;

use crate::cli::PlanArgs;

pub fn execute(args: PlanArgs) -> Result<()> {
    let link_type = if args.monolithic {
        LinkType::Monolithic
    } else {
        LinkType::Modular
    };

    let target = TargetDescriptor {
        platform: args.platform,
        toolchain: args.toolchain,
        configuration: args.configuration,
        link_type,
        debug_runtime: args.debug_runtime,
    };

    let module = ModuleSpec::new(&args.module, &args.module_root);
    let config_root = args.config_root.as_deref().unwrap_or(&args.module_root);

    let plan = resolver::assemble(&target, &module, config_root)
        .with_context(|| format!("failed to resolve build plan for `{}`", args.module))?;

    println!("{}", serde_json::to_string_pretty(&plan)?);

    Ok(())
}

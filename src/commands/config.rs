//! `ontosearch config` command - print the effective search configuration

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;
use ontosearch_core::config::default_config_path;
use ontosearch_core::error::Result;

/// Execute the config command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let config = ctx.load_config()?;

    output_by_format_result!(cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        },
        human => {
            if !cli.quiet {
                let source = cli
                    .config
                    .clone()
                    .or_else(|| default_config_path().filter(|p| p.exists()))
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in defaults".to_string());
                println!("# source: {} (+ environment overrides)", source);
            }
            print!("{}", config.to_toml()?);
        },
        records => {
            let w = &config.weights;
            let p = &config.bm25;
            println!(
                "H ontosearch=1 records=1 mode=config name={} exact={} narrow={} broad={} related={} k1={} b={} delta={} default_limit={}",
                w.name, w.exact, w.narrow, w.broad, w.related, p.k1, p.b, p.delta, config.default_limit
            );
        }
    )
}

use anyhow::Result;
use eventfinder_core::config::EventfinderConfig;
use owo_colors::OwoColorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let config_path = EventfinderConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Events:   {}", ctx.source);
    println!("  Storage:  {}", ctx.store.dir().display());
    println!();
    println!("{}", "Settings".bold());
    for line in ctx.config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}

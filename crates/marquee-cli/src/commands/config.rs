use anyhow::Result;

use marquee_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    println!("# {}", AppConfig::config_path().display());
    print!("{}", config.to_toml_string()?);
    Ok(())
}

pub fn init(force: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    AppConfig::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

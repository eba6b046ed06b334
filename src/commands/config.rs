use anyhow::Result;
use eventdesk_core::config::Settings;
use owo_colors::OwoColorize;

pub fn run(settings: &Settings, init: bool) -> Result<()> {
    let config_path = Settings::config_path()?;

    if init {
        if config_path.exists() {
            anyhow::bail!("Config file already exists at {}", config_path.display());
        }
        Settings::create_default_config(&config_path)?;
        println!("Created {}", config_path.display());
        return Ok(());
    }

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!();
    println!("{}", "Settings".bold());
    println!("  API:        {}", settings.api_url);
    println!("  Events:     {}", settings.events_url().dimmed());
    println!("  Timezone:   {}", settings.timezone);

    Ok(())
}

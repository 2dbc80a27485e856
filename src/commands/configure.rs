use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::print_success;
use anyhow::Result;

pub fn handle_config_command(config: Config, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) => handle_show_command(&config),
        Some(ConfigCommands::Path) => handle_path_command(),
        Some(ConfigCommands::Reset) => handle_reset_command(),
        None => handle_config_help(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  Bedtimer Configuration");
    println!("==========================");

    println!("General:");
    println!("  Color: {}", config.general.color);
    println!("  Clock: {:?}", config.general.clock);
    println!("  Default wake: {}", config.general.default_wake);
    println!("  Default sleep: {} hours", config.general.default_sleep);
    println!("  Default coffee: {} cups", config.general.default_coffee);

    println!("Model:");
    match &config.model.path {
        Some(path) => println!("  Artifact: {}", path.display()),
        None => println!("  Artifact: bundled"),
    }

    Ok(())
}

fn handle_path_command() -> Result<()> {
    println!("{}", Config::config_file_path().display());
    Ok(())
}

fn handle_reset_command() -> Result<()> {
    let config = Config::default();
    config.save()?;
    print_success("Configuration reset to defaults!");
    Ok(())
}

fn handle_config_help() -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  bedtimer config show    - Show current configuration");
    println!("  bedtimer config path    - Print the configuration file location");
    println!("  bedtimer config reset   - Reset configuration to defaults");
    println!();
    println!(
        "Configuration file location: {}",
        Config::config_file_path().display()
    );
    Ok(())
}

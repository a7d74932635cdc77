use anyhow::Context;
use clap::{ArgAction, Parser};
use sketchboard::Config;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SKETCHBOARD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(version = VERSION, about = "Drawing state engine for canvas-style hosts")]
struct Cli {
    /// Print the effective configuration (defaults merged with the config file)
    #[arg(long, action = ArgAction::SetTrue)]
    print_config: bool,

    /// Create a default config file at ~/.config/sketchboard/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        Config::create_default_file()?;
        let config_path = Config::get_config_path()?;
        println!("Created default config at {}", config_path.display());
    } else if cli.print_config {
        let config = Config::load()?;
        let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
        print!("{rendered}");
    } else {
        // No flags: show usage
        println!("sketchboard: Drawing state engine for canvas-style hosts");
        println!();
        println!("Usage:");
        println!("  sketchboard --print-config   Print the effective configuration");
        println!("  sketchboard --init-config    Create a default config file");
        println!("  sketchboard --help           Show help");
        println!();
        println!("sketchboard is primarily a library. Hosts embed it with:");
        println!("  let config = sketchboard::Config::load()?;");
        println!("  let mut editor = sketchboard::EditorState::from_config(&config);");
        println!();
        println!("Configuration:");
        println!("  Settings are read from ~/.config/sketchboard/config.toml");
        println!("  Set RUST_LOG=debug for detailed event logging");
    }

    Ok(())
}

// theme.rs — Show or toggle the saved theme.

use clap::Subcommand;

use gt_profile::{Theme, ThemePreference};
use gt_server::AppConfig;

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme.
    Show,
    /// Flip between light and dark.
    Toggle,
}

pub fn execute(cmd: &ThemeCommands, config: &AppConfig) -> anyhow::Result<()> {
    let mut pref = ThemePreference::load_or(&config.theme_file, Theme::Light);

    match cmd {
        ThemeCommands::Show => println!("Theme: {}", pref.theme()),
        ThemeCommands::Toggle => {
            let next = pref.toggle()?;
            println!("Theme set to {}", next);
        }
    }
    Ok(())
}

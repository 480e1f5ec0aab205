//! Layout preference CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use opsconsole_core::result::AppResult;
use opsconsole_shell::{LayoutPreferences, MenuMode};

use crate::context::ConsoleContext;
use crate::output::{self, OutputFormat};

/// Arguments for layout commands
#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Layout subcommand
    #[command(subcommand)]
    pub command: LayoutCommand,
}

/// Layout subcommands
#[derive(Debug, Subcommand)]
pub enum LayoutCommand {
    /// Show the current preferences
    Show,
    /// Set the primary colour (omit to restore the default)
    Primary {
        /// Colour name
        value: Option<String>,
    },
    /// Set the surface palette (omit to restore the default)
    Surface {
        /// Palette name
        value: Option<String>,
    },
    /// Toggle dark mode
    Dark,
    /// Set the theme preset for this run
    Preset {
        /// Preset name
        value: String,
    },
    /// Set the menu mode for this run
    MenuMode {
        /// static | overlay
        mode: MenuMode,
    },
}

#[derive(Debug, Serialize)]
struct LayoutView<'a> {
    #[serde(flatten)]
    preferences: &'a LayoutPreferences,
    css_variables: Vec<(&'static str, &'a str)>,
    theme_class: Option<&'static str>,
}

/// Execute layout commands
pub fn execute(args: &LayoutArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    let mut layout = ctx.layout()?;

    match &args.command {
        LayoutCommand::Show => {}
        LayoutCommand::Primary { value } => {
            layout.set_primary(value.as_deref())?;
            output::print_success(&format!("Primary colour set to '{}'", layout.primary()));
        }
        LayoutCommand::Surface { value } => {
            layout.set_surface(value.as_deref())?;
            output::print_success(&format!("Surface set to '{}'", layout.surface()));
        }
        LayoutCommand::Dark => {
            let dark = layout.toggle_dark_mode()?;
            output::print_success(if dark { "Dark mode on" } else { "Dark mode off" });
        }
        LayoutCommand::Preset { value } => layout.set_preset(value.clone()),
        LayoutCommand::MenuMode { mode } => layout.set_menu_mode(*mode),
    }

    let view = LayoutView {
        preferences: layout.config(),
        css_variables: layout.css_variables().to_vec(),
        theme_class: layout.theme_class(),
    };
    match format {
        OutputFormat::Json => output::print_item(&view, format),
        OutputFormat::Table => {
            let prefs = view.preferences;
            output::print_kv("Preset", &prefs.preset);
            output::print_kv("Primary", &prefs.primary);
            output::print_kv("Surface", &prefs.surface);
            output::print_kv("Dark theme", &prefs.dark_theme.to_string());
            output::print_kv("Menu mode", &prefs.menu_mode.to_string());
            for (name, value) in &view.css_variables {
                output::print_kv(name, value);
            }
        }
    }

    Ok(())
}

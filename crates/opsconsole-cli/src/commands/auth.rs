//! Session CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::session::AuthenticationState;

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in with email and password
    Login {
        /// Email (will prompt if not provided)
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign in with a Google identity token
    Google {
        /// Token issued by Google sign-in
        token: String,
    },
    /// Sign out and clear the stored token
    Logout,
    /// Show whether a session is stored
    Status,
    /// Register a new user account
    Register {
        /// User attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
}

#[derive(Debug, Serialize)]
struct SessionStatus {
    authenticated: bool,
    location: String,
    idle_timeout_minutes: u64,
}

/// Execute auth commands
pub async fn execute(args: &AuthArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        AuthCommand::Login { email, password } => {
            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .map_err(|e| AppError::validation(format!("Input error: {e}")))?,
            };
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .interact()
                    .map_err(|e| AppError::validation(format!("Input error: {e}")))?,
            };

            ctx.session.login(&email, &password).await?;
            let landing = ctx.router.navigate(&ctx.config.session.entry_point)?;
            output::print_success(&format!("Signed in as '{email}'"));
            output::print_kv("Location", landing.location());
        }
        AuthCommand::Google { token } => {
            ctx.session.login_with_external_provider(token).await?;
            let landing = ctx.router.navigate(&ctx.config.session.entry_point)?;
            output::print_success("Signed in with Google");
            output::print_kv("Location", landing.location());
        }
        AuthCommand::Logout => {
            if !ctx.session.is_authenticated() {
                output::print_warning("No active session");
            }
            ctx.session.logout()?;
            ctx.router.navigate(&ctx.config.session.entry_point)?;
            output::print_success("Signed out");
        }
        AuthCommand::Status => {
            let status = SessionStatus {
                authenticated: ctx.session.is_authenticated(),
                location: ctx.router.location(),
                idle_timeout_minutes: ctx.config.session.idle_timeout_minutes,
            };
            match format {
                OutputFormat::Json => output::print_item(&status, format),
                OutputFormat::Table => {
                    output::print_kv("Authenticated", &status.authenticated.to_string());
                    output::print_kv("Idle timeout", &format!("{} min", status.idle_timeout_minutes));
                }
            }
        }
        AuthCommand::Register { data } => {
            ctx.open_view(views::USERS)?;
            let created = ctx.session.register_user(super::parse_payload(data)?).await?;
            output::print_success("User registered");
            output::print_value(&created, format);
        }
    }

    Ok(())
}

//! CLI entry and dispatch.

use anyhow::{Context, Result, bail};
use clap::Parser;
use gate_core::config::{Config, paths};
use gate_core::form::{FieldRule, form_validity};
use gate_core::session::SessionStore;
use gate_core::store::KvStore;

#[derive(Parser)]
#[command(name = "gate")]
#[command(version)]
#[command(about = "Login form demo: debounced validation in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in without the TUI, validating the credentials the same way
    Login {
        /// Email address (must contain '@')
        #[arg(long)]
        email: String,

        /// Password (more than 6 characters after trimming)
        #[arg(long)]
        password: String,
    },

    /// Clear the persisted session
    Logout,

    /// Show whether a session is persisted
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // TUI runs log to a file since the terminal is taken over; everything
    // else logs to stderr. The guard must outlive the app.
    let _guard = match cli.command {
        None => Some(logging_to_file()?),
        Some(_) => {
            crate::logging::init_stderr();
            None
        }
    };

    let config = Config::load()?;
    let mut session = SessionStore::restore(KvStore::open_default());

    match cli.command {
        None => run_tui(config, session),
        Some(Commands::Login { email, password }) => login(&mut session, &email, &password),
        Some(Commands::Logout) => logout(&mut session),
        Some(Commands::Status) => {
            if session.is_logged_in() {
                println!("Logged in");
            } else {
                println!("Logged out");
            }
            Ok(())
        }
    }
}

fn logging_to_file() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    crate::logging::init_file(paths::logs_dir())
}

fn run_tui(config: Config, session: SessionStore) -> Result<()> {
    tracing::info!(home = %paths::gate_home().display(), "starting tui");
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(gate_tui::run_app(config, session))
}

/// Non-interactive login. The credentials go through the same field rules
/// as the form; nothing beyond that is checked.
fn login(session: &mut SessionStore, email: &str, password: &str) -> Result<()> {
    let email_validity = FieldRule::Email.check(email);
    let password_validity = FieldRule::Password.check(password);

    if !form_validity(email_validity, password_validity) {
        if !email_validity.is_valid() {
            bail!("Invalid email address (must contain '@')");
        }
        bail!("Invalid password (must be longer than 6 characters)");
    }

    session.login(email, password);
    session.persist().context("Failed to persist session")?;
    println!("Logged in as {email}");
    Ok(())
}

fn logout(session: &mut SessionStore) -> Result<()> {
    if !session.is_logged_in() {
        println!("Not logged in");
        return Ok(());
    }

    session.logout();
    session.persist().context("Failed to persist session")?;
    println!("Logged out");
    Ok(())
}

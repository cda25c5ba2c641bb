//! CLI entry point for Lucid.

pub mod auth;
pub mod scorecard;
pub mod users;

use clap::{Parser, Subcommand};

/// Lucid scorecard CLI
#[derive(Parser, Debug)]
#[command(name = "lucid", version, about = "Delirium scorecard dashboard client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Session management
    Auth(AuthArgs),
    /// Delirium rates by ward and quarter
    Rates,
    /// Quarterly trend, GIM versus other wards
    Trends,
    /// Patient demographics for the recent quarter
    Demographics,
    /// User administration (admin role required)
    Users(UsersArgs),
}

/// Arguments for the `auth` subcommand group.
#[derive(Parser, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

/// Auth subcommands for the session lifecycle.
#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Sign in to the backend
    Login(LoginArgs),
    /// Show session status
    Status,
    /// Sign out and clear the stored token
    Logout,
    /// Change the signed-in user's password
    ChangePassword,
}

/// Arguments for `lucid auth login`.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Username (prompted when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password (prompted when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Arguments for the `users` subcommand group.
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommands,
}

/// User administration subcommands.
#[derive(Subcommand, Debug)]
pub enum UsersCommands {
    /// List all user accounts
    List,
    /// Create a user account
    Create(CreateUserArgs),
    /// Delete a user account
    Delete(DeleteUserArgs),
}

/// Arguments for `lucid users create`.
#[derive(Parser, Debug)]
pub struct CreateUserArgs {
    /// Username for the new account
    #[arg(long)]
    pub username: String,

    /// Email for the new account
    #[arg(long)]
    pub email: String,

    /// Role for the new account (admin, viewer)
    #[arg(long, default_value = "viewer")]
    pub role: String,

    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for `lucid users delete`.
#[derive(Parser, Debug)]
pub struct DeleteUserArgs {
    /// ID of the account to delete
    pub id: i64,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

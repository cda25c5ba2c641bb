//! Lucid CLI binary entry point.

use clap::Parser;
use lucid::cli::{AuthCommands, Cli, Commands, UsersCommands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Auth(auth_args) => match auth_args.command {
            AuthCommands::Login(args) => lucid::cli::auth::handle_login(&args).await,
            AuthCommands::Status => lucid::cli::auth::handle_status().await,
            AuthCommands::Logout => lucid::cli::auth::handle_logout().await,
            AuthCommands::ChangePassword => lucid::cli::auth::handle_change_password().await,
        },
        Commands::Rates => lucid::cli::scorecard::handle_rates().await,
        Commands::Trends => lucid::cli::scorecard::handle_trends().await,
        Commands::Demographics => lucid::cli::scorecard::handle_demographics().await,
        Commands::Users(users_args) => match users_args.command {
            UsersCommands::List => lucid::cli::users::handle_list().await,
            UsersCommands::Create(args) => lucid::cli::users::handle_create(&args).await,
            UsersCommands::Delete(args) => lucid::cli::users::handle_delete(&args).await,
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! CLI handlers for admin user management.

use crate::auth::{AuthError, Role};
use crate::cli::auth::prompt;
use crate::cli::{CreateUserArgs, DeleteUserArgs};
use crate::config::LucidConfig;
use crate::users::NewUser;

/// Handle `lucid users list`.
pub async fn handle_list() -> Result<(), Box<dyn std::error::Error>> {
    let config = LucidConfig::from_env();
    let token = config
        .token_store()
        .load()?
        .ok_or(AuthError::NotAuthenticated)?;

    let users = config.users_client().list_users(&token).await?;
    println!("👥 Users\n");
    for user in users {
        let state = if user.is_active { "active" } else { "inactive" };
        println!(
            "  #{} {} <{}> {} ({state})",
            user.id, user.username, user.email, user.role
        );
    }
    Ok(())
}

/// Handle `lucid users create`.
pub async fn handle_create(args: &CreateUserArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = LucidConfig::from_env();
    let token = config
        .token_store()
        .load()?
        .ok_or(AuthError::NotAuthenticated)?;

    let role: Role = args.role.parse().map_err(|_| {
        format!("Unknown role: '{}'. Supported: admin, viewer", args.role)
    })?;
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt("Password for new account: ")?,
    };
    if password.is_empty() {
        eprintln!("❌ A password is required");
        std::process::exit(1);
    }

    let user = config
        .users_client()
        .create_user(
            &token,
            &NewUser {
                username: args.username.clone(),
                email: args.email.clone(),
                role,
                password,
            },
        )
        .await?;
    println!("✅ Created #{} {} ({})", user.id, user.username, user.role);
    Ok(())
}

/// Handle `lucid users delete`.
pub async fn handle_delete(args: &DeleteUserArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = LucidConfig::from_env();
    let token = config
        .token_store()
        .load()?
        .ok_or(AuthError::NotAuthenticated)?;

    config.users_client().delete_user(&token, args.id).await?;
    println!("✅ Deleted user #{}", args.id);
    Ok(())
}

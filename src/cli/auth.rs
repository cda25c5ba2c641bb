//! CLI session command handlers.

use crate::cli::LoginArgs;
use crate::config::LucidConfig;

/// Handle `lucid auth login`.
pub async fn handle_login(args: &LoginArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = LucidConfig::from_env();
    let auth = config.auth_state();

    let username = match &args.username {
        Some(username) => username.clone(),
        None => prompt("Username: ")?,
    };
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt("Password: ")?,
    };

    if username.is_empty() || password.is_empty() {
        eprintln!("❌ Username and password are required");
        std::process::exit(1);
    }

    let session = auth.login(&username, &password).await?;
    println!("✅ Signed in as {} ({})", session.username, session.role);
    Ok(())
}

/// Handle `lucid auth status`.
pub async fn handle_status() -> Result<(), Box<dyn std::error::Error>> {
    let config = LucidConfig::from_env();
    let auth = config.auth_state();
    auth.validate_session().await;

    match auth.session() {
        Some(session) => {
            println!("🔐 Session Status\n");
            println!("  User: {} (#{})", session.username, session.id);
            println!("  Role: {}", session.role);
            if let Some(avatar) = &session.avatar_url {
                println!("  Avatar: {avatar}");
            }
        }
        None => println!("❌ Not signed in"),
    }
    Ok(())
}

/// Handle `lucid auth logout`.
pub async fn handle_logout() -> Result<(), Box<dyn std::error::Error>> {
    let config = LucidConfig::from_env();
    let auth = config.auth_state();
    auth.logout().await;
    println!("✅ Signed out");
    Ok(())
}

/// Handle `lucid auth change-password`.
pub async fn handle_change_password() -> Result<(), Box<dyn std::error::Error>> {
    let config = LucidConfig::from_env();
    let auth = config.auth_state();

    let current = prompt("Current password: ")?;
    let new = prompt("New password: ")?;
    if current.is_empty() || new.is_empty() {
        eprintln!("❌ Both passwords are required");
        std::process::exit(1);
    }

    auth.update_password(&current, &new).await?;
    println!("✅ Password updated");
    Ok(())
}

/// Read one trimmed line from stdin after printing a label.
pub(crate) fn prompt(label: &str) -> std::io::Result<String> {
    use std::io::Write;
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

use anyhow::Result;
use owo_colors::OwoColorize;
use planitout_core::session::SessionStore;
use planitout_core::storage::KeyValueStore;

/// Start a session for `email`.
///
/// Any non-empty email/password pair is accepted; there is no account
/// backend to check against.
pub fn login<S: KeyValueStore>(session: &mut SessionStore<S>, email: &str) -> Result<()> {
    if session.is_logged_in() {
        let current = session.user_email().unwrap_or_default();
        println!("Already logged in as {current}. Run `planitout logout` first to switch accounts.");
        return Ok(());
    }

    if email.is_empty() {
        anyhow::bail!("Please fill in all fields");
    }

    let password = rpassword::prompt_password("Password: ")?;
    if password.is_empty() {
        anyhow::bail!("Please fill in all fields");
    }

    session.login(email);

    println!("{}", format!("Welcome back, {email}!").green());
    println!("Run `planitout explore` to find your next event.");

    Ok(())
}

/// End the session, wiping the attendance list along with it.
pub fn logout<S: KeyValueStore>(session: &mut SessionStore<S>) -> Result<()> {
    if !session.is_logged_in() {
        println!("Not logged in.");
        return Ok(());
    }

    session.logout();
    println!("Logged out. Your attendance list has been cleared.");

    Ok(())
}

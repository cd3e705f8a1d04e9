//! Account sign-in and sign-up

use earthlink_client::HttpRemote;
use earthlink_common::AppResult;
use earthlink_core::{Credentials, RemoteApi, UserId};
use validator::Validate;

/// Log in and attach the session token to `remote`
///
/// Returns the user id the server associates with the new token.
pub async fn sign_in(remote: &HttpRemote, credentials: &Credentials) -> AppResult<UserId> {
    credentials.validate()?;

    let token = remote.login(credentials).await?;
    let user_id = remote.validate_token(&token).await?;
    remote.set_token(token);

    tracing::info!(user_id = %user_id, "Signed in");
    Ok(user_id)
}

/// Create an account; the caller signs in afterwards
pub async fn sign_up(remote: &dyn RemoteApi, credentials: &Credentials) -> AppResult<UserId> {
    credentials.validate()?;

    let user_id = remote.signup(credentials).await?;
    tracing::info!(user_id = %user_id, "Account created");
    Ok(user_id)
}

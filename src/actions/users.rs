//! User and Login Actions

use chrono::{DateTime, Utc};

use crate::api::UserApi;
use crate::board::{self, Roster};
use crate::error::ApiResult;
use crate::models::{Credentials, Session, User};
use crate::session::SessionStore;

pub async fn load<A, R>(api: &A, roster: &R) -> ApiResult<usize>
where
    A: UserApi + ?Sized,
    R: Roster<User>,
{
    let users = api.list_users().await?;
    let count = users.len();
    roster.patch(|list| *list = users);
    tracing::info!(count, "users loaded");
    Ok(count)
}

/// Create `user` and append it with the id the service returns.
pub async fn add<A, R>(api: &A, roster: &R, mut user: User) -> ApiResult<User>
where
    A: UserApi + ?Sized,
    R: Roster<User>,
{
    let id = api.create_user(&user).await?;
    user.id = Some(id);
    roster.patch(|list| list.push(user.clone()));
    tracing::info!(id = ?user.id, "user created");
    Ok(user)
}

/// Patch the roster, then send the edited user as the caller left it.
pub async fn update<A, R>(api: &A, roster: &R, edited: User, now: DateTime<Utc>) -> ApiResult<()>
where
    A: UserApi + ?Sized,
    R: Roster<User>,
{
    roster.patch(|list| board::replace_user(list, edited.clone(), now));
    api.update_user(&edited).await
}

pub async fn delete<A, R>(api: &A, roster: &R, id: &str) -> ApiResult<()>
where
    A: UserApi + ?Sized,
    R: Roster<User>,
{
    roster.patch(|list| board::remove_user(list, id));
    api.delete_user(id).await
}

/// Check credentials with the service and, on success, store the session flag.
/// A storage failure is logged; the login itself still counts.
pub async fn login<A, S>(api: &A, store: &S, credentials: Credentials) -> ApiResult<Session>
where
    A: UserApi + ?Sized,
    S: SessionStore,
{
    api.login(&credentials).await?;
    let session = Session { email: credentials.email };
    if let Err(e) = store.write(&session) {
        tracing::error!(error = %e, "failed to persist session flag");
    }
    tracing::info!(email = %session.email, "logged in");
    Ok(session)
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user account as returned by the API.
///
/// The password digest deliberately has no field here: responses built from
/// this type cannot leak it.
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Free-text role tag (e.g. "admin", "member"); the API attaches no
    /// meaning to particular values.
    pub role: String,
}

/// The credential row fetched during login. Never serialized.
#[derive(Debug, FromRow)]
pub struct Credentials {
    pub id: i64,
    pub password_hash: String,
}

/// Input for registration and admin user creation. The plaintext password is
/// digested and dropped before anything is persisted.
#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Input for the user update operation. Exactly these three fields are
/// replaced; the password cannot be changed through it.
#[derive(Debug, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// One row of the grouped role count.
#[derive(Debug, Serialize, FromRow)]
pub struct RoleCount {
    pub role: String,
    pub count: i64,
}

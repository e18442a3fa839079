use std::fmt;

use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::constants::Route;

/// An account row. `is_parent` and `is_guest` are independent flags; an
/// account may carry both or neither.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub hash_password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_parent: bool,
    pub is_guest: bool,
    pub is_active: bool,
    pub date_joined: chrono::DateTime<chrono::Utc>,
}

impl UserEntity {
    pub fn route(&self) -> Route {
        if self.is_parent { Route::Parent } else { Route::Guest }
    }

    pub fn absolute_url(&self) -> &'static str {
        self.route().path()
    }
}

impl fmt::Display for UserEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

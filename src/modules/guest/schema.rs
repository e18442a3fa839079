use std::fmt;

use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::constants::Route;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GuestProfileEntity {
    pub id: Uuid,
    pub guest_name: String,
    pub user_id: Uuid,
    pub profile_image: String,
}

impl GuestProfileEntity {
    pub fn absolute_url(&self) -> &'static str {
        Route::Profile.path()
    }
}

impl fmt::Display for GuestProfileEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.guest_name)
    }
}

use std::fmt;

use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::constants::Route;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ChildProfileEntity {
    pub id: Uuid,
    pub child_name: String,
    /// External numeric identifier, not the primary key.
    pub id_child: i32,
    pub parent_id: Uuid,
    pub profile_image: String,
    pub birthdate: chrono::NaiveDate,
}

impl ChildProfileEntity {
    pub fn absolute_url(&self) -> &'static str {
        Route::Profile.path()
    }
}

impl fmt::Display for ChildProfileEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.child_name)
    }
}

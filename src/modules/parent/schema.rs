use std::fmt;

use serde::Serialize;
use sqlx::prelude::FromRow;
use uuid::Uuid;

use crate::constants::Route;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ParentProfileEntity {
    pub id: Uuid,
    pub parent_name: String,
    pub user_id: Uuid,
    pub profile_image: String,
}

impl ParentProfileEntity {
    /// A parent's page is where children get added.
    pub fn absolute_url(&self) -> &'static str {
        Route::AddChild.path()
    }
}

impl fmt::Display for ParentProfileEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parent_name)
    }
}

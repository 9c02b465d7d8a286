// SPDX-License-Identifier: MIT

//! Team model for storage and API.

use serde::{Deserialize, Serialize};

/// Team document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Document ID (UUID v4)
    pub id: String,
    /// Team name (unique)
    pub name: String,
    /// Description
    pub description: String,
    /// Member count, maintained by hand rather than derived from users
    pub members_count: u32,
    /// When the team was created (RFC3339)
    pub created_at: String,
}

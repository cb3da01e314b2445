use hd_core::User;

use serde::Serialize;

/// User DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub identifier: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            identifier: u.identifier,
            kind: u.kind.as_str().to_string(),
            created_at: u.created_at.timestamp(),
        }
    }
}

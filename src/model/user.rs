use serde::{Deserialize, Serialize};

/// Public account details for a user.
///
/// The password column is deliberately absent; it never leaves the data layer.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    /// Surrogate ID of the user.
    pub id: i32,
    /// Unique email address.
    pub email: String,
    /// Whether the account is active.
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::error::AppError;

pub const USERS_COLLECTION: &str = "users";

/// Document in the "users" collection.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String, // bcrypt hash, never plaintext
    pub role: String,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<BsonDateTime>,
}

/// Body of POST /api/add-user. Fields stay optional here so that a missing field is
/// reported by `validate` instead of as a JSON error.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub employee_id: Option<String>,
}

/// A validated add-user request. The password is still plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
    pub employee_id: String,
}

impl AddUserRequest {
    pub fn validate(self) -> Result<NewUser, AppError> {
        let mut missing = Vec::new();
        let mut take = |field: &'static str, value: Option<String>| -> String {
            match value {
                Some(v) if !v.trim().is_empty() => v,
                _ => {
                    missing.push(field);
                    String::new()
                }
            }
        };

        let user = NewUser {
            name: take("name", self.name),
            email: take("email", self.email),
            phone: take("phone", self.phone),
            password: take("password", self.password),
            role: take("role", self.role),
            employee_id: take("employeeId", self.employee_id),
        };

        if !missing.is_empty() {
            log::warn!("⚠️  Missing fields: {}", missing.join(", "));
            return Err(AppError::Validation("All fields are required.".to_string()));
        }

        Ok(user)
    }
}

impl NewUser {
    /// Builds the document to persist, swapping in the password hash.
    pub fn into_document(self, password_hash: String) -> User {
        User {
            id: None,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: password_hash,
            role: self.role,
            employee_id: self.employee_id,
            created_at: Some(BsonDateTime::now()),
        }
    }
}

/// JSON view of a stored user.
#[derive(Debug, Serialize, Deserialize, Clone, utoipa::ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub role: String,
    #[serde(rename = "employeeId")]
    pub employee_id: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()),
            name: user.name,
            email: user.email,
            phone: user.phone,
            password: user.password,
            role: user.role,
            employee_id: user.employee_id,
            created_at: user.created_at.and_then(|d| d.try_to_rfc3339_string().ok()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<UserResponse>,
}

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response of POST /api/auth/login. Everything beyond the token is
/// optional; the client fills the gaps from the token payload.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "displayName")]
    pub display_name: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<serde_json::Value>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, rename = "sessionId")]
    pub session_id: Option<String>,
    #[serde(default, rename = "sessionManaged")]
    pub session_managed: Option<bool>,
}

impl LoginResponse {
    /// userId first, legacy `id` second; numbers are stringified since the
    /// backend has sent both forms.
    pub fn user_id_string(&self) -> Option<String> {
        let value = self.user_id.as_ref().or(self.id.as_ref())?;
        match value {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// Profile as returned by GET /api/auth/profile. Best-effort source for
/// booking-form pre-fill.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProfileResponse {
    #[serde(default, rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

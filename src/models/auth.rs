use serde::{Deserialize, Serialize};

use super::clinic::{Employee, Patient};

/// Account role as reported by the backend. Anything the server sends
/// that we do not recognize decodes to `Unknown` and is treated as
/// unauthenticated by the router.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Receptionist,
    Admin,
    #[serde(other)]
    Unknown,
}

impl Default for Role {
    fn default() -> Self {
        Role::Unknown
    }
}

/// Safe user record (`sys_user` without credentials).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub emp_id: Option<String>,
    #[serde(default)]
    pub employee: Option<Employee>,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub patient: Option<Patient>,
}

/// Payload returned by login / register.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthData {
    pub access_token: String,
    pub user: User,
}

/// Payload returned by the profile endpoint.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ProfileData {
    pub user: User,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct RegisterPayload {
    pub username: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_card: Option<String>,
}

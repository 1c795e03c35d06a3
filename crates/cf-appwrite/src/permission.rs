//! Appwrite permission strings, e.g. `read("users")` or `update("user:abc")`.

pub mod role {
    /// Every authenticated user
    pub fn users() -> String {
        "users".to_string()
    }

    pub fn user(user_id: &str) -> String {
        format!("user:{user_id}")
    }
}

pub fn read(role: &str) -> String {
    format!("read(\"{role}\")")
}

pub fn create(role: &str) -> String {
    format!("create(\"{role}\")")
}

pub fn update(role: &str) -> String {
    format!("update(\"{role}\")")
}

pub fn delete(role: &str) -> String {
    format!("delete(\"{role}\")")
}

/// Full access for the owning user only; attached to documents created on
/// their behalf in collections with document security.
pub fn owner(user_id: &str) -> Vec<String> {
    let role = role::user(user_id);
    vec![read(&role), update(&role), delete(&role)]
}

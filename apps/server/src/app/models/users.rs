use bigapp::kernel::models::Model;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub salt: String,
}

impl Model for User {
    const TABLE_NAME: &'static str = "users";
}

/// Kept in the `audit` database binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub user_id: i64,
    pub succeeded: bool,
}

impl Model for LoginAttempt {
    const TABLE_NAME: &'static str = "login_attempts";
    const BIND_KEY: Option<&'static str> = Some("audit");
}

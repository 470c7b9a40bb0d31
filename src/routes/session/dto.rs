use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct CreatingSession<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize, Deserialize)]
pub struct Session {
    pub token: String,
}

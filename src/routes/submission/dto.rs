use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct CreatingSubmission<'a> {
    pub title: &'a str,
    pub url: &'a str,
    pub description: &'a str,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteToggled {
    pub favorited: bool,
}

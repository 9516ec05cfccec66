use serde::{Deserialize, Serialize};

/// A user record as served by `GET /users`.
///
/// The wire shape carries more fields (address, geo coordinates, company
/// catchphrase); only what the application displays is modeled here, and
/// unknown fields are ignored on decode.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Company {
    pub name: String,
}

impl User {
    /// The website field arrives bare ("hildegard.org"); prefix a scheme
    /// unless one is already present.
    pub fn website_url(&self) -> String {
        if self.website.starts_with("http://") || self.website.starts_with("https://") {
            self.website.clone()
        } else {
            format!("https://{}", self.website)
        }
    }
}

/// A post record (`GET /posts`, `POST /posts` echo).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment record (`GET /posts/{id}/comments`, `POST /comments` echo).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: u64,
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Request body for `POST /users`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Request body for `POST /posts`. The contact page submits one of these
/// with the subject as title and the assembled message as body.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// Request body for `POST /comments`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewComment {
    #[serde(rename = "postId")]
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

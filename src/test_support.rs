//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{
    ApiGateway, Comment, Company, FetchError, LoadingGate, NewComment, NewPost, NewUser, Post,
    User,
};
use crate::core::state::App;

/// A no-op gateway for tests that don't need real API calls.
///
/// Reducer tests never await effects, so these canned bodies are only
/// exercised by tests that drive the effect executor directly.
pub struct NoopGateway;

#[async_trait]
impl ApiGateway for NoopGateway {
    async fn users(&self) -> Result<Vec<User>, FetchError> {
        Ok(Vec::new())
    }

    async fn user(&self, id: u64) -> Result<User, FetchError> {
        Ok(User {
            id,
            name: "Test User".to_string(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            phone: "555-0100".to_string(),
            website: "example.com".to_string(),
            company: Company {
                name: "Test Co".to_string(),
            },
        })
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, FetchError> {
        Ok(User {
            id: 11,
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: String::new(),
            website: String::new(),
            company: Company::default(),
        })
    }

    async fn posts(&self) -> Result<Vec<Post>, FetchError> {
        Ok(Vec::new())
    }

    async fn post_by_id(&self, id: u64) -> Result<Post, FetchError> {
        Ok(Post {
            id,
            user_id: 1,
            title: "Test Post".to_string(),
            body: "body".to_string(),
        })
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, FetchError> {
        Ok(Post {
            id: 101,
            user_id: post.user_id,
            title: post.title.clone(),
            body: post.body.clone(),
        })
    }

    async fn comments(&self, _post_id: u64) -> Result<Vec<Comment>, FetchError> {
        Ok(Vec::new())
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, FetchError> {
        Ok(Comment {
            id: 501,
            post_id: comment.post_id,
            name: comment.name.clone(),
            email: comment.email.clone(),
            body: comment.body.clone(),
        })
    }
}

/// Creates a test App with a NoopGateway, positioned at the empty fragment.
pub fn test_app() -> App {
    test_app_at("")
}

/// Creates a test App positioned at the given fragment. No dispatch has
/// run yet — send `Action::Dispatch` first when a test needs page content.
pub fn test_app_at(fragment: &str) -> App {
    App::new(Arc::new(NoopGateway), LoadingGate::new(), fragment)
}

use async_trait::async_trait;

use super::client::{ApiClient, FetchError};
use super::types::{Comment, NewComment, NewPost, NewUser, Post, User};

/// The transport seam between pages and the network.
///
/// Pages and the effect executor only ever see this trait behind an `Arc`,
/// so tests can substitute a canned implementation and never open a socket.
#[async_trait]
pub trait ApiGateway: Send + Sync {
    async fn users(&self) -> Result<Vec<User>, FetchError>;
    async fn user(&self, id: u64) -> Result<User, FetchError>;
    async fn create_user(&self, user: &NewUser) -> Result<User, FetchError>;
    async fn posts(&self) -> Result<Vec<Post>, FetchError>;
    async fn post_by_id(&self, id: u64) -> Result<Post, FetchError>;
    async fn create_post(&self, post: &NewPost) -> Result<Post, FetchError>;
    async fn comments(&self, post_id: u64) -> Result<Vec<Comment>, FetchError>;
    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, FetchError>;
}

#[async_trait]
impl ApiGateway for ApiClient {
    async fn users(&self) -> Result<Vec<User>, FetchError> {
        ApiClient::users(self).await
    }

    async fn user(&self, id: u64) -> Result<User, FetchError> {
        ApiClient::user(self, id).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, FetchError> {
        ApiClient::create_user(self, user).await
    }

    async fn posts(&self) -> Result<Vec<Post>, FetchError> {
        ApiClient::posts(self).await
    }

    async fn post_by_id(&self, id: u64) -> Result<Post, FetchError> {
        ApiClient::post_by_id(self, id).await
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post, FetchError> {
        ApiClient::create_post(self, post).await
    }

    async fn comments(&self, post_id: u64) -> Result<Vec<Comment>, FetchError> {
        ApiClient::comments(self, post_id).await
    }

    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, FetchError> {
        ApiClient::create_comment(self, comment).await
    }
}

pub mod client;
pub mod gateway;
pub mod types;

pub use client::{ApiClient, DEFAULT_BASE_URL, FetchError, LoadingGate};
pub use gateway::ApiGateway;
pub use types::{Comment, Company, NewComment, NewPost, NewUser, Post, User};

//! Outbound ポート

pub mod career_advisor;
pub mod chat_view;
pub mod credential_source;

pub use career_advisor::{AdvisorFactory, CareerAdvisor};
pub use chat_view::ChatView;
pub use credential_source::CredentialSource;

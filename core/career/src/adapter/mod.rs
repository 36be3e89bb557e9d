//! career 用アダプター（ポートの標準実装）

pub mod credential_sources;
pub mod dotenv;
pub mod gemini_advisor;
pub mod terminal_view;

pub use credential_sources::{DotenvCredential, EnvCredential, SecretsFileCredential};
pub use gemini_advisor::GeminiAdvisorFactory;
pub use terminal_view::TerminalView;

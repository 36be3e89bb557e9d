//! career 固有のドメイン型（型と不変条件）

pub mod command;
pub mod prompt;
pub mod reply;
pub mod session;
pub mod transcript;
pub mod turn;

pub use command::CareerCommand;
pub use prompt::build_request;
pub use reply::{render_reply, PARSE_FALLBACK};
pub use session::{ChatSession, SessionState};
pub use transcript::Transcript;
pub use turn::{Role, Turn};

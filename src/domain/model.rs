use crate::domain::messages;
use crate::utils::error::RosterError;

/// 單一使用者動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Search,
}

/// 一次動作的結果，由呼叫端轉換成通知訊息
#[derive(Debug)]
pub enum Outcome {
    Added(String),
    Removed(String),
    Found(String),
    Rejected(RosterError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Rejected(_))
    }

    /// Whether the registry changed and the list needs re-rendering.
    pub fn mutated(&self) -> bool {
        matches!(self, Outcome::Added(_) | Outcome::Removed(_))
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Added(name) => messages::user_added(name),
            Outcome::Removed(name) => messages::user_removed(name),
            Outcome::Found(name) => messages::user_found(name),
            Outcome::Rejected(e) => e.user_friendly_message(),
        }
    }
}

pub mod registry;
pub mod session;

pub use crate::domain::model::{Action, Outcome};
pub use crate::domain::ports::{ConfigProvider, DisplayPort};
pub use crate::utils::error::Result;
pub use registry::NameRegistry;
pub use session::RosterSession;

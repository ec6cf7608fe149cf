//! 使用者訊息目錄：每個操作結果對應一則訊息

pub const EMPTY_NAME: &str = "❗ Name cannot be empty.";
pub const DUPLICATE_USER: &str = "⚠️ This user already exists.";
pub const USER_NOT_FOUND: &str = "🔍 User not found.";

pub fn user_added(name: &str) -> String {
    format!("✅ User \"{}\" added.", name)
}

pub fn user_removed(name: &str) -> String {
    format!("🗑️ User \"{}\" removed.", name)
}

pub fn user_found(name: &str) -> String {
    format!("🔎 User found: \"{}\"", name)
}

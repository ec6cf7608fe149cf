use crate::utils::error::Result;

/// 呈現層：顯示名單、通知訊息、單一輸入欄位
pub trait DisplayPort {
    /// Replace the shown list, one line per entry with a 1-based position.
    fn render(&mut self, entries: &[String]) -> Result<()>;
    fn notify(&mut self, message: &str) -> Result<()>;
    /// Raw, untrimmed content of the input field.
    fn read_input(&self) -> String;
    fn clear_input(&mut self);
}

pub trait ConfigProvider {
    fn seed_names(&self) -> &[String];
    fn prompt(&self) -> &str;
    fn show_list_on_start(&self) -> bool;
}

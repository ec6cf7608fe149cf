use crate::core::DisplayPort;
use crate::utils::error::Result;
use std::io::Write;

/// 以文字終端機實作的顯示埠
///
/// The "input field" is a plain buffer filled by the REPL before each action.
#[derive(Debug)]
pub struct TerminalDisplay<W: Write> {
    out: W,
    input: String,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
        }
    }

    pub fn set_input(&mut self, text: &str) {
        self.input.clear();
        self.input.push_str(text);
    }

    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }

    pub fn write_prompt(&mut self, prompt: &str) -> Result<()> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// 每筆一行，編號從 1 開始
pub fn format_entries(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .enumerate()
        .map(|(index, name)| format!("{}. {}", index + 1, name))
        .collect()
}

impl<W: Write> DisplayPort for TerminalDisplay<W> {
    fn render(&mut self, entries: &[String]) -> Result<()> {
        if entries.is_empty() {
            return self.write_line("📋 Roster is empty");
        }

        self.write_line("📋 Roster:")?;
        for line in format_entries(entries) {
            writeln!(self.out, "  {}", line)?;
        }
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.write_line(message)
    }

    fn read_input(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}

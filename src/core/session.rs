use crate::core::{Action, ConfigProvider, DisplayPort, NameRegistry, Outcome};
use crate::utils::error::{Result, RosterError};

/// 名冊的呼叫端：讀取輸入、呼叫名冊、通知結果並同步畫面
pub struct RosterSession<D: DisplayPort> {
    registry: NameRegistry,
    display: D,
}

impl<D: DisplayPort> RosterSession<D> {
    pub fn new(display: D) -> Self {
        Self::with_registry(NameRegistry::new(), display)
    }

    pub fn with_registry(registry: NameRegistry, display: D) -> Self {
        Self { registry, display }
    }

    /// Seed the registry from configuration and optionally show the initial list.
    pub fn from_config<C: ConfigProvider>(config: &C, display: D) -> Result<Self> {
        let registry = NameRegistry::seeded(config.seed_names())?;
        tracing::info!("Roster session started with {} names", registry.len());

        let mut session = Self::with_registry(registry, display);
        if config.show_list_on_start() {
            session.refresh()?;
        }
        Ok(session)
    }

    pub fn perform(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::Add => self.add_user(),
            Action::Remove => self.remove_user(),
            Action::Search => self.search_user(),
        }
    }

    pub fn add_user(&mut self) -> Result<Outcome> {
        let name = self.trimmed_input();
        let outcome = match self.registry.add(&name) {
            Ok(added) => Outcome::Added(added),
            Err(e) => Outcome::Rejected(e),
        };
        self.finish(outcome)
    }

    pub fn remove_user(&mut self) -> Result<Outcome> {
        let name = self.trimmed_input();
        let outcome = match self.registry.remove(&name) {
            Ok(removed) => Outcome::Removed(removed),
            Err(e) => Outcome::Rejected(e),
        };
        self.finish(outcome)
    }

    pub fn search_user(&mut self) -> Result<Outcome> {
        let name = self.trimmed_input();
        let outcome = if self.registry.contains(&name) {
            Outcome::Found(name)
        } else {
            Outcome::Rejected(RosterError::NotFound { name })
        };

        // 搜尋後不論結果都清空輸入
        self.display.clear_input();
        self.display.notify(&outcome.message())?;
        Ok(outcome)
    }

    pub fn refresh(&mut self) -> Result<()> {
        self.display.render(&self.registry.list())
    }

    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_parts(self) -> (NameRegistry, D) {
        (self.registry, self.display)
    }

    fn trimmed_input(&self) -> String {
        self.display.read_input().trim().to_string()
    }

    /// 變更成功：重繪、清空輸入、通知；失敗：只通知，保留輸入
    fn finish(&mut self, outcome: Outcome) -> Result<Outcome> {
        match &outcome {
            Outcome::Rejected(e) => {
                tracing::warn!("Action rejected: {}", e);
            }
            _ if outcome.mutated() => {
                self.refresh()?;
                self.display.clear_input();
            }
            _ => {}
        }

        self.display.notify(&outcome.message())?;
        Ok(outcome)
    }
}

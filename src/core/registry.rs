use crate::utils::error::{RosterError, Result};

/// 依加入順序保存、不可重複的名冊
///
/// Names are compared by exact, case-sensitive equality. Entries are only
/// reachable through `add`, `remove` and the read-only queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    entries: Vec<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from configured names, trimming each one.
    ///
    /// Stops at the first blank or repeated name.
    pub fn seeded<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.add(name.as_ref().trim())?;
        }
        Ok(registry)
    }

    pub fn add(&mut self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }

        if self.contains(name) {
            return Err(RosterError::DuplicateName {
                name: name.to_string(),
            });
        }

        self.entries.push(name.to_string());
        tracing::debug!("Added \"{}\" ({} entries)", name, self.entries.len());
        Ok(name.to_string())
    }

    pub fn remove(&mut self, name: &str) -> Result<String> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry == name)
            .ok_or_else(|| RosterError::NotFound {
                name: name.to_string(),
            })?;

        // Vec::remove 會保留其餘元素的相對順序
        let removed = self.entries.remove(index);
        tracing::debug!("Removed \"{}\" ({} entries)", removed, self.entries.len());
        Ok(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|entry| entry == name)
    }

    pub fn list(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_of(names: &[&str]) -> NameRegistry {
        NameRegistry::seeded(names.iter().copied()).unwrap()
    }

    #[test]
    fn test_add_then_duplicate() {
        let mut registry = NameRegistry::new();

        assert_eq!(registry.add("Ana").unwrap(), "Ana");
        assert_eq!(registry.list(), vec!["Ana"]);

        let err = registry.add("Ana").unwrap_err();
        assert!(matches!(err, RosterError::DuplicateName { ref name } if name == "Ana"));
        assert_eq!(registry.list(), vec!["Ana"]);
    }

    #[test]
    fn test_add_empty_name_is_rejected() {
        let mut registry = registry_of(&["Ana"]);

        assert!(matches!(registry.add(""), Err(RosterError::EmptyName)));
        assert_eq!(registry.list(), vec!["Ana"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let mut registry = registry_of(&["Ana"]);

        assert!(!registry.contains("ana"));
        assert!(registry.add("ana").is_ok());
        assert_eq!(registry.list(), vec!["Ana", "ana"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut registry = registry_of(&["Ana", "Bea", "Cleo"]);

        assert_eq!(registry.remove("Bea").unwrap(), "Bea");
        assert_eq!(registry.list(), vec!["Ana", "Cleo"]);
        assert!(!registry.contains("Bea"));
    }

    #[test]
    fn test_remove_missing_name() {
        let mut registry = NameRegistry::new();

        let err = registry.remove("Ana").unwrap_err();
        assert!(matches!(err, RosterError::NotFound { ref name } if name == "Ana"));
        assert!(!registry.contains("Ana"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_string_is_never_found() {
        let mut registry = registry_of(&["Ana"]);

        assert!(!registry.contains(""));
        assert!(matches!(registry.remove(""), Err(RosterError::NotFound { .. })));
    }

    #[test]
    fn test_list_is_a_snapshot() {
        let registry = registry_of(&["Ana", "Bea"]);

        let mut snapshot = registry.list();
        snapshot.push("Intruder".to_string());
        snapshot.clear();

        assert_eq!(registry.list(), vec!["Ana", "Bea"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_seeded_trims_and_rejects_bad_seeds() {
        let registry = NameRegistry::seeded(["  Ana  ", "Bea"]).unwrap();
        assert_eq!(registry.list(), vec!["Ana", "Bea"]);

        assert!(matches!(
            NameRegistry::seeded(["Ana", "   "]),
            Err(RosterError::EmptyName)
        ));
        assert!(matches!(
            NameRegistry::seeded(["Ana", " Ana"]),
            Err(RosterError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_independent_registries() {
        let mut first = NameRegistry::new();
        let second = NameRegistry::new();

        first.add("Ana").unwrap();
        assert!(first.contains("Ana"));
        assert!(!second.contains("Ana"));
    }
}

/// Insertion-ordered set with toggle semantics, backing tag and factor
/// pickers. Toggling inserts when absent and removes when present, so a
/// double toggle is a no-op.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ToggleSet {
    items: Vec<String>,
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, item: &str) {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
        } else {
            self.items.push(item.to_string());
        }
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drain into a plain vec, leaving the set empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_inserts_then_removes() {
        let mut set = ToggleSet::new();
        set.toggle("Sleep");
        assert!(set.contains("Sleep"));
        set.toggle("Sleep");
        assert!(!set.contains("Sleep"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let mut set = ToggleSet::new();
        set.toggle("work");
        set.toggle("family");
        let before = set.clone();

        set.toggle("health");
        set.toggle("health");
        assert_eq!(set, before);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = ToggleSet::new();
        set.toggle("b");
        set.toggle("a");
        set.toggle("c");
        set.toggle("a");
        assert_eq!(set.items(), ["b", "c"]);
    }

    #[test]
    fn test_take_empties_set() {
        let mut set = ToggleSet::new();
        set.toggle("x");
        let items = set.take();
        assert_eq!(items, vec!["x".to_string()]);
        assert!(set.is_empty());
    }
}

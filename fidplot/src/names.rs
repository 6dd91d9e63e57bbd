//! Bijective mapping between the real name a line gets when it is created
//! and the display name the user sees (and may change).
//!
//! Say a line is plotted as `"Data Set"` and the user renames it to
//! `"Sample A"`. Everything that needs to find "the data set" keeps using the
//! real name, while lists and the legend show the display name. No two
//! entries share a real name and no two entries share a display name.

use std::collections::HashMap;

use crate::error::{GraphError, NameKind};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct NameRegistry {
    real_to_display: HashMap<String, String>,
    display_to_real: HashMap<String, String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new pair. Without a display name, the real name is used.
    pub fn add_entry(&mut self, real_name: &str, display_name: Option<&str>) -> Result<(), GraphError> {
        let display_name = display_name.unwrap_or(real_name);
        if self.real_to_display.contains_key(real_name) {
            return Err(GraphError::duplicate(NameKind::Real, real_name));
        }
        if self.display_to_real.contains_key(display_name) {
            return Err(GraphError::duplicate(NameKind::Display, display_name));
        }
        self.real_to_display
            .insert(real_name.to_owned(), display_name.to_owned());
        self.display_to_real
            .insert(display_name.to_owned(), real_name.to_owned());
        Ok(())
    }

    pub fn display_name(&self, real_name: &str) -> Result<&str, GraphError> {
        self.real_to_display
            .get(real_name)
            .map(String::as_str)
            .ok_or_else(|| GraphError::not_found(NameKind::Real, real_name))
    }

    pub fn real_name(&self, display_name: &str) -> Result<&str, GraphError> {
        self.display_to_real
            .get(display_name)
            .map(String::as_str)
            .ok_or_else(|| GraphError::not_found(NameKind::Display, display_name))
    }

    pub fn contains_real_name(&self, real_name: &str) -> bool {
        self.real_to_display.contains_key(real_name)
    }

    pub fn contains_display_name(&self, display_name: &str) -> bool {
        self.display_to_real.contains_key(display_name)
    }

    pub fn rename_display_name(&mut self, old_display: &str, new_display: &str) -> Result<(), GraphError> {
        let real_name = self.real_name(old_display)?.to_owned();
        self.repoint(&real_name, old_display, new_display)
    }

    pub fn rename_for_real_name(&mut self, real_name: &str, new_display: &str) -> Result<(), GraphError> {
        let old_display = self.display_name(real_name)?.to_owned();
        self.repoint(real_name, &old_display, new_display)
    }

    // Both maps are checked before either is touched.
    fn repoint(&mut self, real_name: &str, old_display: &str, new_display: &str) -> Result<(), GraphError> {
        if old_display == new_display {
            return Ok(());
        }
        if self.display_to_real.contains_key(new_display) {
            return Err(GraphError::duplicate(NameKind::Display, new_display));
        }
        self.display_to_real.remove(old_display);
        self.display_to_real
            .insert(new_display.to_owned(), real_name.to_owned());
        self.real_to_display
            .insert(real_name.to_owned(), new_display.to_owned());
        log::debug!("renamed '{old_display}' to '{new_display}' (real name '{real_name}')");
        Ok(())
    }

    /// Removing an unknown name is not an error; returns whether an entry
    /// was removed.
    pub fn remove_by_real_name(&mut self, real_name: &str) -> bool {
        match self.real_to_display.remove(real_name) {
            Some(display_name) => {
                self.display_to_real.remove(&display_name);
                true
            }
            None => false,
        }
    }

    pub fn remove_by_display_name(&mut self, display_name: &str) -> bool {
        match self.display_to_real.remove(display_name) {
            Some(real_name) => {
                self.real_to_display.remove(&real_name);
                true
            }
            None => false,
        }
    }

    /// Remove every entry whose real name starts with `prefix` and return the
    /// removed real names. An empty prefix removes everything.
    pub fn remove_all_with_real_name_prefix(&mut self, prefix: &str) -> Vec<String> {
        let matches: Vec<String> = self
            .real_to_display
            .keys()
            .filter(|real_name| real_name.starts_with(prefix))
            .cloned()
            .collect();
        for real_name in matches.iter() {
            self.remove_by_real_name(real_name);
        }
        matches
    }

    pub fn clear(&mut self) {
        self.real_to_display.clear();
        self.display_to_real.clear();
    }

    /// Snapshot of the current display names. Cloning the iterator restarts
    /// it; later changes to the registry are not observed.
    pub fn display_names(&self) -> std::vec::IntoIter<String> {
        self.display_to_real
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .into_iter()
    }

    pub fn len(&self) -> usize {
        self.real_to_display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real_to_display.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn assert_bijection(names: &NameRegistry) {
        assert_eq!(names.real_to_display.len(), names.display_to_real.len());
        for display in names.display_names() {
            let real = names.real_name(&display).unwrap();
            assert_eq!(names.display_name(real).unwrap(), display);
        }
        for real in names.real_to_display.keys() {
            let display = names.display_name(real).unwrap();
            assert_eq!(names.real_name(display).unwrap(), real);
        }
    }

    #[test]
    fn test_add_defaults_display_to_real_name() {
        let mut names = NameRegistry::new();
        names.add_entry("Data Set", None).unwrap();
        names.add_entry("Best Fit", Some("Fit")).unwrap();
        assert_eq!(names.display_name("Data Set").unwrap(), "Data Set");
        assert_eq!(names.real_name("Fit").unwrap(), "Best Fit");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut names = NameRegistry::new();
        names.add_entry("Peak", None).unwrap();
        assert_eq!(
            names.add_entry("Peak", Some("Other")),
            Err(GraphError::duplicate(NameKind::Real, "Peak"))
        );
        // display name collision with an existing entry
        assert_eq!(
            names.add_entry("Peak 2", Some("Peak")),
            Err(GraphError::duplicate(NameKind::Display, "Peak"))
        );
        assert_eq!(names.len(), 1);
        assert_bijection(&names);
    }

    #[test]
    fn test_lookup_missing() {
        let names = NameRegistry::new();
        assert_eq!(
            names.display_name("nope"),
            Err(GraphError::not_found(NameKind::Real, "nope"))
        );
        assert_eq!(
            names.real_name("nope"),
            Err(GraphError::not_found(NameKind::Display, "nope"))
        );
    }

    #[test]
    fn test_rename() {
        let mut names = NameRegistry::new();
        names.add_entry("Signal", None).unwrap();
        names.add_entry("Best Fit", None).unwrap();

        names.rename_display_name("Signal", "Trace1").unwrap();
        assert_eq!(names.display_name("Signal").unwrap(), "Trace1");
        assert!(!names.contains_display_name("Signal"));

        assert_eq!(
            names.rename_display_name("Trace1", "Best Fit"),
            Err(GraphError::duplicate(NameKind::Display, "Best Fit"))
        );
        assert!(matches!(
            names.rename_display_name("Signal", "x"),
            Err(GraphError::NotFound { .. })
        ));
        // renaming to the current name is fine
        names.rename_display_name("Trace1", "Trace1").unwrap();

        names.rename_for_real_name("Best Fit", "Fit").unwrap();
        assert_eq!(names.real_name("Fit").unwrap(), "Best Fit");
        assert_bijection(&names);
    }

    #[test]
    fn test_swap_display_names_through_temporary() {
        let mut names = NameRegistry::new();
        names.add_entry("a", None).unwrap();
        names.add_entry("b", None).unwrap();
        names.rename_display_name("a", "tmp").unwrap();
        names.rename_display_name("b", "a").unwrap();
        names.rename_display_name("tmp", "b").unwrap();
        assert_eq!(names.display_name("a").unwrap(), "b");
        assert_eq!(names.display_name("b").unwrap(), "a");
        assert_bijection(&names);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut names = NameRegistry::new();
        names.add_entry("Residuals", Some("Res")).unwrap();
        assert!(!names.remove_by_display_name("Residuals"));
        assert!(names.remove_by_display_name("Res"));
        assert!(!names.remove_by_real_name("Residuals"));
        assert!(names.is_empty());
        assert!(names.display_names().next().is_none());
    }

    #[test]
    fn test_remove_prefix() {
        let mut names = NameRegistry::new();
        for real in ["DeconPeak_0", "DeconPeak_1", "GuessPeak_0", "Data Set"] {
            names.add_entry(real, None).unwrap();
        }
        names.rename_display_name("DeconPeak_1", "big peak").unwrap();

        let mut removed = names.remove_all_with_real_name_prefix("DeconPeak_");
        removed.sort();
        assert_eq!(removed, vec!["DeconPeak_0", "DeconPeak_1"]);
        assert!(!names.contains_display_name("big peak"));
        assert!(names.contains_real_name("GuessPeak_0"));
        assert!(names.contains_real_name("Data Set"));

        assert!(names.remove_all_with_real_name_prefix("Mapping_").is_empty());
        assert_eq!(names.len(), 2);

        names.remove_all_with_real_name_prefix("");
        assert!(names.is_empty());
        assert_bijection(&names);
    }

    #[test]
    fn test_display_names_snapshot() {
        let mut names = NameRegistry::new();
        names.add_entry("a", None).unwrap();
        names.add_entry("b", None).unwrap();
        let snapshot = names.display_names();
        names.clear();

        let mut first: Vec<_> = snapshot.clone().collect();
        first.sort();
        assert_eq!(first, vec!["a", "b"]);
        // restarting yields the same names
        assert_eq!(snapshot.count(), 2);
        assert!(names.is_empty());
    }

    #[derive(Clone, Debug)]
    enum Op {
        Add(u8, Option<u8>),
        RenameDisplay(u8, u8),
        RenameReal(u8, u8),
        RemoveReal(u8),
        RemoveDisplay(u8),
        RemovePrefix(u8),
    }

    fn name(n: u8) -> String {
        format!("n{n}")
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..12, proptest::option::of(0u8..12)).prop_map(|(a, b)| Op::Add(a, b)),
            (0u8..12, 0u8..12).prop_map(|(a, b)| Op::RenameDisplay(a, b)),
            (0u8..12, 0u8..12).prop_map(|(a, b)| Op::RenameReal(a, b)),
            (0u8..12).prop_map(Op::RemoveReal),
            (0u8..12).prop_map(Op::RemoveDisplay),
            (0u8..2).prop_map(Op::RemovePrefix),
        ]
    }

    fn apply(names: &mut NameRegistry, op: &Op) -> Result<(), GraphError> {
        match op {
            Op::Add(a, b) => names.add_entry(&name(*a), b.map(name).as_deref()),
            Op::RenameDisplay(a, b) => names.rename_display_name(&name(*a), &name(*b)),
            Op::RenameReal(a, b) => names.rename_for_real_name(&name(*a), &name(*b)),
            Op::RemoveReal(a) => {
                names.remove_by_real_name(&name(*a));
                Ok(())
            }
            Op::RemoveDisplay(a) => {
                names.remove_by_display_name(&name(*a));
                Ok(())
            }
            Op::RemovePrefix(a) => {
                names.remove_all_with_real_name_prefix(&name(*a));
                Ok(())
            }
        }
    }

    proptest! {
        #[test]
        fn prop_operations_keep_bijection(ops in prop::collection::vec(arb_op(), 0..200)) {
            let mut names = NameRegistry::new();
            for op in ops.iter() {
                let before = names.clone();
                match apply(&mut names, op) {
                    Ok(()) => {
                        if let Op::Add(a, b) = op {
                            let display = b.map(name).unwrap_or_else(|| name(*a));
                            prop_assert_eq!(names.display_name(&name(*a)), Ok(display.as_str()));
                        }
                    }
                    Err(err) => {
                        prop_assert_eq!(&names, &before, "rejected {:?} changed the registry: {}", op, err);
                    }
                }
                assert_bijection(&names);
            }
        }
    }
}

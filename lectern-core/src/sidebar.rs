//! Sidebar module expand/collapse state.
//!
//! Kept separate from the cursor: user toggles never move the cursor, and
//! cursor motion only ever *opens* modules (additive sync). A full reset
//! happens solely when a different course loads.

/// Per-module expanded/collapsed map for the course sidebar.
#[derive(Debug, Clone, Default)]
pub struct SidebarExpansionState {
    expanded: Vec<bool>,
}

impl SidebarExpansionState {
    /// Initialize for a freshly loaded course: everything collapsed except
    /// the module containing the cursor.
    pub fn for_course(module_count: usize, cursor_module: usize) -> Self {
        let mut expanded = vec![false; module_count];
        if let Some(slot) = expanded.get_mut(cursor_module) {
            *slot = true;
        }
        Self { expanded }
    }

    pub fn is_expanded(&self, module_index: usize) -> bool {
        self.expanded.get(module_index).copied().unwrap_or(false)
    }

    /// User interaction: flip one module. Out-of-range indices are ignored.
    pub fn toggle(&mut self, module_index: usize) {
        if let Some(slot) = self.expanded.get_mut(module_index) {
            *slot = !*slot;
        }
    }

    /// Cursor-driven sync: force the module open without touching others.
    pub fn reveal(&mut self, module_index: usize) {
        if let Some(slot) = self.expanded.get_mut(module_index) {
            *slot = true;
        }
    }

    /// Snapshot of the full map, indexed by module.
    pub fn as_slice(&self) -> &[bool] {
        &self.expanded
    }

    /// Adjust to a refetched tree whose module count changed, keeping the
    /// user's choices for modules that survived. New modules start
    /// collapsed.
    pub fn resize(&mut self, module_count: usize) {
        self.expanded.resize(module_count, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_load_opens_only_the_cursor_module() {
        let sidebar = SidebarExpansionState::for_course(3, 1);
        assert_eq!(sidebar.as_slice(), &[false, true, false]);
    }

    #[test]
    fn reveal_is_additive() {
        let mut sidebar = SidebarExpansionState::for_course(3, 0);
        sidebar.reveal(2);
        assert_eq!(sidebar.as_slice(), &[true, false, true]);
        // Revealing an already-open module changes nothing.
        sidebar.reveal(0);
        assert_eq!(sidebar.as_slice(), &[true, false, true]);
    }

    #[test]
    fn toggle_flips_and_ignores_out_of_range() {
        let mut sidebar = SidebarExpansionState::for_course(2, 0);
        sidebar.toggle(0);
        sidebar.toggle(1);
        sidebar.toggle(99);
        assert_eq!(sidebar.as_slice(), &[false, true]);
    }
}

//! Ordered set of open files with a single active file.

use solpad_state::{EditorError, File, FileId};

use crate::detect_language;

/// Open files in tab order.
///
/// Invariant: `active` is `Some` exactly when `files` is non-empty, and
/// always names a file present in `files`.
#[derive(Debug, Default)]
pub struct FileRegistry {
    files: Vec<File>,
    active: Option<FileId>,
    next_id: u64,
}

impl FileRegistry {
    /// Create new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a file as a new tab and make it active.
    ///
    /// Every call creates a distinct tab, even for a name that is already
    /// open.
    pub fn open_file(
        &mut self,
        file_name: impl Into<String>,
        initial_code: impl Into<String>,
    ) -> FileId {
        self.next_id += 1;
        let id = FileId::from_raw(self.next_id);
        let file_name = file_name.into();
        let language = detect_language(&file_name);

        log::debug!("Opened {} as {} ({})", file_name, id, language);
        self.files
            .push(File::new(id, file_name, initial_code.into(), language));
        self.active = Some(id);
        id
    }

    /// Close a file. Unknown ids are ignored.
    ///
    /// Closing the active file activates the tab before it, or the first
    /// remaining tab when it was first.
    pub fn close_file(&mut self, id: FileId) -> Option<File> {
        let index = self.index_of(id)?;
        let file = self.files.remove(index);

        if self.active == Some(id) {
            self.active = if self.files.is_empty() {
                None
            } else {
                let replacement = index.saturating_sub(1);
                Some(self.files[replacement].id)
            };
        }

        log::debug!("Closed {} ({})", file.file_name, id);
        Some(file)
    }

    /// Make an open file active.
    pub fn set_active(&mut self, id: FileId) -> Result<(), EditorError> {
        if !self.contains(id) {
            log::warn!("Cannot activate unknown file {}", id);
            return Err(EditorError::UnknownFile(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// Replace the content of one file.
    pub fn update_code(
        &mut self,
        id: FileId,
        new_code: impl Into<String>,
    ) -> Result<(), EditorError> {
        match self.files.iter_mut().find(|f| f.id == id) {
            Some(file) => {
                file.code = new_code.into();
                Ok(())
            }
            None => {
                log::warn!("Dropped edit for unknown file {}", id);
                Err(EditorError::UnknownFile(id))
            }
        }
    }

    /// Get the active file.
    pub fn active_file(&self) -> Option<&File> {
        self.active.and_then(|id| self.get(id))
    }

    /// Get the active file id.
    pub fn active_id(&self) -> Option<FileId> {
        self.active
    }

    /// Get file by id.
    pub fn get(&self, id: FileId) -> Option<&File> {
        self.files.iter().find(|f| f.id == id)
    }

    /// Check whether a file is open.
    pub fn contains(&self, id: FileId) -> bool {
        self.index_of(id).is_some()
    }

    /// Position of a file in tab order.
    pub fn index_of(&self, id: FileId) -> Option<usize> {
        self.files.iter().position(|f| f.id == id)
    }

    /// Open files in tab order.
    pub fn files(&self) -> &[File] {
        &self.files
    }

    /// Get number of open files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if no file is open.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(registry: &FileRegistry) -> Vec<&str> {
        registry.files().iter().map(|f| f.file_name.as_str()).collect()
    }

    #[test]
    fn test_open_preserves_order_and_activates_latest() {
        let mut registry = FileRegistry::new();
        let a = registry.open_file("A.sol", "");
        let b = registry.open_file("B.sol", "");
        let c = registry.open_file("C.sol", "");

        assert_eq!(registry.len(), 3);
        assert_eq!(names(&registry), vec!["A.sol", "B.sol", "C.sol"]);
        assert_eq!(registry.active_id(), Some(c));
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn test_same_name_opens_new_tab() {
        let mut registry = FileRegistry::new();
        let first = registry.open_file("A.sol", "one");
        let second = registry.open_file("A.sol", "two");

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(first).unwrap().code, "one");
        assert_eq!(registry.get(second).unwrap().code, "two");
    }

    #[test]
    fn test_language_derived_from_name() {
        let mut registry = FileRegistry::new();
        registry.open_file("A.sol", "");
        assert_eq!(registry.active_file().unwrap().language, "solidity");
    }

    #[test]
    fn test_close_active_selects_previous() {
        let mut registry = FileRegistry::new();
        let a = registry.open_file("A.sol", "");
        let b = registry.open_file("B.sol", "");
        let c = registry.open_file("C.sol", "");

        registry.set_active(b).unwrap();
        registry.close_file(b);
        assert_eq!(registry.active_id(), Some(a));

        registry.close_file(a);
        assert_eq!(registry.active_id(), Some(c));
    }

    #[test]
    fn test_close_first_active_selects_new_first() {
        let mut registry = FileRegistry::new();
        let a = registry.open_file("A.sol", "");
        let b = registry.open_file("B.sol", "");
        registry.open_file("C.sol", "");

        registry.set_active(a).unwrap();
        registry.close_file(a);
        assert_eq!(registry.active_id(), Some(b));
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut registry = FileRegistry::new();
        let a = registry.open_file("A.sol", "");
        let b = registry.open_file("B.sol", "");

        registry.close_file(a);
        assert_eq!(names(&registry), vec!["B.sol"]);
        assert_eq!(registry.active_id(), Some(b));
    }

    #[test]
    fn test_close_last_file_clears_active() {
        let mut registry = FileRegistry::new();
        let a = registry.open_file("A.sol", "");

        assert!(registry.close_file(a).is_some());
        assert!(registry.is_empty());
        assert_eq!(registry.active_id(), None);
        assert!(registry.active_file().is_none());
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let mut registry = FileRegistry::new();
        let a = registry.open_file("A.sol", "");
        registry.close_file(a);

        assert!(registry.close_file(a).is_none());
        assert!(registry.close_file(FileId::from_raw(99)).is_none());
    }

    #[test]
    fn test_set_active_unknown() {
        let mut registry = FileRegistry::new();
        let a = registry.open_file("A.sol", "");
        let ghost = FileId::from_raw(42);

        assert_eq!(registry.set_active(ghost), Err(EditorError::UnknownFile(ghost)));
        assert_eq!(registry.active_id(), Some(a));
    }

    #[test]
    fn test_update_code_touches_one_file() {
        let mut registry = FileRegistry::new();
        let a = registry.open_file("A.sol", "a");
        let b = registry.open_file("B.sol", "b");

        registry.update_code(a, "a2").unwrap();
        assert_eq!(registry.get(a).unwrap().code, "a2");
        assert_eq!(registry.get(b).unwrap().code, "b");
        assert_eq!(registry.active_id(), Some(b));

        registry.close_file(a);
        assert_eq!(registry.update_code(a, "x"), Err(EditorError::UnknownFile(a)));
    }
}

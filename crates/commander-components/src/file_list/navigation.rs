// Per-tab navigation history

use std::path::{Path, PathBuf};

const MAX_HISTORY: usize = 100;

/// Back/forward stacks around the current directory
#[derive(Debug, Default)]
pub struct History {
    back: Vec<PathBuf>,
    forward: Vec<PathBuf>,
    current: Option<PathBuf>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit, clearing forward history. Revisiting the current
    /// directory is a no-op.
    pub fn visit(&mut self, path: &Path) {
        if self.current.as_deref() == Some(path) {
            return;
        }
        if let Some(current) = self.current.take() {
            self.back.push(current);
            if self.back.len() > MAX_HISTORY {
                self.back.remove(0);
            }
        }
        self.current = Some(path.to_path_buf());
        self.forward.clear();
    }

    pub fn back(&mut self) -> Option<PathBuf> {
        let prev = self.back.pop()?;
        if let Some(current) = self.current.replace(prev.clone()) {
            self.forward.push(current);
        }
        Some(prev)
    }

    pub fn forward(&mut self) -> Option<PathBuf> {
        let next = self.forward.pop()?;
        if let Some(current) = self.current.replace(next.clone()) {
            self.back.push(current);
        }
        Some(next)
    }

    /// Where `back` would go, without moving
    pub fn peek_back(&self) -> Option<&Path> {
        self.back.last().map(PathBuf::as_path)
    }

    /// Where `forward` would go, without moving
    pub fn peek_forward(&self) -> Option<&Path> {
        self.forward.last().map(PathBuf::as_path)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn current(&self) -> Option<&Path> {
        self.current.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new();
        history.visit(Path::new("/"));
        history.visit(Path::new("/usr"));
        history.visit(Path::new("/usr/share"));

        assert_eq!(history.back(), Some(PathBuf::from("/usr")));
        assert_eq!(history.back(), Some(PathBuf::from("/")));
        assert_eq!(history.back(), None);
        assert!(history.can_go_forward());
        assert_eq!(history.forward(), Some(PathBuf::from("/usr")));
        assert_eq!(history.current(), Some(Path::new("/usr")));
    }

    #[test]
    fn test_visit_clears_forward() {
        let mut history = History::new();
        history.visit(Path::new("/"));
        history.visit(Path::new("/tmp"));
        history.back();

        history.visit(Path::new("/var"));

        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some(PathBuf::from("/")));
    }

    #[test]
    fn test_revisit_current_is_ignored() {
        let mut history = History::new();
        history.visit(Path::new("/tmp"));
        history.visit(Path::new("/tmp"));
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_peek_leaves_history_in_place() {
        let mut history = History::new();
        history.visit(Path::new("/a"));
        history.visit(Path::new("/a/b"));

        assert_eq!(history.peek_back(), Some(Path::new("/a")));
        assert_eq!(history.peek_forward(), None);
        assert_eq!(history.current(), Some(Path::new("/a/b")));
        assert!(history.can_go_back());

        history.back();
        assert_eq!(history.peek_forward(), Some(Path::new("/a/b")));
        assert_eq!(history.current(), Some(Path::new("/a")));
    }

    #[test]
    fn test_back_stack_is_bounded() {
        let mut history = History::new();
        for i in 0..(MAX_HISTORY + 10) {
            history.visit(&PathBuf::from(format!("/d{}", i)));
        }
        let mut steps = 0;
        while history.back().is_some() {
            steps += 1;
        }
        assert_eq!(steps, MAX_HISTORY);
    }
}

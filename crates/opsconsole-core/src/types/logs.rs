//! Log file selections.

/// One or more log files addressed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSelection {
    /// A single file.
    Single(String),
    /// A set of files.
    Many(Vec<String>),
}

impl LogSelection {
    /// Non-blank file names in request order.
    pub fn filenames(&self) -> Vec<&str> {
        let names = match self {
            Self::Single(name) => std::slice::from_ref(name),
            Self::Many(names) => names.as_slice(),
        };
        names
            .iter()
            .map(String::as_str)
            .filter(|n| !n.trim().is_empty())
            .collect()
    }

    /// Whether the selection names no file.
    pub fn is_empty(&self) -> bool {
        self.filenames().is_empty()
    }
}

impl From<&str> for LogSelection {
    fn from(name: &str) -> Self {
        Self::Single(name.to_string())
    }
}

impl From<String> for LogSelection {
    fn from(name: String) -> Self {
        Self::Single(name)
    }
}

impl From<Vec<String>> for LogSelection {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl From<&[&str]> for LogSelection {
    fn from(names: &[&str]) -> Self {
        Self::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_becomes_one_element() {
        let selection = LogSelection::from("app.log");
        assert_eq!(selection.filenames(), vec!["app.log"]);
    }

    #[test]
    fn test_blank_names_are_dropped() {
        let selection = LogSelection::from(vec!["a.log".to_string(), "  ".to_string()]);
        assert_eq!(selection.filenames(), vec!["a.log"]);
        assert!(LogSelection::from(" ").filenames().is_empty());
    }

    #[test]
    fn test_blank_names_are_empty() {
        assert!(LogSelection::Many(vec![]).is_empty());
        assert!(LogSelection::Many(vec!["  ".into()]).is_empty());
        assert!(!LogSelection::Many(vec!["a.log".into()]).is_empty());
    }
}

//! TF command argument builders
//!
//! Builds the exact argument lists for the subcommands whose output the
//! parsers consume. Running the tool is the caller's concern; nothing here
//! executes a process.

use std::fmt;

use super::constants::{commands, flags, special};

/// One command argument, optionally masked when the list is echoed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    value: String,
    masked: bool,
}

impl Argument {
    /// The functional value, regardless of masking
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }
}

/// Ordered argument list with secret masking
///
/// [`values`] is what gets handed to a process spawner; `Display` is safe
/// to echo into build logs, masked arguments render as `********`.
///
/// [`values`]: ArgumentList::values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    args: Vec<Argument>,
}

impl ArgumentList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: impl Into<String>) {
        self.args.push(Argument {
            value: value.into(),
            masked: false,
        });
    }

    pub fn add_masked(&mut self, value: impl Into<String>) {
        self.args.push(Argument {
            value: value.into(),
            masked: true,
        });
    }

    /// Functional argument vector, masking ignored
    pub fn values(&self) -> Vec<&str> {
        self.args.iter().map(|a| a.value.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.args.iter()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(if arg.masked { special::MASK } else { &arg.value })?;
        }
        Ok(())
    }
}

/// Connection tokens supplied by the surrounding build machinery
///
/// Both tokens are opaque to this crate and passed through unchanged; the
/// login token may embed credentials and is always masked.
#[derive(Debug, Clone)]
pub struct Connection {
    server: String,
    login: Option<String>,
}

impl Connection {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            login: None,
        }
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    fn append_to(&self, args: &mut ArgumentList) {
        args.add(self.server.as_str());
        if let Some(login) = &self.login {
            args.add_masked(login.as_str());
        }
    }
}

/// Arguments for `tf history` in brief format
pub fn history_arguments(project_path: &str, connection: &Connection) -> ArgumentList {
    let mut args = ArgumentList::new();
    args.add(commands::HISTORY);
    args.add(project_path);
    args.add(flags::NOPROMPT);
    args.add(flags::RECURSIVE);
    args.add(flags::FORMAT_BRIEF);
    connection.append_to(&mut args);
    args
}

/// Arguments for `tf labels` in detailed format
pub fn labels_arguments(connection: &Connection) -> ArgumentList {
    let mut args = ArgumentList::new();
    args.add(commands::LABELS);
    args.add(flags::NOPROMPT);
    args.add(flags::FORMAT_DETAILED);
    connection.append_to(&mut args);
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_connection() -> Connection {
        Connection::new("-server:https://tfs.example.com:8080")
            .with_login("-login:alice,hunter2")
    }

    #[test]
    fn test_history_arguments_order() {
        let args = history_arguments("$/Proj", &sample_connection());
        assert_eq!(
            args.values(),
            vec![
                "history",
                "$/Proj",
                "-noprompt",
                "-recursive",
                "-format:brief",
                "-server:https://tfs.example.com:8080",
                "-login:alice,hunter2",
            ]
        );
    }

    #[test]
    fn test_labels_arguments_order() {
        let args = labels_arguments(&sample_connection());
        assert_eq!(
            args.values(),
            vec![
                "labels",
                "-noprompt",
                "-format:detailed",
                "-server:https://tfs.example.com:8080",
                "-login:alice,hunter2",
            ]
        );
    }

    #[test]
    fn test_display_masks_login() {
        let args = labels_arguments(&sample_connection());
        let echoed = args.to_string();
        assert!(echoed.contains("********"));
        assert!(!echoed.contains("hunter2"));
        // Masking never alters the functional value
        assert!(args.values().contains(&"-login:alice,hunter2"));
    }

    #[test]
    fn test_connection_without_login() {
        let conn = Connection::new("-server:https://tfs.example.com:8080");
        let args = history_arguments("$/Proj", &conn);
        assert_eq!(args.len(), 6);
        assert!(args.iter().all(|a| !a.is_masked()));
    }
}

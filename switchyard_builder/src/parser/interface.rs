use std::env;
use std::path::Path;

/// The output sink used to render usage messages.
///
/// `String` implements this behaviour, which is handy to capture the output.
pub trait UserInterface {
    /// Write a piece of text, without any implicit newline.
    fn write(&mut self, text: &str);
}

/// Writes to the standard output.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn write(&mut self, text: &str) {
        print!("{text}");
    }
}

impl UserInterface for String {
    fn write(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Behaviour to answer file & directory existence questions.
///
/// Used by the filename and directory value providers.
pub trait FileSystem {
    /// Whether `path` names an existing file.
    fn file_exists(&self, path: &str) -> bool;

    /// Whether `path` names an existing directory.
    fn directory_exists(&self, path: &str) -> bool;
}

/// The local file system, via [`std::path::Path`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem {}

impl FileSystem for LocalFileSystem {
    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }
}

/// *Available using 'unit_test' crate feature only.*</br></br>
/// A file system made up of explicitly declared paths.
///
/// ### Example
/// ```ignore
/// # use switchyard_builder as switchyard;
/// use switchyard::{FileSystem, MemoryFileSystem};
///
/// let file_system = MemoryFileSystem::default()
///     .with_file("./app.toml")
///     .with_directory("./out");
///
/// assert!(file_system.file_exists("./app.toml"));
/// assert!(!file_system.directory_exists("./app.toml"));
/// ```
#[cfg(any(test, feature = "unit_test"))]
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: std::collections::HashSet<String>,
    directories: std::collections::HashSet<String>,
}

#[cfg(any(test, feature = "unit_test"))]
impl MemoryFileSystem {
    /// Declare an existing file.
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Declare an existing directory.
    pub fn with_directory(mut self, path: impl Into<String>) -> Self {
        self.directories.insert(path.into());
        self
    }
}

#[cfg(any(test, feature = "unit_test"))]
impl FileSystem for MemoryFileSystem {
    fn file_exists(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    fn directory_exists(&self, path: &str) -> bool {
        self.directories.contains(path)
    }
}

/// Behaviour to source the raw command line tokens.
pub trait ArgumentSource {
    /// The tokens, excluding the program name.
    fn arguments(&self) -> Vec<String>;
}

/// The arguments of the running process, via [`std::env::args`].
#[derive(Debug, Default)]
pub struct ProcessArguments {}

impl ArgumentSource for ProcessArguments {
    fn arguments(&self) -> Vec<String> {
        env::args().skip(1).collect()
    }
}

impl ArgumentSource for Vec<String> {
    fn arguments(&self) -> Vec<String> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_interface() {
        let mut output = String::default();
        output.write("abc");
        output.write("\t");
        output.write("def\n");
        assert_eq!(output, "abc\tdef\n");
    }

    #[test]
    fn local_file_system() {
        // The unit tests run from the crate root.
        let file_system = LocalFileSystem::default();
        assert!(file_system.file_exists("Cargo.toml"));
        assert!(!file_system.directory_exists("Cargo.toml"));
        assert!(file_system.directory_exists("./"));
        assert!(file_system.directory_exists("src"));
        assert!(!file_system.file_exists("src"));
        assert!(!file_system.file_exists("./Nope_Not_Here.dll"));
        assert!(!file_system.directory_exists("./Nope/"));
    }

    #[test]
    fn memory_file_system() {
        let file_system = MemoryFileSystem::default()
            .with_file("a.txt")
            .with_directory("b");
        assert!(file_system.file_exists("a.txt"));
        assert!(!file_system.file_exists("b"));
        assert!(file_system.directory_exists("b"));
        assert!(!file_system.directory_exists("a.txt"));
    }

    #[test]
    fn explicit_source() {
        let source = vec!["--flag".to_string(), "value".to_string()];
        assert_eq!(
            source.arguments(),
            vec!["--flag".to_string(), "value".to_string()]
        );
    }
}

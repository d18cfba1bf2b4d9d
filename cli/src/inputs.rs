//! Puzzle input store backed by local files

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Reads puzzle inputs from a directory of `day{DD}.txt` files, with an
/// optional per-run override file for a single day.
pub struct InputStore {
    dir: PathBuf,
    override_file: Option<PathBuf>,
}

impl InputStore {
    /// Create a store over the given directory
    pub fn new(dir: PathBuf, override_file: Option<PathBuf>) -> Self {
        Self { dir, override_file }
    }

    /// Get the input path for a specific day
    pub fn input_path(&self, day: u8) -> PathBuf {
        match &self.override_file {
            Some(path) => path.clone(),
            None => self.dir.join(format!("day{:02}.txt", day)),
        }
    }

    /// Check if an input file exists for the day
    pub fn contains(&self, day: u8) -> bool {
        self.input_path(day).exists()
    }

    /// Load the input for a day
    ///
    /// A missing file and an empty file are both fatal, reported as
    /// distinct errors.
    pub fn load(&self, day: u8) -> Result<String, InputError> {
        let path = self.input_path(day);
        if !path.exists() {
            return Err(InputError::NotFound { day, path });
        }
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Err(InputError::Empty { path });
        }
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"), None);
        assert_eq!(store.input_path(1), PathBuf::from("inputs/day01.txt"));
        assert_eq!(store.input_path(25), PathBuf::from("inputs/day25.txt"));
    }

    #[test]
    fn override_file_wins() {
        let store = InputStore::new(PathBuf::from("inputs"), Some(PathBuf::from("custom.txt")));
        assert_eq!(store.input_path(6), PathBuf::from("custom.txt"));
    }

    #[test]
    fn load_reads_existing_input() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("day03.txt"), "mul(2,3)\n").unwrap();

        let store = InputStore::new(temp.path().to_path_buf(), None);
        assert!(store.contains(3));
        assert_eq!(store.load(3).unwrap(), "mul(2,3)\n");
    }

    #[test]
    fn missing_input_is_fatal() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf(), None);

        assert!(!store.contains(9));
        assert!(matches!(
            store.load(9),
            Err(InputError::NotFound { day: 9, .. })
        ));
    }

    #[test]
    fn empty_input_is_fatal() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("day05.txt"), "  \n\n").unwrap();

        let store = InputStore::new(temp.path().to_path_buf(), None);
        assert!(matches!(store.load(5), Err(InputError::Empty { .. })));
    }
}

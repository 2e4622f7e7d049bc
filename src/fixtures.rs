#[cfg(test)]
pub mod test {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};

    use crate::fs::FileSystem;

    /// In-memory [`FileSystem`] with switchable read and write failures.
    #[derive(Debug, Default)]
    pub struct MemoryFs {
        files: RefCell<HashMap<PathBuf, Vec<u8>>>,
        pub fail_reads: Cell<bool>,
        pub fail_writes: Cell<bool>,
        pub writes: Cell<usize>,
    }

    impl MemoryFs {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_file(path: &str, contents: impl Into<Vec<u8>>) -> Self {
            let fs = Self::new();
            fs.put(path, contents);
            fs
        }

        pub fn put(&self, path: &str, contents: impl Into<Vec<u8>>) {
            self.files
                .borrow_mut()
                .insert(PathBuf::from(path), contents.into());
        }

        pub fn contents(&self, path: &str) -> Option<String> {
            self.files
                .borrow()
                .get(Path::new(path))
                .map(|b| String::from_utf8_lossy(b).into_owned())
        }
    }

    impl FileSystem for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            self.files.borrow().contains_key(path)
        }

        fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
            if self.fail_reads.get() {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read denied"));
            }
            self.files
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }

        fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
            if self.fail_writes.get() {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "write denied"));
            }
            self.writes.set(self.writes.get() + 1);
            self.files
                .borrow_mut()
                .insert(path.to_path_buf(), contents.as_bytes().to_vec());
            Ok(())
        }
    }

    #[test]
    fn memory_fs_round_trips_contents() {
        let fs = MemoryFs::new();
        fs.write(Path::new("config.ini"), "[s]\n").unwrap();
        assert!(fs.exists(Path::new("config.ini")));
        assert_eq!(fs.contents("config.ini").as_deref(), Some("[s]\n"));
        assert_eq!(fs.writes.get(), 1);
    }
}

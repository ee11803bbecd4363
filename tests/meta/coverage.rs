//! Keeps `tests/unit` an exact mirror of `src`
//!
//! Every source module gets a unit test file at the same relative path, no
//! unit test file outlives its module, and every test file holds tests.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SOURCE_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TEST_ROOT: &str = "tests";

    // Crate roots and module declarations carry no logic of their own
    fn needs_mirror(relative: &str) -> bool {
        relative != "main.rs" && relative != "lib.rs" && !relative.ends_with("mod.rs")
    }

    fn mirrored_paths(root: &str) -> BTreeSet<String> {
        let root = Path::new(root);
        let mut paths = BTreeSet::new();
        if let Err(error) = walk_rust_paths(root, root, &mut paths) {
            assert!(!root.exists(), "Could not scan {}: {error}", root.display());
        }
        paths
    }

    // Relative paths of every directory and `.rs` file below `dir`
    fn walk_rust_paths(dir: &Path, root: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Ok(stripped) = path.strip_prefix(root) else {
                return Err(io::Error::other("path escaped the scanned root"));
            };
            let relative = stripped.to_string_lossy().replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                walk_rust_paths(&path, root, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }

        Ok(())
    }

    #[test]
    fn test_every_module_has_unit_tests() {
        let unit_paths = mirrored_paths(UNIT_ROOT);

        let untested: Vec<String> = mirrored_paths(SOURCE_ROOT)
            .into_iter()
            .filter(|relative| needs_mirror(relative) && !unit_paths.contains(relative))
            .map(|relative| format!("  - {SOURCE_ROOT}/{relative} has no {UNIT_ROOT}/{relative}"))
            .collect();

        assert!(
            untested.is_empty(),
            "Modules without a unit test mirror:\n{}",
            untested.join("\n")
        );
    }

    #[test]
    fn test_no_unit_tests_without_module() {
        let source_paths = mirrored_paths(SOURCE_ROOT);

        let stale: Vec<String> = mirrored_paths(UNIT_ROOT)
            .into_iter()
            .filter(|relative| !relative.ends_with("mod.rs") && !source_paths.contains(relative))
            .map(|relative| {
                format!("  - {UNIT_ROOT}/{relative} mirrors missing {SOURCE_ROOT}/{relative}")
            })
            .collect();

        assert!(
            stale.is_empty(),
            "Unit test files left behind by removed modules:\n{}",
            stale.join("\n")
        );
    }

    #[test]
    fn test_test_files_declare_tests() {
        let root = Path::new(TEST_ROOT);
        let mut empty = Vec::new();

        for relative in mirrored_paths(TEST_ROOT) {
            let path = root.join(&relative);
            let is_entry = relative == "main.rs" || relative.ends_with("mod.rs");
            if path.is_dir() || is_entry {
                continue;
            }

            match fs::read_to_string(&path) {
                Ok(content) if content.contains("#[test]") => {}
                Ok(_) => empty.push(format!("  - {}", path.display())),
                Err(error) => empty.push(format!("  - {} (unreadable: {error})", path.display())),
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without a single #[test]:\n{}",
            empty.join("\n")
        );
    }
}

use crate::domain::errors::StitchError;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// One text fragment: its normalized path and its lines, loaded once.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

/// The fragment universe in discovery order.
///
/// A fragment's position in `fragments` is its id; the dependency graph
/// stores ids, while paths stay the externally visible key.
#[derive(Debug, Clone)]
pub struct FragmentSet {
    root: PathBuf,
    fragments: Vec<Fragment>,
    index: HashMap<PathBuf, usize>,
}

impl FragmentSet {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: normalize_path(root.as_ref()),
            fragments: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Walk `root` and load every regular file whose extension is listed.
    ///
    /// Entries are visited in file-name order so that discovery order, and
    /// with it the sort tie-break, is the same on every platform. Paths in
    /// `exclude` are skipped.
    pub fn discover(
        root: &Path,
        extensions: &[String],
        exclude: &[PathBuf],
    ) -> Result<Self, StitchError> {
        let mut set = FragmentSet::new(root);
        let exclude: Vec<PathBuf> = exclude.iter().map(|p| absolute_path(p)).collect();
        let mut files = Vec::new();
        walk(root, &mut files)?;
        for path in files {
            let path = normalize_path(&path);
            if !has_extension(&path, extensions) || exclude.contains(&absolute_path(&path)) {
                continue;
            }
            let content =
                std::fs::read_to_string(&path).map_err(|e| StitchError::read(&path, e))?;
            set.insert(path, &content);
        }
        tracing::debug!(
            root = %set.root.display(),
            fragments = set.len(),
            "discovered fragments"
        );
        Ok(set)
    }

    /// Add a fragment, returning its id. Re-inserting a known path replaces
    /// its content and keeps the original id.
    pub fn insert(&mut self, path: impl AsRef<Path>, content: &str) -> usize {
        let path = normalize_path(path.as_ref());
        let lines = content.lines().map(str::to_string).collect();
        if let Some(&id) = self.index.get(&path) {
            self.fragments[id].lines = lines;
            return id;
        }
        let id = self.fragments.len();
        self.index.insert(path.clone(), id);
        self.fragments.push(Fragment { path, lines });
        id
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn get(&self, id: usize) -> &Fragment {
        &self.fragments[id]
    }

    pub fn lookup(&self, path: &Path) -> Option<usize> {
        self.index.get(path).copied()
    }

    /// Resolve a directive path against the root into a candidate identifier.
    pub fn resolve(&self, raw: &str) -> PathBuf {
        normalize_path(&self.root.join(raw))
    }

    /// Root-relative name with `/` separators, used in messages and reports.
    pub fn display_name(&self, id: usize) -> String {
        relative_name(&self.root, &self.fragments[id].path)
    }

    pub fn display_names(&self, ids: &[usize]) -> Vec<String> {
        ids.iter().map(|&id| self.display_name(id)).collect()
    }
}

pub fn relative_name(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lexical normalization: drops `.` and folds `..` into its parent where
/// one exists. The filesystem is never consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Normalized absolute form, so a relative and an absolute spelling of the
/// same file compare equal. Falls back to the lexical form when the current
/// directory is unavailable.
fn absolute_path(path: &Path) -> PathBuf {
    let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    normalize_path(&abs)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.') == ext)
}

fn walk(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), StitchError> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| StitchError::read(dir, e))? {
        let entry = entry.map_err(|e| StitchError::read(dir, e))?;
        entries.push(entry);
    }
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        let path = entry.path();
        let ty = entry.file_type().map_err(|e| StitchError::read(&path, e))?;
        if ty.is_dir() {
            walk(&path, out)?;
        } else if path.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn normalize_folds_dot_segments() {
        assert_eq!(
            normalize_path(Path::new("root/./a/../b.txt")),
            PathBuf::from("root/b.txt")
        );
        assert_eq!(
            normalize_path(Path::new("../x/y.txt")),
            PathBuf::from("../x/y.txt")
        );
        assert_eq!(normalize_path(Path::new("/../a")), PathBuf::from("/a"));
    }

    #[test]
    fn resolve_matches_discovered_identifier() {
        let mut set = FragmentSet::new("res");
        let id = set.insert("res/folder/a.txt", "hello");
        assert_eq!(set.lookup(&set.resolve("folder/a.txt")), Some(id));
        assert_eq!(set.lookup(&set.resolve("./folder/x/../a.txt")), Some(id));
        assert_eq!(set.lookup(&set.resolve("folder/b.txt")), None);
        assert_eq!(set.display_name(id), "folder/a.txt");
    }

    #[test]
    fn reinsert_keeps_id() {
        let mut set = FragmentSet::new("res");
        let a = set.insert("res/a.txt", "one");
        let b = set.insert("res/b.txt", "two");
        assert_eq!(set.insert("res/a.txt", "three\nfour"), a);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(a).lines, vec!["three", "four"]);
        assert_ne!(a, b);
    }

    #[test]
    fn discover_walks_in_name_order_and_filters() {
        let tmp = TempDir::new().expect("temp dir");
        let root = tmp.path();
        fs::create_dir_all(root.join("b/nested")).expect("dirs");
        fs::create_dir_all(root.join("output")).expect("dirs");
        fs::write(root.join("c.txt"), "c").expect("write");
        fs::write(root.join("a.txt"), "a\r\nsecond").expect("write");
        fs::write(root.join("b/nested/z.txt"), "z").expect("write");
        fs::write(root.join("b/skip.md"), "md").expect("write");
        fs::write(root.join("output/result.txt"), "old result").expect("write");

        let set = FragmentSet::discover(
            root,
            &["txt".to_string()],
            &[root.join("output/result.txt")],
        )
        .expect("discover");

        let names: Vec<String> = (0..set.len()).map(|i| set.display_name(i)).collect();
        assert_eq!(names, vec!["a.txt", "b/nested/z.txt", "c.txt"]);
        assert_eq!(set.get(0).lines, vec!["a", "second"]);
    }

    #[test]
    fn absolute_and_relative_spellings_compare_equal() {
        let cwd = std::env::current_dir().expect("cwd");
        assert_eq!(
            absolute_path(Path::new("src/./resources/output/result.txt")),
            cwd.join("src/resources/output/result.txt")
        );
        assert_eq!(
            absolute_path(&cwd.join("src/resources/x/../output/result.txt")),
            cwd.join("src/resources/output/result.txt")
        );
    }

    #[test]
    fn discover_missing_root_is_read_error() {
        let tmp = TempDir::new().expect("temp dir");
        let err = FragmentSet::discover(&tmp.path().join("nope"), &["txt".into()], &[])
            .expect_err("missing root");
        assert_eq!(err.code(), "IO");
    }
}

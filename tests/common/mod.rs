#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch working directory with a `src/resources` fragment root, the
/// layout `stitch` uses by default.
pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        let root = dir.join("src/resources");
        fs::create_dir_all(&root).expect("create fragment root");
        Self {
            _tmp: tmp,
            dir,
            root,
        }
    }

    pub fn fragment(&self, rel: &str, content: &str) -> &Self {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fragment dir");
        }
        fs::write(path, content).expect("write fragment");
        self
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join("output/result.txt")
    }

    pub fn output(&self) -> String {
        fs::read_to_string(self.output_path()).expect("read output")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("stitch");
        cmd.current_dir(&self.dir).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn fail_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

pub fn names(v: &Value) -> Vec<String> {
    v.as_array()
        .expect("array")
        .iter()
        .map(|x| x.as_str().expect("string").to_string())
        .collect()
}

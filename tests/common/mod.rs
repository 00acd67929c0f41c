use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub journal: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let journal = tmp.path().join("workouts.csv");

        Self {
            _tmp: tmp,
            home,
            journal,
        }
    }

    pub fn out_dir(&self) -> PathBuf {
        self._tmp.path().join("charts")
    }

    pub fn write_journal(&self, body: &str) {
        fs::write(&self.journal, body).expect("write journal fixture");
    }

    /// Two Bench sessions and one run: Bench volumes 1440 + 1560 (PR 1560),
    /// cardio total 30 minutes.
    pub fn seed_mixed_week(&self) {
        self.write_journal(
            "date,exercise,sets,reps,weight,duration\n\
             2025-03-01,Bench,3,8,60,0\n\
             2025-03-02,Run,0,0,0,30\n\
             2025-03-03,Bench,3,8,65,0\n",
        );
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("repbook");
        cmd.env("HOME", &self.home).args([
            "--journal",
            self.journal.to_str().expect("journal path utf8"),
        ]);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
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

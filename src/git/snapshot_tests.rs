use std::path::PathBuf;

use crate::process::SystemRunner;
use crate::test_support::TestRepo;

use super::*;

#[test]
fn object_names_for_each_revision() {
    assert_eq!(Revision::LastCommitted.object_name("src/a.php"), "HEAD:src/a.php");
    assert_eq!(Revision::StagedIndex.object_name("src/a.php"), ":0:src/a.php");
}

#[test]
fn staged_and_committed_versions_are_distinguished() {
    let repo = TestRepo::new();
    repo.commit_files(&[("a.php", "<?php\necho 1;\n")]);
    repo.stage("a.php", "<?php\necho 2;\n");
    // working tree differs from both and must not leak in
    repo.write("a.php", "<?php\necho 3;\n");

    let snapshotter = ContentSnapshotter::new(&SystemRunner, repo.path());

    assert_eq!(
        snapshotter.snapshot("a.php", Revision::LastCommitted).unwrap(),
        ContentDigest::of_bytes(b"<?php\necho 1;\n")
    );
    assert_eq!(
        snapshotter.snapshot("a.php", Revision::StagedIndex).unwrap(),
        ContentDigest::of_bytes(b"<?php\necho 2;\n")
    );
}

#[test]
fn materialized_bytes_are_exact() {
    let repo = TestRepo::new();
    let content = "line one  \r\n\tline two\n\n";
    repo.commit_files(&[("dir/b.js", content)]);

    let snapshotter = ContentSnapshotter::new(&SystemRunner, repo.path());
    let snapshot = snapshotter
        .materialize("dir/b.js", Revision::LastCommitted)
        .unwrap();

    assert_eq!(std::fs::read(snapshot.path()).unwrap(), content.as_bytes());
    assert!(
        snapshot
            .path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with(".js")
    );
}

#[test]
fn temp_file_is_removed_when_snapshot_drops() {
    let repo = TestRepo::new();
    repo.commit_files(&[("a.php", "<?php\n")]);

    let snapshotter = ContentSnapshotter::new(&SystemRunner, repo.path());
    let snapshot = snapshotter
        .materialize("a.php", Revision::StagedIndex)
        .unwrap();
    let temp_path: PathBuf = snapshot.path().to_path_buf();
    assert!(temp_path.exists());

    drop(snapshot);
    assert!(!temp_path.exists());
}

#[test]
fn missing_object_is_a_reconstruction_error() {
    let repo = TestRepo::new();
    repo.commit_files(&[("a.php", "<?php\n")]);
    repo.stage("new.php", "<?php\n");

    let snapshotter = ContentSnapshotter::new(&SystemRunner, repo.path());
    let err = snapshotter
        .snapshot("new.php", Revision::LastCommitted)
        .unwrap_err();

    match err {
        FormatGuardError::Reconstruction {
            path,
            revision,
            stderr,
        } => {
            assert_eq!(path, "new.php");
            assert_eq!(revision, "last committed");
            assert!(!stderr.is_empty());
        }
        other => panic!("expected reconstruction error, got {other:?}"),
    }
}

#[test]
fn reconstruction_failure_leaves_no_temp_file_behind() {
    use crate::process::{ProcessOutput, ProcessRunner};
    use std::sync::Mutex;

    struct FailingGit {
        seen: Mutex<Option<PathBuf>>,
    }

    impl ProcessRunner for FailingGit {
        fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
            *self.seen.lock().unwrap() = invocation.stdout_to.clone();
            Ok(ProcessOutput {
                code: Some(128),
                stdout: Vec::new(),
                stderr: b"fatal: bad object".to_vec(),
            })
        }
    }

    let runner = FailingGit {
        seen: Mutex::new(None),
    };
    let workdir = std::env::temp_dir();
    let snapshotter = ContentSnapshotter::new(&runner, &workdir);

    assert!(snapshotter.snapshot("x.php", Revision::StagedIndex).is_err());

    let temp_path = runner.seen.lock().unwrap().clone().unwrap();
    assert!(!temp_path.exists());
}

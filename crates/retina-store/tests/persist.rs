use retina_store::persist::persist_exports;
use retina_store::store::{EVALUATIONS_FILE_NAME, ExportBundle, METRICS_FILE_NAME};

#[test]
fn writes_both_files_into_new_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("session-a");
    let bundle = ExportBundle {
        metrics_csv: b"timestamp\n2026-01-01 00:00:00\n".to_vec(),
        evaluations_csv: Vec::new(),
    };

    let written = persist_exports(&dir, &bundle).unwrap();

    assert_eq!(written.metrics_path, dir.join(METRICS_FILE_NAME));
    assert_eq!(written.evaluations_path, dir.join(EVALUATIONS_FILE_NAME));
    assert_eq!(std::fs::read(&written.metrics_path).unwrap(), bundle.metrics_csv);
    assert!(std::fs::read(&written.evaluations_path).unwrap().is_empty());
    let mut names: Vec<_> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec![EVALUATIONS_FILE_NAME, METRICS_FILE_NAME]);
}

#[test]
fn overwrites_previous_export() {
    let tmp = tempfile::tempdir().unwrap();
    let first = ExportBundle {
        metrics_csv: b"a\n1\n".to_vec(),
        evaluations_csv: b"b\n2\n".to_vec(),
    };
    let second = ExportBundle {
        metrics_csv: b"a\n1\n3\n".to_vec(),
        evaluations_csv: b"b\n2\n4\n".to_vec(),
    };

    persist_exports(tmp.path(), &first).unwrap();
    let written = persist_exports(tmp.path(), &second).unwrap();

    assert_eq!(std::fs::read(written.metrics_path).unwrap(), second.metrics_csv);
    assert_eq!(
        std::fs::read(written.evaluations_path).unwrap(),
        second.evaluations_csv
    );
}

#[test]
fn concurrent_exports_to_one_directory_all_succeed() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("shared");
    let bundle = ExportBundle {
        metrics_csv: b"timestamp,content_length\n2026-01-01 00:00:00,12\n".to_vec(),
        evaluations_csv: b"timestamp,would_use\n2026-01-01 00:00:00,Maybe\n".to_vec(),
    };

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(|| persist_exports(&dir, &bundle)))
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }
    });

    assert_eq!(
        std::fs::read(dir.join(METRICS_FILE_NAME)).unwrap(),
        bundle.metrics_csv
    );
    assert_eq!(
        std::fs::read(dir.join(EVALUATIONS_FILE_NAME)).unwrap(),
        bundle.evaluations_csv
    );
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 2);
}

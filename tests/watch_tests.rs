use muxc::{Pipeline, PipelineOptions, TickOutcome, Watcher};
use std::fs;
use std::path::Path;
use std::time::Duration;

mod common;
use common::fixtures::{scratch_copy, ROOT};
use common::temp_files::write;

fn watcher(dir: &Path) -> Watcher {
    let pipeline = Pipeline::new(dir.join(ROOT), PipelineOptions::default()).unwrap();
    Watcher::new(pipeline, Duration::from_millis(10))
}

/// Runs one tick and returns its outcome with whatever it printed.
fn tick(watcher: &mut Watcher) -> (TickOutcome, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = watcher.tick(&mut out, &mut err);
    (
        outcome,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_first_tick_builds_then_idles() {
    let dir = scratch_copy("basic");
    let mut w = watcher(dir.path());

    let (outcome, out, err) = tick(&mut w);
    assert!(matches!(outcome, TickOutcome::Built(_)));
    assert!(out.starts_with("Built changes in "));
    assert!(err.is_empty());
    assert!(dir.path().join("gen/routes.rs").is_file());

    for _ in 0..3 {
        let (outcome, out, err) = tick(&mut w);
        assert_eq!(outcome, TickOutcome::Unchanged);
        assert!(out.is_empty() && err.is_empty());
    }
}

#[test]
fn test_unchanged_tick_does_not_rewrite_output() {
    let dir = scratch_copy("basic");
    let mut w = watcher(dir.path());
    tick(&mut w);

    let output = dir.path().join("gen/routes.rs");
    fs::write(&output, "hand edit").unwrap();
    assert_eq!(tick(&mut w).0, TickOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&output).unwrap(), "hand edit");
}

#[test]
fn test_included_file_change_triggers_one_rebuild() {
    let dir = scratch_copy("basic");
    let mut w = watcher(dir.path());
    tick(&mut w);

    write(
        dir.path(),
        "routes/v2.yaml",
        "routes:\n  - base: /api/v2\n    paths: ['GET /version ; handlers::version']\n",
    );
    assert!(matches!(tick(&mut w).0, TickOutcome::Built(_)));
    assert_eq!(tick(&mut w).0, TickOutcome::Unchanged);

    let text = fs::read_to_string(dir.path().join("gen/routes.rs")).unwrap();
    assert!(text.contains("\"GET /api/v2/version\""));
    assert!(!text.contains("/api/v2/health"));
}

#[test]
fn test_newly_included_file_is_watched() {
    let dir = scratch_copy("basic");
    let mut w = watcher(dir.path());
    tick(&mut w);

    write(dir.path(), "extra.yaml", "imports: [crate::extra]\n");
    let root = fs::read_to_string(dir.path().join(ROOT)).unwrap();
    write(dir.path(), ROOT, &format!("{root}!include extra.yaml\n"));
    assert!(matches!(tick(&mut w).0, TickOutcome::Built(_)));

    write(dir.path(), "extra.yaml", "imports: [crate::other]\n");
    assert!(matches!(tick(&mut w).0, TickOutcome::Built(_)));
    let text = fs::read_to_string(dir.path().join("gen/routes.rs")).unwrap();
    assert!(text.contains("use crate::other;\n"));
}

#[test]
fn test_identical_error_is_reported_once() {
    let dir = scratch_copy("basic");
    write(dir.path(), "routes/v2.yaml", "routes: [\n");
    let mut w = watcher(dir.path());

    let (first, _, err) = tick(&mut w);
    assert!(matches!(first, TickOutcome::Failed { reported: true, .. }));
    assert!(err.contains("routes/v2.yaml"), "{err}");
    assert_eq!(err.lines().count(), 1);

    for _ in 0..3 {
        let (outcome, out, err) = tick(&mut w);
        assert!(matches!(outcome, TickOutcome::Failed { reported: false, .. }));
        assert!(out.is_empty() && err.is_empty());
    }
}

#[test]
fn test_different_error_is_reported_again() {
    let dir = scratch_copy("basic");
    write(dir.path(), "routes/v2.yaml", "routes: [\n");
    let mut w = watcher(dir.path());
    tick(&mut w);

    write(dir.path(), "routes/v2.yaml", "routes:\n  - paths: ['GET /a ; h ; m ; n']\n");
    let (outcome, _, err) = tick(&mut w);
    assert!(matches!(outcome, TickOutcome::Failed { reported: true, .. }));
    assert!(err.contains("GET /a ; h ; m ; n"), "{err}");
}

#[test]
fn test_error_after_success_is_reported_again() {
    let dir = scratch_copy("basic");
    let good = fs::read_to_string(dir.path().join("routes/v2.yaml")).unwrap();
    let mut w = watcher(dir.path());

    write(dir.path(), "routes/v2.yaml", "routes: [\n");
    assert!(matches!(tick(&mut w).0, TickOutcome::Failed { reported: true, .. }));

    write(dir.path(), "routes/v2.yaml", &good);
    assert!(matches!(tick(&mut w).0, TickOutcome::Built(_)));
    assert_eq!(w.state().last_error, None);

    write(dir.path(), "routes/v2.yaml", "routes: [\n");
    assert!(matches!(tick(&mut w).0, TickOutcome::Failed { reported: true, .. }));
}

#[test]
fn test_failed_build_is_retried_until_fixed() {
    let dir = scratch_copy("basic");
    // a plain file where the output directory should be
    fs::write(dir.path().join("gen"), "").unwrap();
    let mut w = watcher(dir.path());

    assert!(matches!(tick(&mut w).0, TickOutcome::Failed { .. }));
    assert!(matches!(tick(&mut w).0, TickOutcome::Failed { reported: false, .. }));
    assert_eq!(w.state().last_hash, None);

    fs::remove_file(dir.path().join("gen")).unwrap();
    assert!(matches!(tick(&mut w).0, TickOutcome::Built(_)));
    assert!(w.state().last_hash.is_some());
}

#[test]
fn test_missing_include_keeps_watching() {
    let dir = scratch_copy("basic");
    let mut w = watcher(dir.path());
    tick(&mut w);

    fs::remove_file(dir.path().join("middlewares.yaml")).unwrap();
    let (outcome, _, err) = tick(&mut w);
    assert!(matches!(outcome, TickOutcome::Failed { reported: true, .. }));
    assert!(err.contains("middlewares.yaml"), "{err}");

    write(dir.path(), "middlewares.yaml", "vars: {}\n");
    assert!(matches!(tick(&mut w).0, TickOutcome::Built(_)));
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the partials build and remove commands against the
//! real filesystem.

mod common;

use common::{HASH_END, HASH_START};
use parts::domain::PartsError;
use parts::service::{BuildOutcome, PartialsBuildCommand, PartialsRemoveCommand, RemoveOutcome};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DEMO_CONFIG: &str = include_str!("../demos/python/config.py");
const DEMO_CACHE: &str = include_str!("../demos/python/partials/cache.py");
const DEMO_LOGGING: &str = include_str!("../demos/python/partials/logging.py");

struct Fixture {
    _dir: TempDir,
    aggregate: PathBuf,
    partials: PathBuf,
}

impl Fixture {
    fn new(aggregate_contents: &str, partials: &[(&str, &str)]) -> Self {
        Self::named("agg", aggregate_contents, partials)
    }

    fn named(aggregate_name: &str, aggregate_contents: &str, partials: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let aggregate = dir.path().join(aggregate_name);
        let partials_dir = dir.path().join("partials");
        fs::create_dir(&partials_dir).unwrap();
        fs::write(&aggregate, aggregate_contents).unwrap();
        for (name, body) in partials {
            fs::write(partials_dir.join(name), body).unwrap();
        }
        Self {
            _dir: dir,
            aggregate,
            partials: partials_dir,
        }
    }

    fn build(&self, style: &str) -> parts::domain::Result<BuildOutcome> {
        PartialsBuildCommand::new(path_str(&self.aggregate), path_str(&self.partials), style).run()
    }

    fn remove(&self, style: &str) -> parts::domain::Result<RemoveOutcome> {
        PartialsRemoveCommand::new(path_str(&self.aggregate), style).run()
    }

    fn contents(&self) -> String {
        fs::read_to_string(&self.aggregate).unwrap()
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_build_basic_output() {
    let fixture = Fixture::new("", &[("partials1", "Partial 1"), ("partials2", "Partial 2")]);
    fixture.build("#").unwrap();

    assert_eq!(
        fixture.contents(),
        format!("\n{HASH_START}\nPartial 1\nPartial 2\n{HASH_END}\n")
    );
}

#[test]
fn test_build_is_idempotent() {
    let fixture = Fixture::new(
        "Host base\n",
        &[("a", "Host a\n    User a"), ("b", "Host b\n")],
    );

    fixture.build("#").unwrap();
    let first = fixture.contents();
    fixture.build("#").unwrap();
    fixture.build("#").unwrap();

    assert_eq!(fixture.contents(), first);
}

#[test]
fn test_build_after_adding_partial_is_stable() {
    let fixture = Fixture::new("Host base\n", &[("a", "Host a")]);
    fixture.build("#").unwrap();

    fs::write(fixture.partials.join("b"), "Host b").unwrap();
    fixture.build("#").unwrap();
    let second = fixture.contents();
    fixture.build("#").unwrap();

    assert_eq!(fixture.contents(), second);
    assert_eq!(
        second,
        format!("Host base\n{HASH_START}\nHost a\nHost b\n{HASH_END}\n")
    );
}

#[test]
fn test_build_preserves_original_content() {
    let original = "# My existing config\nHost personal\n    User me\n";
    let fixture = Fixture::new(original, &[("work", "Host work\n    User admin")]);
    fixture.build("#").unwrap();

    let result = fixture.contents();
    assert!(result.starts_with(original));
    assert!(result.contains("Host work\n    User admin\n"));
    assert!(result.contains("# PARTIALS>>>>>"));
    assert!(result.contains("# PARTIALS<<<<<"));
    assert!(result.contains("# ============================"));
}

#[test]
fn test_build_dry_run_leaves_file_untouched() {
    let original = "Host base\n";
    let fixture = Fixture::new(original, &[("a", "Host a")]);

    let mut command = PartialsBuildCommand::new(
        path_str(&fixture.aggregate),
        path_str(&fixture.partials),
        "#",
    );
    command.set_dry_run(true);

    match command.run().unwrap() {
        BuildOutcome::DryRun { path, content } => {
            assert_eq!(path, fixture.aggregate);
            assert_eq!(
                content,
                format!("Host base\n{HASH_START}\nHost a\n{HASH_END}\n").into_bytes()
            );
        }
        other => panic!("expected dry run, got {:?}", other),
    }
    assert_eq!(fixture.contents(), original);
}

#[test]
fn test_build_skips_subdirectories() {
    let fixture = Fixture::new("", &[("a", "A"), ("c", "C")]);
    fs::create_dir(fixture.partials.join("b")).unwrap();
    fixture.build("#").unwrap();

    assert_eq!(
        fixture.contents(),
        format!("\n{HASH_START}\nA\nC\n{HASH_END}\n")
    );
}

#[test]
fn test_build_merges_non_utf8_partial() {
    let fixture = Fixture::new("Host a\n", &[]);
    fs::write(fixture.partials.join("latin1"), b"# caf\xe9\nHost b").unwrap();

    fixture.build("#").unwrap();

    let mut expected = b"Host a\n".to_vec();
    expected.extend_from_slice(HASH_START.as_bytes());
    expected.extend_from_slice(b"\n# caf\xe9\nHost b\n");
    expected.extend_from_slice(HASH_END.as_bytes());
    expected.push(b'\n');
    assert_eq!(fs::read(&fixture.aggregate).unwrap(), expected);

    fixture.remove("#").unwrap();
    assert_eq!(fixture.contents(), "Host a\n");
}

#[test]
fn test_build_nonexistent_aggregate() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");
    let err = PartialsBuildCommand::new(path_str(&missing), path_str(dir.path()), "#")
        .run()
        .unwrap_err();

    assert!(matches!(err, PartsError::AggregateRead { .. }));
    assert!(err.to_string().contains("failed to read aggregate file"));
}

#[test]
fn test_build_nonexistent_partials_dir() {
    let fixture = Fixture::new("", &[]);
    let missing = fixture.partials.join("nope");
    let err = PartialsBuildCommand::new(path_str(&fixture.aggregate), path_str(&missing), "#")
        .run()
        .unwrap_err();

    assert!(err.to_string().contains("failed to read partials directory"));
    assert_eq!(fixture.contents(), "");
}

#[test]
fn test_build_comment_styles() {
    let cases = [
        ("app.js", "//", "// ============================\n// PARTIALS>>>>>\n// ============================"),
        ("schema.sql", "auto", "-- ============================\n-- PARTIALS>>>>>\n-- ============================"),
        ("site.css", "auto", "/*\n/* PARTIALS>>>>>\n*/"),
        ("index.html", "auto", "<!--\n<!-- PARTIALS>>>>>\n-->"),
        ("notes", "##", "## ============================\n## PARTIALS>>>>>\n## ============================"),
    ];

    for (name, style, start) in cases {
        let fixture = Fixture::named(name, "base\n", &[("p", "partial")]);
        fixture.build(style).unwrap();
        let result = fixture.contents();
        assert!(
            result.starts_with(&format!("base\n{start}\npartial\n")),
            "{name} with {style}: {result:?}"
        );
    }
}

#[test]
fn test_build_replaces_section_written_with_auto() {
    let fixture = Fixture::named("hosts.conf", "base\n", &[("p", "one")]);
    fixture.build("auto").unwrap();
    fs::write(fixture.partials.join("p"), "two").unwrap();
    fixture.build("#").unwrap();

    assert_eq!(
        fixture.contents(),
        format!("base\n{HASH_START}\ntwo\n{HASH_END}\n")
    );
}

#[test]
fn test_remove_with_section() {
    let original = format!(
        "# Original config\nHost example\n    User test\n{HASH_START}\nHost server1\n    User admin\n{HASH_END}\n"
    );
    let fixture = Fixture::new(&original, &[]);

    let outcome = fixture.remove("#").unwrap();

    let result = fixture.contents();
    assert_eq!(result, "# Original config\nHost example\n    User test\n");
    assert_eq!(
        outcome,
        RemoveOutcome::Removed {
            path: fixture.aggregate.clone(),
            removed: original.len() - result.len(),
        }
    );
}

#[test]
fn test_remove_block_comments() {
    let fixture = Fixture::new(
        "/* Original */\n/*\n/* PARTIALS>>>>>\n*/\ncontent\n/*\n/* PARTIALS<<<<<\n*/\n",
        &[],
    );
    fixture.remove("/*").unwrap();
    assert_eq!(fixture.contents(), "/* Original */\n");
}

#[test]
fn test_remove_keeps_text_after_section() {
    let fixture = Fixture::new(
        &format!("top\n\n{HASH_START}\nx\n{HASH_END}\nbottom\n"),
        &[],
    );
    fixture.remove("#").unwrap();
    assert_eq!(fixture.contents(), "top\nbottom\n");
}

#[test]
fn test_remove_without_section() {
    let fixture = Fixture::new("Host example\n", &[]);
    let err = fixture.remove("#").unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "no partials section found in file '{}' (looking for comment style '#')",
            fixture.aggregate.display()
        )
    );
    assert_eq!(fixture.contents(), "Host example\n");
}

#[test]
fn test_remove_dry_run() {
    let original = format!("Host example\n{HASH_START}\nx\n{HASH_END}\n");
    let fixture = Fixture::new(&original, &[]);

    let mut command = PartialsRemoveCommand::new(path_str(&fixture.aggregate), "#");
    command.set_dry_run(true);
    let outcome = command.run().unwrap();

    assert_eq!(
        outcome,
        RemoveOutcome::DryRun {
            path: fixture.aggregate.clone(),
            original_length: original.len(),
            content: b"Host example\n".to_vec(),
        }
    );
    assert_eq!(fixture.contents(), original);

    let fixture = Fixture::new("Host example\n", &[]);
    let mut command = PartialsRemoveCommand::new(path_str(&fixture.aggregate), "#");
    command.set_dry_run(true);
    assert!(matches!(
        command.run().unwrap(),
        RemoveOutcome::NothingToRemove { .. }
    ));
}

#[test]
fn test_remove_after_build_restores_original() {
    let original = "# Original\nHost a\n";
    let fixture = Fixture::new(original, &[("p", "Host p")]);

    fixture.build("#").unwrap();
    fixture.remove("#").unwrap();

    assert_eq!(fixture.contents(), original);
}

#[test]
fn test_demo_rebuild_reproduces_sample() {
    let fixture = Fixture::named(
        "config.py",
        DEMO_CONFIG,
        &[("cache.py", DEMO_CACHE), ("logging.py", DEMO_LOGGING)],
    );

    fixture.build("auto").unwrap();
    assert_eq!(fixture.contents(), DEMO_CONFIG);
}

#[test]
fn test_demo_logging_matches_partial() {
    let start = DEMO_LOGGING.find("LOGGING = {").unwrap();
    let logging = &DEMO_LOGGING[start..];

    assert!(DEMO_CONFIG.contains(logging));
    assert_eq!(DEMO_CONFIG.matches("LOGGING = {").count(), 1);
}

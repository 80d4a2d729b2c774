use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::{documents_dir, numbered_lines, run_tridiff_command, write_document};

#[rstest]
fn print_parts_with_sigils(documents_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_document(&documents_dir, "old.txt", "keep\ndrop\nkeep too\n");
    write_document(&documents_dir, "new.txt", "keep\nkeep too\nadd\n");

    run_tridiff_command(documents_dir.path(), &["diff-lines", "old.txt", "new.txt"])
        .assert()
        .success()
        .stdout(predicate::eq(" keep\n-drop\n keep too\n+add\n"));

    Ok(())
}

#[rstest]
fn never_collapses_unchanged_lines(
    documents_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = numbered_lines(1..=40);
    write_document(&documents_dir, "old.txt", &text);
    write_document(&documents_dir, "new.txt", &text);

    let output = run_tridiff_command(documents_dir.path(), &["diff-lines", "old.txt", "new.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(String::from_utf8(output)?.lines().count(), 40);

    Ok(())
}

use std::cell::Cell;
use std::fs;

use tempfile::TempDir;

use rowfile_model::{Row, RowfileError};
use rowfile_output::{FILE_EXTENSION, FILE_PREFIX, TokenProvider, write_rows};

struct FixedToken(&'static str);

impl TokenProvider for FixedToken {
    fn next_id(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Default)]
struct CountingToken {
    calls: Cell<usize>,
}

impl TokenProvider for CountingToken {
    fn next_id(&self) -> String {
        self.calls.set(self.calls.get() + 1);
        format!("count-{}", self.calls.get())
    }
}

#[test]
fn writes_rows_reversed_with_fields_swapped() {
    let dir = TempDir::new().expect("create temp dir");
    let rows = vec![Row::new(1, 2), Row::new(6, 7), Row::new(6, 7)];
    let path = write_rows(dir.path(), &rows, &FixedToken("test")).expect("write rows");
    let contents = fs::read_to_string(&path).expect("read output");
    assert_eq!(contents, "7,6\n7,6\n2,1\n");
}

#[test]
fn output_name_is_prefix_token_extension() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_rows(dir.path(), &[Row::new(1, 2)], &FixedToken("test")).expect("write rows");
    assert_eq!(
        path,
        dir.path().join(format!("{FILE_PREFIX}test{FILE_EXTENSION}"))
    );
    assert!(path.is_file());
}

#[test]
fn provider_is_consulted_exactly_once() {
    let dir = TempDir::new().expect("create temp dir");
    let provider = CountingToken::default();
    let path = write_rows(dir.path(), &[Row::new(1, 2)], &provider).expect("write rows");
    assert_eq!(provider.calls.get(), 1);
    // The single token is the one used for the file name.
    assert_eq!(path, dir.path().join("output_count-1.txt"));
}

#[test]
fn empty_row_list_creates_an_empty_file() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_rows(dir.path(), &[], &FixedToken("empty")).expect("write rows");
    let contents = fs::read_to_string(&path).expect("read output");
    assert!(contents.is_empty());
}

#[test]
fn existing_file_is_overwritten_without_complaint() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("output_test.txt");
    fs::write(&path, "stale content that is longer than the new file\n").expect("seed file");
    write_rows(dir.path(), &[Row::new(1, 2)], &FixedToken("test")).expect("write rows");
    let contents = fs::read_to_string(&path).expect("read output");
    assert_eq!(contents, "2,1\n");
}

#[test]
fn unwritable_directory_fails_with_io_error() {
    let dir = TempDir::new().expect("create temp dir");
    let missing_dir = dir.path().join("no-such-dir");
    let error =
        write_rows(&missing_dir, &[Row::new(1, 2)], &FixedToken("test")).expect_err("should fail");
    assert!(matches!(error, RowfileError::Io(_)));
}

#[test]
fn read_then_write_round_trip() {
    let dir = TempDir::new().expect("create temp dir");
    let input = dir.path().join("input.txt");
    fs::write(&input, "1,2\n2,3\nbad\n4,5\n").expect("write input");
    let rows = rowfile_ingest::read_rows(&input).expect("read rows");
    let output = write_rows(dir.path(), &rows, &FixedToken("roundtrip")).expect("write rows");
    let contents = fs::read_to_string(&output).expect("read output");
    assert_eq!(contents, "5,4\n3,2\n2,1\n");
}

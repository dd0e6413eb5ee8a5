use std::fs;
use std::path::Path;

use lib::SampleRow;
use lib::envelope::sample_envelopes;
use lib::load_samples;
use lib::samples::Samples;
use lib::write_samples;
use tempfile::tempdir;

fn pattern(p: &Path) -> String {
    p.to_str().unwrap().to_string()
}

#[test]
fn loads_three_aligned_columns() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("results.csv");
    // trailing spaces after every value, as older result files have
    fs::write(&file, "0.0 0.0 0.001 \n0.0 2.0 0.002 \n100.0 0.0 0.5 \n").unwrap();

    let s = load_samples(&pattern(&file)).unwrap();

    assert_eq!(s.len(), 3);
    assert_eq!(s.array_sizes, vec![0.0, 0.0, 100.0]);
    assert_eq!(s.sortedness, vec![0.0, 2.0, 0.0]);
    assert_eq!(s.execution_times, vec![0.001, 0.002, 0.5]);
}

#[test]
fn empty_file_gives_empty_samples_and_envelopes() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("results.csv");
    fs::write(&file, "").unwrap();

    let s = load_samples(&pattern(&file)).unwrap();
    assert!(s.is_empty());
    assert!(s.sortedness.is_empty() && s.execution_times.is_empty());

    let env = sample_envelopes(&s, 50).unwrap();
    assert!(env.max.is_empty() && env.min.is_empty());
}

#[test]
fn malformed_row_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("results.csv");
    fs::write(&file, "10.0 1.0 0.1\n10.0 abc 0.1\n").unwrap();

    let err = load_samples(&pattern(&file)).unwrap_err();
    assert!(err.to_string().contains("line 2"), "{err}");
}

#[test]
fn non_finite_values_fail() {
    for bad in ["inf", "NaN", "-inf"] {
        let dir = tempdir().unwrap();
        let file = dir.path().join("results.csv");
        fs::write(&file, format!("0 0 1\n0 2 {bad}\n100 0 2\n")).unwrap();

        let err = load_samples(&pattern(&file)).unwrap_err().to_string();
        assert!(err.contains("line 2"), "{err}");
        assert!(err.contains("non-finite execution time"), "{err}");
    }
}

#[test]
fn short_row_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("results.csv");
    fs::write(&file, "10.0 1.0\n").unwrap();

    assert!(load_samples(&pattern(&file)).is_err());
}

#[test]
fn missing_file_fails() {
    let dir = tempdir().unwrap();
    assert!(load_samples(&pattern(&dir.path().join("nope.csv"))).is_err());
}

#[test]
fn glob_concatenates_in_order() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.csv"), "1.0 1.0 1.0\n").unwrap();
    fs::write(dir.path().join("b.csv"), "2.0 2.0 2.0\n3.0 3.0 3.0\n").unwrap();

    let s = load_samples(&pattern(&dir.path().join("*.csv"))).unwrap();
    assert_eq!(s.array_sizes, vec![1.0, 2.0, 3.0]);
}

#[test]
fn written_samples_load_back() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("results.csv");
    let written = (0..10)
        .map(|i| SampleRow {
            array_size: (i / 5 * 100) as f64,
            sortedness: (i % 5) as f64 * 2.0,
            execution_time: 0.125 * i as f64,
        })
        .collect::<Samples>();

    write_samples(&file, &written).unwrap();

    assert_eq!(load_samples(&pattern(&file)).unwrap(), written);
}

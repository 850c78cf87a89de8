//! End-to-end pipeline tests: log files on disk through loading,
//! parsing, comparison, and report rendering.

use std::io::Write;
use std::path::PathBuf;

use gbdiff::cpu::CPU_DETAIL_CAP;
use gbdiff::{bus, cpu, raw, report};

fn write_log(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

const CPU_LOG: &str = "\
PC=0100 OP=00 AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE
PC=0101 OP=C3 AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE
PC=0150 OP=CB CB=87 AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE
";

#[test]
fn cpu_pipeline_reports_single_field_divergence() {
    let dir = tempfile::tempdir().unwrap();
    let expected = write_log(&dir, "expected.txt", CPU_LOG);
    let actual = write_log(
        &dir,
        "actual.txt",
        &CPU_LOG.replace("PC=0150 OP=CB CB=87 AF=01B0", "PC=0150 OP=CB CB=87 AF=11B0"),
    );

    let expected_lines = gbdiff::io::read_log_lines(&expected).unwrap();
    let actual_lines = gbdiff::io::read_log_lines(&actual).unwrap();
    let comparison = cpu::compare_logs(&expected_lines, &actual_lines, CPU_DETAIL_CAP);

    assert_eq!(comparison.total_differences(), 1);
    let report = report::render_cpu(&comparison);
    assert!(report.contains("Difference #1 at line 3"));
    assert!(report.contains("AF : expected=01B0   actual=11B0   ✗"));
    assert!(report.contains("CB : expected=87     actual=87     ✓"));
}

#[test]
fn cpu_pipeline_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let expected = write_log(&dir, "expected.txt", CPU_LOG);
    let actual = write_log(&dir, "actual.txt", CPU_LOG);

    let comparison = cpu::compare_logs(
        &gbdiff::io::read_log_lines(&expected).unwrap(),
        &gbdiff::io::read_log_lines(&actual).unwrap(),
        CPU_DETAIL_CAP,
    );

    assert_eq!(comparison.total_differences(), 0);
    assert!(report::render_cpu(&comparison).contains("✓ Logs are identical!"));
}

#[test]
fn bus_pipeline_drops_malformed_lines_and_finds_divergence() {
    let dir = tempfile::tempdir().unwrap();
    let expected = write_log(
        &dir,
        "expected.txt",
        "\
A:01 F:C-NZ SP:DFFB PC:C370 PCMEM:E6,10,C4,AF ADDR:FF00 VAL:10
A:01 F:C-NZ SP:DFFB PC:C371 PCMEM:E6,10,C4,AF ADDR:FF01 VAL:11
serial: PASSED
A:01 F:C-NZ SP:DFFB PC:C372 PCMEM:E6,10,C4,AF ADDR:FF02 VAL:12
",
    );
    // Same stream in the legacy format, with the third write differing.
    let actual = write_log(
        &dir,
        "actual.txt",
        "\
PC=C370 ADDR=FF00 VAL=10
PC=C371 ADDR=FF01 VAL=11
PC=C372 ADDR=FF02 VAL=FF
",
    );

    let expected_writes = bus::parse_log(&gbdiff::io::read_log_lines(&expected).unwrap());
    let actual_writes = bus::parse_log(&gbdiff::io::read_log_lines(&actual).unwrap());
    assert_eq!(expected_writes.len(), 3);

    let scan = bus::first_divergence(&expected_writes, &actual_writes);
    let div = scan.divergence.as_ref().expect("third write differs");
    assert_eq!(div.number, 3);

    let report = report::render_bus_first(&scan);
    assert!(report.contains("First difference at write #3:"));
    assert!(report.contains("Actual:   PC=0xC372 ADDR=0xFF02 VAL=0xFF"));
    assert!(report.contains("Previous 2 writes:"));
}

#[test]
fn raw_pipeline_handles_compressed_input() {
    let dir = tempfile::tempdir().unwrap();
    let plain = write_log(&dir, "plain.txt", "alpha\nbeta\n");

    let compressed_path = dir.path().join("other.txt.zst");
    let compressed = zstd::stream::encode_all("alpha\ngamma\n".as_bytes(), 3).unwrap();
    std::fs::File::create(&compressed_path)
        .unwrap()
        .write_all(&compressed)
        .unwrap();

    let comparison = raw::compare_lines(
        &gbdiff::io::read_log_lines(&plain).unwrap(),
        &gbdiff::io::read_log_lines(&compressed_path).unwrap(),
    );

    assert_eq!(comparison.total_differences(), 1);
    assert_eq!(comparison.differences[0].line, 2);
    assert_eq!(comparison.differences[0].actual, "gamma");
}

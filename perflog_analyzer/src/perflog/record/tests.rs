//!
//! Tests for perflog record parsing.
//!

use super::error::Error;
use super::value::Value;
use super::Record;

const IMB_LINE: &str =
    "2020-08-19T16:20:21+01:00|x|IMB_Pingpong|max_bandwidth=3041.25|Mbytes/sec|x|x";

const GROMACS_LINE: &str = "2021-07-01T10:00:00+00:00|reframe 3.11.0|StrongScalingBenchmark_16 on csd3:compute-node using default|jobid=2378|Rate=12.5|ns/day|ref=1 (l=null, u=null)|num_total_cores=16,num_omp_threads=4,num_nodes=1,ratio=0.5,gromacs";

#[test]
fn parses_imb_example() {
    let record = Record::parse_metric(IMB_LINE, "max_bandwidth").expect("Valid record");

    assert_eq!(record.metric, "max_bandwidth");
    assert_eq!(record.value, 3041.25);
    assert_eq!(record.units, "Mbytes/sec");
    assert_eq!(record.info, vec!["x".to_owned(), "IMB_Pingpong".to_owned()]);
    assert_eq!(record.reference.as_deref(), Some("x"));
    assert_eq!(record.tags, vec!["x".to_owned()]);
    assert_eq!(record.timestamp.to_rfc3339(), "2020-08-19T16:20:21+01:00");
}

#[test]
fn parses_context_fields() {
    let record = Record::parse(GROMACS_LINE).expect("Valid record");

    assert_eq!(record.metric, "Rate");
    assert_eq!(record.value, 12.5);
    assert_eq!(record.units, "ns/day");
    assert_eq!(record.job_id.as_deref(), Some("2378"));
    assert_eq!(record.num_total_cores(), Some(16));
    assert_eq!(record.num_omp_threads(), Some(4));
    assert_eq!(record.num_nodes(), Some(1));
    assert_eq!(record.context_value("ratio"), Some(&Value::Float(0.5)));
    assert_eq!(record.tags, vec!["gromacs".to_owned()]);
}

#[test]
fn skips_job_id_when_locating_metric() {
    let line = "2021-07-01T10:00:00|info|jobid=99|l_0=1e8|DOF/s|ref|";
    let record = Record::parse(line).expect("Valid record");

    assert_eq!(record.metric, "l_0");
    assert_eq!(record.value, 1e8);
    assert_eq!(record.job_id.as_deref(), Some("99"));
    assert!(record.context.is_empty());
}

#[test]
fn skips_non_numeric_assignments_before_metric() {
    let line = "2021-07-01T10:00:00+00:00|gromacs-benchmark|GROMACS_benchmark_gromacs@2021 build_type=Release ^fftw precision=float_8|jobid=7|Rate=10|ns/day|1 (l=null, u=null)|num_total_cores=8";
    let record = Record::parse_metric(line, "Rate").expect("Valid record");

    assert_eq!(record.value, 10.0);
    assert_eq!(record.units, "ns/day");
    assert_eq!(
        record.info[1],
        "GROMACS_benchmark_gromacs@2021 build_type=Release ^fftw precision=float_8"
    );
    assert_eq!(record.reference.as_deref(), Some("1 (l=null, u=null)"));
    assert_eq!(record.num_total_cores(), Some(8));
    assert_eq!(record.to_string(), line);
}

#[test]
fn reports_first_assignment_when_none_is_numeric() {
    let line = "2020-08-19T16:20:21+01:00|build_type=Release|Rate=fast|ns/day|x";
    let error = Record::parse(line).expect_err("Non-numeric value");

    assert!(matches!(
        error,
        Error::NonNumericValue { ref metric, ref raw } if metric == "build_type" && raw == "Release"
    ));
}

#[test]
fn accepts_naive_timestamp_as_utc() {
    let line = "2021-07-01 10:00:00|info|Rate=1|ns/day|tag";
    let record = Record::parse(line).expect("Valid record");

    assert_eq!(record.timestamp.offset().local_minus_utc(), 0);
    assert_eq!(record.unix_seconds(), 1_625_133_600.0);
}

#[test]
fn rejects_metric_mismatch() {
    let error = Record::parse_metric(IMB_LINE, "min_latency").expect_err("Wrong metric");

    assert!(matches!(
        error,
        Error::MetricMismatch { ref expected, ref found }
            if expected == "min_latency" && found == "max_bandwidth"
    ));
}

#[test]
fn rejects_missing_metric() {
    let error = Record::parse("2020-08-19T16:20:21+01:00|x|y|z").expect_err("No metric");

    assert!(matches!(error, Error::MetricNotFound { .. }));
}

#[test]
fn rejects_non_numeric_value() {
    let line = "2020-08-19T16:20:21+01:00|x|Rate=fast|ns/day|x";
    let error = Record::parse(line).expect_err("Non-numeric value");

    assert!(matches!(error, Error::NonNumericValue { ref raw, .. } if raw == "fast"));
}

#[test]
fn rejects_missing_units() {
    let line = "2020-08-19T16:20:21+01:00|x|Rate=1||x";
    let error = Record::parse(line).expect_err("No units");

    assert!(matches!(error, Error::MissingUnits { ref metric } if metric == "Rate"));
}

#[test]
fn rejects_invalid_timestamp() {
    let line = "yesterday|x|Rate=1|ns/day|x";
    let error = Record::parse(line).expect_err("Invalid timestamp");

    assert!(matches!(error, Error::Timestamp { ref raw, .. } if raw == "yesterday"));
}

#[test]
fn displays_parseable_line() {
    let record = Record::parse(GROMACS_LINE).expect("Valid record");
    let reparsed = Record::parse(record.to_string().as_str()).expect("Valid record");

    assert_eq!(record, reparsed);
}

//!
//! The output extraction tests.
//!

use super::gromacs;
use super::hpgmg;
use super::osu;
use super::time;
use super::wrf;
use super::Error;

const GROMACS_STDERR: [&str; 6] = [
    "               Core t (s)   Wall t (s)        (%)",
    "       Time:     1187.582       74.224     1600.0",
    "                 (ns/day)    (hour/ns)",
    "Performance:       23.287        1.031",
    "",
    "GROMACS reminds you: \"Uh-oh\" (Tinky Winky)",
];

#[test]
fn gromacs_performance() {
    assert_eq!(gromacs::performance(&GROMACS_STDERR), Some(23.287));
    assert!(gromacs::passed_sanity(&GROMACS_STDERR));
}

#[test]
fn gromacs_performance_needs_three_fields() {
    let stderr = [
        "Performance: not yet measured at all",
        "Performance:      5.5      4.3",
    ];
    assert_eq!(gromacs::performance(&stderr), Some(5.5));
}

#[test]
fn gromacs_performance_missing() {
    let stderr = ["Fatal error:", "Segmentation fault"];
    assert_eq!(gromacs::performance(&stderr), None);
    assert!(!gromacs::passed_sanity(&stderr));
}

#[test]
fn hpgmg_dofs_by_level() {
    let stdout = "\
HPGMG-FV Benchmark
  h=3.906250000000000e-03  DOF=1.677721600000000e+07  time=0.104963  DOF/s=1.598e+08  MPI=4  OMP=4
  h=7.812500000000000e-03  DOF=2.097152000000000e+06  time=0.025511  DOF/s=8.220e+07  MPI=4  OMP=4
  h=1.562500000000000e-02  DOF=2.621440000000000e+05  time=0.010005  DOF/s=2.620e+07  MPI=4  OMP=4
";
    assert_eq!(hpgmg::dofs(stdout), vec![1.598e8, 8.22e7, 2.62e7]);
}

#[test]
fn wrf_step_times() {
    let text = "\
Timing for main: time 2019-11-26_12:00:10 on domain   1:    2.58170 elapsed seconds
Timing for Writing wrfout_d01 for domain        1:    0.14712 elapsed seconds
Timing for main: time 2019-11-26_12:00:20 on domain   1:    0.62112 elapsed seconds
";
    assert_eq!(wrf::step_times(text), vec![2.5817, 0.62112]);
}

#[test]
fn time_parse() {
    assert_eq!(time::parse("0m0.000s").expect("Parsed"), 0.0);
    assert_eq!(time::parse("0m1.5s").expect("Parsed"), 1.5);
    assert_eq!(time::parse(" 2m3.25s\n").expect("Parsed"), 123.25);
}

#[test]
fn time_parse_rejects_missing_minutes() {
    assert!(matches!(time::parse("1.5s"), Err(Error::Time { .. })));
}

#[test]
fn osu_bandwidth_with_leading_blank_line() {
    let text = "
# OSU MPI Bandwidth Test v5.6.2
# Size      Bandwidth (MB/s)
1                       7.59
2                      14.52
";
    let table = osu::Table::parse(text).expect("Parsed");

    assert_eq!(table.test, "OSU MPI Bandwidth Test");
    assert_eq!(table.version, "5.6.2");
    assert_eq!(table.columns, vec!["Size", "Bandwidth (MB/s)"]);
    assert_eq!(table.rows, vec![vec![1.0, 7.59], vec![2.0, 14.52]]);
    assert_eq!(table.column("Bandwidth (MB/s)"), Some(vec![7.59, 14.52]));
}

#[test]
fn osu_message_rate_skips_noise_and_comments() {
    let text = "\
WARNING: release_mt library was used but no multi-ep feature was enabled. Please use release library instead.
# OSU MPI Multiple Bandwidth / Message Rate Test v5.6.2
# [ pairs: 1 ] [ window size: 64 ]
# Size                  MB/s        Messages/s
1                       7.79        7790845.03
2                      15.93        7962625.43
";
    let table: osu::Table = text.parse().expect("Parsed");

    assert_eq!(table.columns, vec!["Size", "MB/s", "Messages/s"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.column("Messages/s"), Some(vec![7790845.03, 7962625.43]));
    assert_eq!(table.column("Latency (us)"), None);
}

#[test]
fn osu_unknown_test() {
    let text = "# OSU MPI Broadcast Latency Test v5.6.2\n1 2.0\n";
    match osu::Table::parse(text) {
        Err(Error::OsuUnknownTest { title }) => {
            assert_eq!(title, "# OSU MPI Broadcast Latency Test")
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn osu_data_before_header() {
    assert!(matches!(
        osu::Table::parse("1 2.0\n"),
        Err(Error::OsuUnexpectedLine { .. })
    ));
}

#[test]
fn osu_malformed_row() {
    let text = "# OSU MPI Latency Test v5.6.2\n# Size Latency (us)\n1 2.0 3.0\n";
    assert!(matches!(
        osu::Table::parse(text),
        Err(Error::OsuRow {
            found: 3,
            expected: 2,
            ..
        })
    ));
}

#[test]
fn osu_empty_output() {
    assert!(matches!(
        osu::Table::parse("\n\n"),
        Err(Error::OsuHeaderMissing)
    ));
}

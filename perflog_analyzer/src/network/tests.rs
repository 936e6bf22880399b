//!
//! Tests for the network construction.
//!

use std::path::Path;

use super::config::Config;
use super::error::Error;
use super::name::Name;
use super::Link;
use super::Network;

fn create_tree(root: &Path, directories: &[&str]) {
    for directory in directories.iter() {
        std::fs::create_dir_all(root.join(directory)).expect("Created");
    }
}

fn link(source: &str, target: &str) -> Link {
    Link {
        source: source.to_owned(),
        target: target.to_owned(),
    }
}

#[test]
fn links_from_perflog_tree() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    create_tree(
        directory.path(),
        &[
            "alaska/gcc9-openmpi4/imb",
            "alaska/gcc9-impi/StrongScaling_gromacs_16",
            "csd3/intel-impi/imb",
        ],
    );

    let mut network = Network::new(Config::default());
    network.build(directory.path()).expect("Valid tree");

    assert_eq!(
        network.links.iter().cloned().collect::<Vec<Link>>(),
        vec![
            link("alaska", "gcc9"),
            link("alaska", "gromacs"),
            link("alaska", "imb"),
            link("alaska", "impi"),
            link("alaska", "ompi"),
            link("csd3", "imb"),
            link("csd3", "impi"),
        ]
    );

    let degree = |id: &str| {
        network
            .nodes
            .iter()
            .find(|node| node.id == id)
            .map(|node| node.degree)
            .expect("Node exists")
    };
    assert_eq!(degree("alaska"), 5);
    assert_eq!(degree("impi"), 2);
    assert_eq!(degree("clusters"), 0);
}

#[test]
fn node_link_json() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    create_tree(directory.path(), &["alaska/gcc9", "csd3/gcc9"]);

    let mut network = Network::new(Config::default());
    network.build(directory.path()).expect("Valid tree");
    let path = directory.path().join("assets/network.json");
    network.save_json(path.as_path()).expect("Saved");

    let json: serde_json::Value =
        serde_json::from_str(std::fs::read_to_string(path).expect("Written").as_str())
            .expect("Valid JSON");
    assert_eq!(json["directed"], false);
    assert_eq!(json["multigraph"], false);
    assert_eq!(json["nodes"][0]["id"], "clusters");
    assert_eq!(json["nodes"][0]["type"], "major");
    assert!(json["nodes"][0].get("aliases").is_none());
    assert_eq!(json["nodes"][1]["id"], "alaska");
    assert_eq!(json["nodes"][1]["type"], "minor");
    assert_eq!(json["nodes"][1]["aliases"][0], "alaska");
    assert_eq!(json["links"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["links"][0]["source"], "alaska");
    assert_eq!(json["links"][0]["target"], "gcc9");
}

#[test]
fn missing_cluster_directory() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    create_tree(directory.path(), &["alaska/gcc9"]);

    let mut network = Network::new(Config::default());
    let error = network.build(directory.path()).expect_err("csd3 is missing");

    assert!(matches!(error, Error::ClusterDirectoryMissing { ref cluster, .. } if cluster == "csd3"));
}

#[test]
fn config_accepts_plain_and_aliased_names() {
    let config: Config = crate::config::parse_cjson(
        r#"
# The clusters benchmarked so far.
{
    "clusters": ["alaska"],
    "apps": ["gromacs"],
    "compilers": [],
    "mpi": [{ "name": "ompi", "aliases": ["openmpi", "omp"] }]
}
"#,
    )
    .expect("Valid config");

    assert_eq!(config.clusters, vec![Name::new("alaska")]);
    assert_eq!(
        config.mpi,
        vec![Name::with_aliases("ompi", &["openmpi", "omp"])]
    );
    assert_eq!(config.categories()[3].0, "mpi");
    assert_eq!(
        Config::default().mpi[1].aliases,
        vec!["openmpi".to_owned(), "omp".to_owned()]
    );
}

//!
//! The cluster, application, compiler, and MPI network shown on the documentation site.
//!

pub mod config;
pub mod error;
pub mod name;

use std::collections::BTreeSet;
use std::path::Path;

use self::config::Config;
use self::error::Error;
use self::name::Name;

///
/// The node type.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A category node.
    Major,
    /// A category member node.
    Minor,
}

///
/// A network node in the D3 node-link layout.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Node {
    /// The node identifier.
    pub id: String,
    /// The node type.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// The aliases of member nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<String>>,
    /// The number of links touching the node.
    pub degree: usize,
}

///
/// An undirected link.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Link {
    /// The cluster node.
    pub source: String,
    /// The connected member node.
    pub target: String,
}

///
/// The network.
///
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// The categories and members.
    pub config: Config,
    /// The nodes in insertion order.
    pub nodes: Vec<Node>,
    /// The links.
    pub links: BTreeSet<Link>,
}

impl Network {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config) -> Self {
        Self {
            config,
            nodes: vec![],
            links: BTreeSet::new(),
        }
    }

    ///
    /// Adds the nodes and the links found in the perflog tree.
    ///
    pub fn build(&mut self, perflogs_root: &Path) -> Result<(), Error> {
        self.add_nodes();
        self.add_links(perflogs_root)?;
        self.add_degrees();
        tracing::info!(
            nodes = self.nodes.len(),
            links = self.links.len(),
            "Built the network"
        );
        Ok(())
    }

    ///
    /// Returns the D3 node-link JSON.
    ///
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "directed": false,
            "multigraph": false,
            "graph": {},
            "nodes": self.nodes,
            "links": self.links,
        })
    }

    ///
    /// Writes the D3 node-link JSON.
    ///
    pub fn save_json(&self, path: &Path) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&self.to_json()).expect("Always valid");
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| Error::Writing {
                error,
                path: path.to_path_buf(),
            })?;
        }
        std::fs::write(path, json).map_err(|error| Error::Writing {
            error,
            path: path.to_path_buf(),
        })
    }

    ///
    /// Adds a major node per category and a minor node per member.
    ///
    fn add_nodes(&mut self) {
        let mut nodes = Vec::new();
        for (category, members) in self.config.categories() {
            nodes.push(Node {
                id: category.to_owned(),
                kind: NodeKind::Major,
                aliases: None,
                degree: 0,
            });
            nodes.extend(members.iter().map(|member| Node {
                id: member.name.clone(),
                kind: NodeKind::Minor,
                aliases: Some(member.aliases.clone()),
                degree: 0,
            }));
        }
        for node in nodes.into_iter() {
            match self.nodes.iter_mut().find(|existing| existing.id == node.id) {
                Some(existing) => *existing = node,
                None => self.nodes.push(node),
            }
        }
    }

    ///
    /// Links every cluster to the compilers and MPI implementations found in the names of its
    /// immediate sub-directories, and to the applications found in the names of the directories
    /// beneath it.
    ///
    fn add_links(&mut self, perflogs_root: &Path) -> Result<(), Error> {
        let mut links = BTreeSet::new();
        for cluster in self.config.clusters.iter() {
            let directory = perflogs_root.join(cluster.name.as_str());
            if !directory.is_dir() {
                return Err(Error::ClusterDirectoryMissing {
                    cluster: cluster.name.clone(),
                    path: directory,
                });
            }

            let environments = Self::directory_names(directory.as_path())?.join(".");
            for member in self.config.compilers.iter().chain(self.config.mpi.iter()) {
                if member.occurs_in(environments.as_str()) {
                    links.insert(Self::link(cluster, member));
                }
            }

            let tests = Self::descendant_names(directory.as_path()).join(".");
            for app in self.config.apps.iter() {
                if app.occurs_in(tests.as_str()) {
                    links.insert(Self::link(cluster, app));
                }
            }
        }
        self.links.extend(links);
        Ok(())
    }

    ///
    /// Sets the degree of every node.
    ///
    fn add_degrees(&mut self) {
        for node in self.nodes.iter_mut() {
            node.degree = self
                .links
                .iter()
                .filter(|link| link.source == node.id || link.target == node.id)
                .count();
        }
    }

    ///
    /// Returns the sorted names of the immediate sub-directories of `root`.
    ///
    fn directory_names(root: &Path) -> Result<Vec<String>, Error> {
        let map_error = |error| Error::Reading {
            error,
            path: root.to_path_buf(),
        };
        let mut names = Vec::new();
        for entry in std::fs::read_dir(root).map_err(map_error)? {
            let path = entry.map_err(map_error)?.path();
            if path.is_dir() {
                names.extend(path.file_name().map(|name| name.to_string_lossy().into_owned()));
            }
        }
        names.sort();
        Ok(names)
    }

    ///
    /// Returns the sorted names of all directories beneath `root`.
    ///
    fn descendant_names(root: &Path) -> Vec<String> {
        let pattern = format!(
            "{}/**/*",
            glob::Pattern::escape(root.to_string_lossy().as_ref())
        );
        let mut names: Vec<String> = glob::glob(pattern.as_str())
            .into_iter()
            .flatten()
            .filter_map(Result::ok)
            .filter(|path| path.is_dir())
            .filter_map(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    ///
    /// A link from a cluster to a member.
    ///
    fn link(cluster: &Name, member: &Name) -> Link {
        Link {
            source: cluster.name.clone(),
            target: member.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests;

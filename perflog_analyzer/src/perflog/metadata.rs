//!
//! Run metadata encoded in a perflog path.
//!

use std::path::Path;

///
/// Run metadata encoded in a perflog path.
///
/// The perflog prefix is `<system>/<partition>/<environment>/<test>/<file>`, so the
/// last five path components identify the run. Shorter paths fill the fields from the right.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Metadata {
    /// The system name, e.g. `csd3`.
    pub system: Option<String>,
    /// The system partition, e.g. `compute-node`.
    pub partition: Option<String>,
    /// The programming environment.
    pub environment: Option<String>,
    /// The test name.
    pub test: Option<String>,
    /// The file name.
    pub file: Option<String>,
}

impl Metadata {
    /// The number of trailing path components carrying metadata.
    const COMPONENTS: usize = 5;

    ///
    /// Returns the `system:partition` case identifier.
    ///
    pub fn case(&self) -> String {
        format!(
            "{}:{}",
            self.system.as_deref().unwrap_or("unknown"),
            self.partition.as_deref().unwrap_or("unknown")
        )
    }
}

impl From<&Path> for Metadata {
    fn from(path: &Path) -> Self {
        let components: Vec<String> = path
            .components()
            .filter_map(|component| match component {
                std::path::Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        let mut fields: Vec<Option<String>> = components
            .into_iter()
            .rev()
            .take(Self::COMPONENTS)
            .map(Some)
            .collect();
        fields.resize(Self::COMPONENTS, None);

        let mut fields = fields.into_iter();
        let file = fields.next().flatten();
        let test = fields.next().flatten();
        let environment = fields.next().flatten();
        let partition = fields.next().flatten();
        let system = fields.next().flatten();

        Self {
            system,
            partition,
            environment,
            test,
            file,
        }
    }
}

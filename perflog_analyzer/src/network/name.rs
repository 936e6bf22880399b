//!
//! Network node name with aliases.
//!

///
/// A configured name with the aliases it is recognized by in directory names.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(from = "Entry")]
pub struct Name {
    /// The node name.
    pub name: String,
    /// The aliases, including the name itself for plain entries.
    pub aliases: Vec<String>,
}

impl Name {
    ///
    /// A plain name that is its own alias.
    ///
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            aliases: vec![name.to_owned()],
        }
    }

    ///
    /// A name with explicit aliases.
    ///
    pub fn with_aliases(name: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            aliases: aliases.iter().map(|alias| (*alias).to_owned()).collect(),
        }
    }

    ///
    /// Whether any alias occurs in `text`.
    ///
    pub fn occurs_in(&self, text: &str) -> bool {
        self.aliases.iter().any(|alias| text.contains(alias.as_str()))
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

///
/// The configuration representation: a plain name or a name with aliases.
///
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum Entry {
    Plain(String),
    Aliased { name: String, aliases: Vec<String> },
}

impl From<Entry> for Name {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Plain(name) => Self::new(name.as_str()),
            Entry::Aliased { name, aliases } => Self { name, aliases },
        }
    }
}

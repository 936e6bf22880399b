//!
//! HTML page generated from a template.
//!

pub mod error;

use std::path::Path;
use std::path::PathBuf;

use self::error::Error;

///
/// HTML page generated from a template.
///
/// The page lives at the template path without its first component, under the output root,
/// e.g. `_templates/index.html` is rendered into `<root>/index.html`. Edits apply to the
/// rendered page once it exists, so successive injections accumulate.
///
#[derive(Debug, Clone)]
pub struct HtmlFile {
    /// The template path.
    pub template: PathBuf,
    /// The rendered page path.
    pub output: PathBuf,
}

impl HtmlFile {
    /// The end of body marker.
    pub const BODY_END: &'static str = "</body>";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(template: &Path, output_root: &Path) -> Result<Self, Error> {
        if !template.exists() {
            return Err(Error::TemplateMissing {
                path: template.to_path_buf(),
            });
        }
        Ok(Self {
            template: template.to_path_buf(),
            output: Self::output_path(template, output_root),
        })
    }

    ///
    /// The rendered page path: the template path without its first component, under `output_root`.
    ///
    pub fn output_path(template: &Path, output_root: &Path) -> PathBuf {
        let relative: PathBuf = template
            .components()
            .filter(|component| matches!(component, std::path::Component::Normal(_)))
            .skip(1)
            .collect();
        if relative.as_os_str().is_empty() {
            return output_root.join(template.file_name().unwrap_or_default());
        }
        output_root.join(relative)
    }

    ///
    /// Inserts `text` as a separate line right before the first `</body>` line.
    ///
    pub fn add_before_end_body(&self, text: &str) -> Result<(), Error> {
        let mut lines = self.current_lines()?;
        let position = lines
            .iter()
            .position(|line| line.contains(Self::BODY_END))
            .ok_or_else(|| Error::BodyEndNotFound {
                path: self.current_path().to_path_buf(),
            })?;
        lines.insert(position, Self::as_line(text));
        self.write(lines)
    }

    ///
    /// Replaces every line consisting only of the numbered anchor `index` with `text`.
    ///
    pub fn replace(&self, index: usize, text: &str) -> Result<(), Error> {
        let anchor = index.to_string();
        let mut is_found = false;
        let lines = self
            .current_lines()?
            .into_iter()
            .map(|line| {
                if line.trim() == anchor {
                    is_found = true;
                    Self::as_line(text)
                } else {
                    line
                }
            })
            .collect::<Vec<String>>();
        if !is_found {
            return Err(Error::AnchorNotFound {
                index,
                template: self.template.clone(),
            });
        }
        self.write(lines)
    }

    ///
    /// The page edits start from: the rendered page if present, otherwise the template.
    ///
    fn current_path(&self) -> &Path {
        if self.output.exists() {
            self.output.as_path()
        } else {
            self.template.as_path()
        }
    }

    ///
    /// Reads the current lines with their terminators.
    ///
    fn current_lines(&self) -> Result<Vec<String>, Error> {
        let path = self.current_path();
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        Ok(text.split_inclusive('\n').map(str::to_owned).collect())
    }

    ///
    /// Writes the rendered page.
    ///
    fn write(&self, lines: Vec<String>) -> Result<(), Error> {
        let map_error = |error| Error::Writing {
            error,
            path: self.output.clone(),
        };
        if let Some(parent) = self.output.parent() {
            std::fs::create_dir_all(parent).map_err(map_error)?;
        }
        std::fs::write(self.output.as_path(), lines.concat()).map_err(map_error)
    }

    ///
    /// Terminates `text` with a newline unless it already is.
    ///
    fn as_line(text: &str) -> String {
        if text.ends_with('\n') {
            text.to_owned()
        } else {
            format!("{text}\n")
        }
    }
}

//!
//! Vega-Lite plots embedded into HTML pages.
//!

pub mod bar;
pub mod error;
pub mod kind;
pub mod strong_scaling;
pub mod time_series;

///
/// The HTML fragments of a plot.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// The script rendering the chart, placed before the end of the body.
    pub script: String,
    /// The chart container, placed at the plot anchor.
    pub div: String,
}

///
/// A plot rendered in the browser by `vega-embed`.
///
pub trait Plot {
    ///
    /// The HTML element identifier.
    ///
    fn id(&self) -> &str;

    ///
    /// The Vega-Lite chart specification without the shared style.
    ///
    fn chart(&self) -> serde_json::Value;

    ///
    /// The full Vega-Lite specification with the shared style applied.
    ///
    fn specification(&self) -> serde_json::Value {
        let mut specification = self.chart();
        apply_default_style(&mut specification);
        specification
    }

    ///
    /// The script and div fragments.
    ///
    fn components(&self) -> Components {
        let id = self.id();
        let specification = self
            .specification()
            .to_string()
            .replace(SCRIPT_CLOSE_PREFIX, ESCAPED_SCRIPT_CLOSE_PREFIX);
        Components {
            script: format!(
                r##"<script type="text/javascript">vegaEmbed("#{id}", {specification});</script>"##
            ),
            div: format!(r#"<div id="{id}" class="perflog-plot"></div>"#),
        }
    }
}

/// Ends a `<script>` block early if left unescaped in the embedded JSON.
const SCRIPT_CLOSE_PREFIX: &str = "</";

/// The JSON string escape of [`SCRIPT_CLOSE_PREFIX`].
const ESCAPED_SCRIPT_CLOSE_PREFIX: &str = r"<\/";

/// The Vega-Lite schema.
pub const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// The default chart width in pixels.
pub const WIDTH: u32 = 500;

/// The default chart height in pixels.
pub const HEIGHT: u32 = 500;

///
/// Applies the style shared by all plots.
///
pub fn apply_default_style(specification: &mut serde_json::Value) {
    let Some(object) = specification.as_object_mut() else {
        return;
    };
    object.insert("$schema".to_owned(), serde_json::json!(SCHEMA));
    object
        .entry("width")
        .or_insert_with(|| serde_json::json!(WIDTH));
    object
        .entry("height")
        .or_insert_with(|| serde_json::json!(HEIGHT));
    object.insert(
        "config".to_owned(),
        serde_json::json!({
            "title": { "fontSize": 20 },
            "axis": {
                "labelFontSize": 14,
                "titleFontSize": 14,
                "gridColor": "white",
                "domain": false,
                "tickMinorCount": 0,
            },
            "view": { "fill": "#f5f5f5", "stroke": null },
        }),
    );
}

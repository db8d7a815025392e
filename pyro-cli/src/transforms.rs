//! CLI output formats
//!
//! Each format pairs a pipeline stage with a rendering: `rows` stops after the
//! tokenizer, everything else renders the fully post-processed document.

use pyro_parser::robot::formats::{to_keywords_str, to_outline_str, to_rows_str, to_segments_str};
use pyro_parser::robot::loader::DocumentLoader;
use pyro_parser::robot::model::Document;

/// All formats accepted by `--format`
pub const AVAILABLE_FORMATS: &[&str] = &["rows", "segments", "outline", "keywords", "json", "yaml"];

pub const DEFAULT_FORMAT: &str = "segments";

/// Options the rendering takes from configuration
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub pretty_json: bool,
}

/// Render the loaded file in `format`.
pub fn execute_format(
    loader: &DocumentLoader,
    format: &str,
    options: RenderOptions,
) -> Result<String, String> {
    if format == "rows" {
        let rows = loader
            .tokenize()
            .map_err(|e| format!("Transform failed: {}", e))?;
        return Ok(to_rows_str(&rows));
    }
    let render: fn(&Document, RenderOptions) -> Result<String, String> = match format {
        "segments" => |doc, _| Ok(to_segments_str(doc)),
        "outline" => |doc, _| Ok(to_outline_str(doc)),
        "keywords" => |doc, _| Ok(to_keywords_str(doc)),
        "json" => |doc, options| to_json(doc, options.pretty_json),
        "yaml" => |doc, _| {
            serde_yaml::to_string(doc).map_err(|e| format!("YAML serialization failed: {}", e))
        },
        _ => {
            return Err(format!(
                "Unknown format '{}'. Available formats: {}",
                format,
                AVAILABLE_FORMATS.join(", ")
            ))
        }
    };

    let doc = loader
        .parse()
        .map_err(|e| format!("Transform failed: {}", e))?;
    render(&doc, options)
}

fn to_json(doc: &Document, pretty: bool) -> Result<String, String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    };
    rendered
        .map(|mut json| {
            json.push('\n');
            json
        })
        .map_err(|e| format!("JSON serialization failed: {}", e))
}

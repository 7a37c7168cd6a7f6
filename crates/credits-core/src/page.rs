//! Credits page rendering
//!
//! The page hosts the `#container` element the scroller measures and
//! animates, one section per non-empty roster category, and the module
//! script that boots the scroller bundle.

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;
use crate::roster::{CreditCategory, RosterSnapshot};
use crate::scroll::{format_percent, ScrollVariant, START_OFFSET_PERCENT};
use crate::viewport::CONTAINER_ID;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>{style | unescaped}</style>
</head>
<body>
<div id="{container_id}" data-variant="{variant}">
{{ if has_sections }}{{ for section in sections }}<section class="credits-{section.key}">
<h2>{section.title}</h2>
{{ for name in section.names }}<p class="name">{name}</p>
{{ endfor }}</section>
{{ endfor }}{{ else }}<p class="name">{placeholder}</p>
{{ endif }}</div>
<script type="module">import init from "{script_path | unescaped}"; init();</script>
</body>
</html>
"#;

/// Options for rendering the credits page
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Document title
    pub title: String,
    /// URL of the scroller bundle's JS entry point
    pub script_path: String,
    /// Line shown when no names have been credited yet
    pub placeholder: String,
    /// Scroll variant the browser bundle should use
    pub variant: ScrollVariant,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Credits".to_string(),
            script_path: "/pkg/credits_wasm.js".to_string(),
            placeholder: "Thanks for watching!".to_string(),
            variant: ScrollVariant::default(),
        }
    }
}

#[derive(Serialize)]
struct Section<'a> {
    key: &'static str,
    title: &'static str,
    names: &'a [String],
}

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    style: String,
    container_id: &'static str,
    variant: &'static str,
    has_sections: bool,
    sections: Vec<Section<'a>>,
    placeholder: &'a str,
    script_path: &'a str,
}

/// Render the full credits page for a roster snapshot
pub fn render_credits_page(snapshot: &RosterSnapshot, options: &PageOptions) -> Result<String> {
    let sections: Vec<Section<'_>> = CreditCategory::ALL
        .iter()
        .filter_map(|category| {
            snapshot.get(*category).map(|names| Section {
                key: category.as_str(),
                title: category.title(),
                names,
            })
        })
        .collect();

    let context = PageContext {
        title: &options.title,
        style: page_style(),
        container_id: CONTAINER_ID,
        variant: options.variant.as_str(),
        has_sections: !sections.is_empty(),
        sections,
        placeholder: &options.placeholder,
        script_path: &options.script_path,
    };

    let mut tt = TinyTemplate::new();
    tt.add_template("credits", PAGE_TEMPLATE)?;

    Ok(tt.render("credits", &context)?)
}

// Built in code: braces in a tinytemplate body open template expressions.
fn page_style() -> String {
    format!(
        "html, body {{ margin: 0; height: 100%; overflow: hidden; background: transparent; }}\n\
         #{id} {{ position: absolute; top: {top}; width: 100%; text-align: center; \
         color: #fff; font-family: sans-serif; }}\n\
         #{id} h2 {{ margin: 2em 0 0.5em; }}\n\
         #{id} .name {{ margin: 0.25em 0; }}",
        id = CONTAINER_ID,
        top = format_percent(START_OFFSET_PERCENT),
    )
}

//! Portfolio export renderers. All output is a pure function of the record.

mod html;
mod markdown;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Portfolio;

pub use html::{render_html, render_print_html};
pub use markdown::render_markdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Markdown,
    Json,
    Html,
    Print,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
            Self::Html | Self::Print => "html",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown; charset=utf-8",
            Self::Json => "application/json",
            Self::Html | Self::Print => "text/html; charset=utf-8",
        }
    }

    /// `portfolio-<slug>.<ext>`
    pub fn file_name(&self, portfolio: &Portfolio) -> String {
        format!("portfolio-{}.{}", portfolio.slug(), self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "html" => Ok(Self::Html),
            "print" | "pdf" => Ok(Self::Print),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// Pretty JSON with two-space indentation.
pub fn render_json(portfolio: &Portfolio) -> Result<String> {
    Ok(serde_json::to_string_pretty(portfolio)?)
}

pub fn render(format: ExportFormat, portfolio: &Portfolio) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(render_markdown(portfolio)),
        ExportFormat::Json => render_json(portfolio),
        ExportFormat::Html => Ok(render_html(portfolio)),
        ExportFormat::Print => Ok(render_print_html(portfolio)),
    }
}

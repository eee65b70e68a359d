//! Renderers turning a [`CertificateRecord`](crate::certificate::CertificateRecord)
//! into something to look at.

mod details;
mod html;
pub mod shapes;
pub mod svg;
pub mod template;

pub use details::CertificateDetails;
pub use html::render_html;
pub use svg::{render_svg, RenderOptions};
pub use template::{CategoryCode, TemplateVariant};

use std::fmt;
use std::str::FromStr;

use crate::certificate::CertificateRecord;
use crate::ApiError;

/// Document formats of the visual certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Svg,
    Html,
}

impl RenderFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Svg => "svg",
            RenderFormat::Html => "html",
        }
    }

    pub fn render(&self, record: &CertificateRecord, options: &RenderOptions) -> String {
        match self {
            RenderFormat::Svg => render_svg(record, options),
            RenderFormat::Html => render_html(record, options),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for RenderFormat {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(RenderFormat::Svg),
            "html" | "htm" => Ok(RenderFormat::Html),
            other => Err(ApiError::message(format!(
                "unknown certificate format `{other}`, expected `svg` or `html`"
            ))),
        }
    }
}

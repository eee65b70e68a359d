//! The visual certificate, rendered as a standalone SVG document.

use crate::certificate::{CertificateRecord, Signatory};
use crate::render::template::TemplateVariant;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 570;

const CENTER_X: u32 = WIDTH / 2;
const PRIMARY_COLOR: &str = "#1a2a3a";
const TEXT_COLOR: &str = "#222233";
const MUTED_COLOR: &str = "#4b5563";
const SEAL_FILL: &str = "#FFD700";
const SEAL_STROKE: &str = "#FBBF24";

const DESCRIPTION_TOP: u32 = 300;
const DESCRIPTION_LINE_HEIGHT: u32 = 16;
const DESCRIPTION_MAX_CHARS: usize = 90;
const DESCRIPTION_MAX_LINES: usize = 3;

/// Horizontal centers of the signatory columns
const SIGNATORY_COLUMNS: [u32; 2] = [150, 650];
const SIGNATURE_WIDTH: u32 = 128;
const SIGNATURE_HEIGHT: u32 = 30;
const SIGNATURE_RULE_Y: u32 = 410;

/// Options which are not part of the certificate record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Image reference for the logo drawn above the title
    pub logo_href: Option<String>,
}

/// Render the certificate with the variant selected by its category code.
pub fn render_svg(record: &CertificateRecord, options: &RenderOptions) -> String {
    let variant = TemplateVariant::select(record.category_code());
    render_svg_with_variant(record, &variant, options)
}

/// Render the certificate with an explicit variant.
///
/// The category code and name of the record are not part of the output.
pub fn render_svg_with_variant(
    record: &CertificateRecord,
    variant: &TemplateVariant,
    options: &RenderOptions,
) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" font-family=\"Georgia, 'Times New Roman', serif\">"
    ));
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{WIDTH}\" height=\"{HEIGHT}\" rx=\"12\" fill=\"#ffffff\" stroke=\"#e5e7eb\" stroke-width=\"8\"/>"
    ));

    for layer in variant
        .top_bar
        .layers()
        .iter()
        .chain(variant.bottom_bar.layers().iter())
    {
        svg.push_str(&layer.to_svg(PRIMARY_COLOR, variant.accent));
    }

    if let Some(logo) = options.logo_href.as_deref().filter(|l| !l.trim().is_empty()) {
        svg.push_str(&format!(
            "<image href=\"{}\" x=\"{}\" y=\"92\" width=\"56\" height=\"56\" preserveAspectRatio=\"xMidYMid meet\"/>",
            xml_escape(logo),
            CENTER_X - 28
        ));
    }

    svg.push_str(&text(
        CENTER_X,
        184,
        "font-size=\"40\" font-weight=\"800\" letter-spacing=\"6\"",
        TEXT_COLOR,
        "CERTIFICATE",
    ));
    svg.push_str(&text(
        CENTER_X,
        210,
        "font-size=\"16\" font-weight=\"600\" letter-spacing=\"2\"",
        TEXT_COLOR,
        &variant.subtitle.to_uppercase(),
    ));
    svg.push_str(&text(
        CENTER_X,
        236,
        "font-size=\"13\"",
        TEXT_COLOR,
        "This certificate is proudly presented to",
    ));
    svg.push_str(&text(
        CENTER_X,
        274,
        "font-size=\"28\" font-family=\"'Brush Script MT', cursive\"",
        "#000000",
        &record.name,
    ));

    let description = wrap_text(
        record.description(),
        DESCRIPTION_MAX_CHARS,
        DESCRIPTION_MAX_LINES,
    );
    for (i, line) in description.iter().enumerate() {
        svg.push_str(&text(
            CENTER_X,
            DESCRIPTION_TOP + i as u32 * DESCRIPTION_LINE_HEIGHT,
            "font-size=\"13\"",
            TEXT_COLOR,
            line,
        ));
    }
    let course_y = DESCRIPTION_TOP + description.len() as u32 * DESCRIPTION_LINE_HEIGHT + 4;
    svg.push_str(&text(
        CENTER_X,
        course_y,
        "font-size=\"15\" font-weight=\"700\"",
        TEXT_COLOR,
        &record.course,
    ));
    svg.push_str(&text(
        CENTER_X,
        course_y + 17,
        "font-size=\"12\" font-style=\"italic\"",
        MUTED_COLOR,
        &format!("Issued by {}", record.issuer),
    ));

    for (signatory, column) in record.signatories().iter().zip(SIGNATORY_COLUMNS) {
        svg.push_str(&signatory_column(signatory, column));
    }

    svg.push_str(&seal());
    svg.push_str(&text(
        CENTER_X,
        442,
        "font-size=\"11\"",
        MUTED_COLOR,
        &record.issue_date().to_string(),
    ));
    svg.push_str(&text(
        CENTER_X,
        458,
        "font-size=\"10\" font-family=\"monospace\"",
        MUTED_COLOR,
        &format!("Credential ID: {}", record.credential_id),
    ));

    svg.push_str("</svg>");
    svg
}

fn signatory_column(signatory: &Signatory, x: u32) -> String {
    let mut column = String::new();
    if let Some(signature) = &signatory.signature {
        column.push_str(&format!(
            "<image href=\"{}\" x=\"{}\" y=\"{}\" width=\"{SIGNATURE_WIDTH}\" height=\"{SIGNATURE_HEIGHT}\" preserveAspectRatio=\"xMidYMid meet\"/>",
            xml_escape(signature),
            x - SIGNATURE_WIDTH / 2,
            SIGNATURE_RULE_Y - SIGNATURE_HEIGHT - 4
        ));
    }
    column.push_str(&format!(
        "<line x1=\"{}\" y1=\"{SIGNATURE_RULE_Y}\" x2=\"{}\" y2=\"{SIGNATURE_RULE_Y}\" stroke=\"#000000\" stroke-width=\"1\"/>",
        x - SIGNATURE_WIDTH / 2,
        x + SIGNATURE_WIDTH / 2
    ));
    column.push_str(&text(
        x,
        SIGNATURE_RULE_Y + 16,
        "font-size=\"14\" font-weight=\"600\"",
        "#000000",
        &signatory.name,
    ));
    if !signatory.role.is_empty() {
        column.push_str(&text(
            x,
            SIGNATURE_RULE_Y + 31,
            "font-size=\"12\" font-style=\"italic\"",
            MUTED_COLOR,
            &signatory.role,
        ));
    }
    column
}

fn seal() -> String {
    format!(
        "<circle cx=\"{CENTER_X}\" cy=\"400\" r=\"20\" fill=\"{SEAL_FILL}\" stroke=\"{SEAL_STROKE}\" stroke-width=\"4\"/><polygon points=\"400,416 405,424 400,420 395,424\" fill=\"{SEAL_STROKE}\"/>"
    )
}

fn text(x: u32, y: u32, attributes: &str, color: &str, content: &str) -> String {
    format!(
        "<text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" fill=\"{color}\" {attributes}>{}</text>",
        xml_escape(content)
    )
}

/// Greedy word wrap on character counts.
///
/// Words longer than `max_chars` get a line of their own. When the text needs
/// more than `max_lines` lines the last kept line ends with an ellipsis.
pub(crate) fn wrap_text(text: &str, max_chars: usize, max_lines: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if max_lines > 0 && lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

pub(crate) fn xml_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

use crate::certificate::CertificateRecord;
use crate::render::svg::{render_svg, xml_escape, RenderOptions};

const STYLE: &str = "body{margin:0;min-height:100vh;display:flex;align-items:center;justify-content:center;background:#ffffff}\
main{box-shadow:0 25px 50px -12px rgba(0,0,0,.25);border-radius:12px;overflow:hidden;max-width:100%}\
svg{display:block;max-width:100%;height:auto}";

/// A standalone HTML page showing the SVG certificate.
pub fn render_html(record: &CertificateRecord, options: &RenderOptions) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>Certificate {} - {}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        xml_escape(&record.credential_id),
        xml_escape(&record.name),
        render_svg(record, options)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn page_is_titled_after_the_certificate() {
        let html = render_html(&record(), &RenderOptions::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Certificate SLIIT-MOZ-2024-0042 - Nimali Fernando</title>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}

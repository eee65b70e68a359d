use std::path::PathBuf;

use certify_api::colors::color_primary;
use certify_api::{fmt_log, fmt_ok};
use certify_api::render::{RenderFormat, RenderOptions};
use clap::Args;
use colorful::Colorful;
use serde::Serialize;

use crate::lookup::{fetch_certificate, CredentialIdArg};
use crate::util::async_cmd;
use crate::{CommandGlobalOpts, Result};

/// Render a certificate as an SVG image or an HTML page
#[derive(Clone, Debug, Args)]
pub struct RenderCommand {
    #[command(flatten)]
    credential_id: CredentialIdArg,

    /// Document format: svg or html
    #[arg(long, short, value_name = "FORMAT", default_value_t = RenderFormat::Svg)]
    format: RenderFormat,

    /// File the certificate is written to. Printed to stdout when omitted
    #[arg(long, short, value_name = "PATH")]
    out: Option<PathBuf>,

    /// Address of a logo image (URL or data URI) centered above the title
    #[arg(long, value_name = "HREF")]
    logo: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderedCertificate {
    credential_id: String,
    format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<String>,
}

impl RenderCommand {
    pub fn run(self, opts: CommandGlobalOpts) -> Result<()> {
        async_cmd(&self.name(), || async move { self.async_run(opts).await })
    }

    pub fn name(&self) -> String {
        "render certificate".into()
    }

    async fn async_run(&self, opts: CommandGlobalOpts) -> Result<()> {
        let credential_id = self.credential_id.resolve(&opts)?;
        let record = fetch_certificate(&opts, &credential_id).await?;
        let options = RenderOptions {
            logo_href: self.logo.clone(),
        };
        let document = self.format.render(&record, &options);

        let output = opts.terminal.clone().stdout();
        match &self.out {
            Some(path) => {
                opts.terminal.write_line(&fmt_log!(
                    "Writing the {} certificate to {}",
                    self.format,
                    path.display()
                ))?;
                std::fs::write(path, &document)?;
                info!(path = %path.display(), format = %self.format, "Certificate written");
                let json = opts.terminal.output_format().json(&RenderedCertificate {
                    credential_id: record.credential_id.clone(),
                    format: self.format.to_string(),
                    path: Some(path.clone()),
                    document: None,
                })?;
                output
                    .plain(fmt_ok!(
                        "Certificate {} written to {}",
                        color_primary(&record.credential_id),
                        color_primary(path.display())
                    ))
                    .machine(path.display())
                    .json(json)
                    .write_line()
            }
            None => {
                let json = opts.terminal.output_format().json(&RenderedCertificate {
                    credential_id: record.credential_id.clone(),
                    format: self.format.to_string(),
                    path: None,
                    document: Some(document.clone()),
                })?;
                output
                    .plain(&document)
                    .machine(&document)
                    .json(json)
                    .write_line()
            }
        }
    }
}

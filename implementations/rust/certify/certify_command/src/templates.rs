use certify_api::colors::color_primary;
use certify_api::fmt_list;
use certify_api::render::{CategoryCode, TemplateVariant};
use clap::Args;
use colorful::Colorful;
use serde::Serialize;

use crate::{CommandGlobalOpts, Result};

/// List the certificate templates selected by each category code.
/// Records with an unknown or missing category code use the `default` template.
#[derive(Clone, Debug, Args)]
pub struct TemplatesCommand {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TemplateEntry {
    code: CategoryCode,
    #[serde(flatten)]
    variant: TemplateVariant,
}

impl TemplatesCommand {
    pub fn run(self, opts: CommandGlobalOpts) -> Result<()> {
        let entries: Vec<TemplateEntry> = CategoryCode::ALL
            .into_iter()
            .map(|code| TemplateEntry {
                code,
                variant: code.variant(),
            })
            .collect();

        let plain = entries
            .iter()
            .map(|entry| {
                fmt_list!(
                    "{} top: {:<8} bottom: {:<8} Certificate {}",
                    color_primary(format!("{:<14}", entry.code.code())),
                    entry.variant.top_bar.name(),
                    entry.variant.bottom_bar.name(),
                    entry.variant.subtitle
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        let machine = entries
            .iter()
            .map(|entry| entry.code.code())
            .collect::<Vec<_>>()
            .join("\n");
        let json = opts.terminal.output_format().json(&entries)?;

        opts.terminal
            .stdout()
            .plain(plain)
            .machine(machine)
            .json(json)
            .write_line()
    }
}

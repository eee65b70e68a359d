use certify_api::colors::color_primary;
use certify_api::{fmt_log, fmt_ok};
use clap::Args;
use colorful::Colorful;

use crate::lookup::{fetch_certificate, CredentialIdArg};
use crate::util::async_cmd;
use crate::{CommandGlobalOpts, Result};

/// Check that a certificate exists
#[derive(Clone, Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    credential_id: CredentialIdArg,
}

impl CheckCommand {
    pub fn run(self, opts: CommandGlobalOpts) -> Result<()> {
        async_cmd(&self.name(), || async move { self.async_run(opts).await })
    }

    pub fn name(&self) -> String {
        "check certificate".into()
    }

    async fn async_run(&self, opts: CommandGlobalOpts) -> Result<()> {
        let credential_id = self.credential_id.resolve(&opts)?;
        let record = fetch_certificate(&opts, &credential_id).await?;
        let plain = format!(
            "{}\n{}\n{}",
            fmt_ok!("Certificate {} is valid", color_primary(&record.credential_id)),
            fmt_log!("Awarded to {} for {}", color_primary(&record.name), record.course),
            fmt_log!(
                "Run `certify show {}` to see the details",
                record.credential_id
            )
        );
        let json = opts.terminal.output_format().json(&serde_json::json!({
            "credentialId": record.credential_id,
            "valid": true,
        }))?;
        opts.terminal
            .clone()
            .stdout()
            .plain(plain)
            .machine(&record.credential_id)
            .json(json)
            .write_line()
    }
}

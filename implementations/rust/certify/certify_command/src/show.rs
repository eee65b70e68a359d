use certify_api::certificate::CertificateRecord;
use certify_api::colors::color_primary;
use certify_api::output::Output;
use certify_api::terminal::PADDING;
use clap::Args;

use crate::lookup::{fetch_certificate, CredentialIdArg};
use crate::util::async_cmd;
use crate::{CommandGlobalOpts, Result};

/// Show the details of a certificate
#[derive(Clone, Debug, Args)]
pub struct ShowCommand {
    #[command(flatten)]
    credential_id: CredentialIdArg,
}

impl ShowCommand {
    pub fn run(self, opts: CommandGlobalOpts) -> Result<()> {
        async_cmd(&self.name(), || async move { self.async_run(opts).await })
    }

    pub fn name(&self) -> String {
        "show certificate".into()
    }

    async fn async_run(&self, opts: CommandGlobalOpts) -> Result<()> {
        let credential_id = self.credential_id.resolve(&opts)?;
        let record = fetch_certificate(&opts, &credential_id).await?;
        let json = opts.terminal.output_format().json(&record)?;
        opts.terminal
            .clone()
            .stdout()
            .plain(plain_details(&record)?)
            .machine(record.item()?)
            .json(json)
            .write_line()
    }
}

/// The details card, indented, with a highlighted title
fn plain_details(record: &CertificateRecord) -> Result<String> {
    let details = record.item()?;
    let mut lines = details.lines();
    let title = lines.next().unwrap_or_default();
    let mut plain = format!("{PADDING}{}\n", color_primary(title));
    for line in lines {
        plain.push_str(&format!("{PADDING}{line}\n"));
    }
    Ok(plain.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_details_keep_every_field() {
        let record: CertificateRecord = serde_json::from_value(serde_json::json!({
            "credentialId": "SLIIT-001",
            "name": "Ishara Gunawardena",
            "course": "Git Basics",
            "dateIssued": "2024-02-01",
            "issuer": "SLIIT Mozilla Campus Club"
        }))
        .unwrap();
        let plain = plain_details(&record).unwrap();
        for expected in [
            "Certificate of Completion",
            "Ishara Gunawardena",
            "Git Basics",
            "2/1/2024",
            "SLIIT Mozilla Campus Club",
            "SLIIT-001",
        ] {
            assert!(plain.contains(expected), "{expected} is missing from {plain}");
        }
        assert!(plain.lines().all(|line| line.starts_with(PADDING)));
    }
}

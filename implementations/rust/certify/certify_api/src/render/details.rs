use std::fmt;

use crate::certificate::CertificateRecord;

/// The plain "Certificate of Completion" card.
pub struct CertificateDetails<'a>(pub &'a CertificateRecord);

impl fmt::Display for CertificateDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        writeln!(f, "Certificate of Completion")?;
        writeln!(f, "Name:          {}", record.name)?;
        writeln!(f, "Course:        {}", record.course)?;
        writeln!(f, "Date Issued:   {}", record.issue_date())?;
        writeln!(f, "Issuer:        {}", record.issuer)?;
        if let Some(category) = record.category.as_deref().filter(|c| !c.trim().is_empty()) {
            writeln!(f, "Category:      {}", category)?;
        }
        write!(f, "Credential ID: {}", record.credential_id)
    }
}

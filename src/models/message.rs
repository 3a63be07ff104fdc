//! Archived copy and notification message structures.

use crate::models::Filing;

/// Result of copying a filing into the archive bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedCopy {
    /// Archive key (the filing's derived key)
    pub key: String,

    /// Public retrieval URL for the archived object
    pub url: String,
}

/// A rendered subject/body pair for one filing.
///
/// Ephemeral; constructed per filing and consumed by the notifier. The
/// charset declaration happens at the provider call site, the content here is
/// plain UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

impl NotificationMessage {
    /// Render the notification for a filing and its archived copy.
    pub fn render(filing: &Filing, archived_url: &str) -> Self {
        let subject = format!(
            "New Supplemental Statement for {}",
            filing.registrant_name
        );

        let body = format!(
            "This is an automatic email notification to inform you that a new \
             Supplemental Statement for {registrant} is now available, as of \
             {date}.\n\n\
             The official URL for this document is {url}.\n\n\
             You will also find a backup of this document at {archived_url}.\n",
            registrant = filing.registrant_name,
            date = filing.date_stamped,
            url = filing.url,
            archived_url = archived_url,
        );

        Self { subject, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_filing() -> Filing {
        Filing {
            registrant_name: "MSLGROUP Americas".to_string(),
            registration_number: "5483".to_string(),
            document_type: "Supplemental Statement".to_string(),
            date_stamped: "04/30/2021".to_string(),
            url: "https://efile.fara.gov/docs/A.pdf".to_string(),
        }
    }

    #[test]
    fn render_interpolates_all_links() {
        let message = NotificationMessage::render(
            &sample_filing(),
            "https://fara-watcher.s3.amazonaws.com/A.pdf",
        );

        assert_eq!(
            message.subject,
            "New Supplemental Statement for MSLGROUP Americas"
        );
        assert!(message.body.contains("as of 04/30/2021"));
        assert!(message.body.contains("https://efile.fara.gov/docs/A.pdf"));
        assert!(
            message
                .body
                .contains("https://fara-watcher.s3.amazonaws.com/A.pdf")
        );
    }
}

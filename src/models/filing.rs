//! Filing data structures.
//!
//! Mirrors the FARA eFile `RegDocs` JSON shape:
//! `{"REGISTRANTDOCS": {"ROW": [...]}}`. The API serves `ROW` as an array
//! when a registrant has several documents and as a bare object when it has
//! exactly one, so deserialization accepts both.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Top-level envelope of the per-registrant documents endpoint.
#[derive(Debug, Deserialize)]
pub struct RegDocsResponse {
    #[serde(rename = "REGISTRANTDOCS")]
    pub registrant_docs: RegistrantDocs,
}

/// Inner document list wrapper.
#[derive(Debug, Deserialize)]
pub struct RegistrantDocs {
    #[serde(rename = "ROW", default, deserialize_with = "one_or_many")]
    pub rows: Vec<Filing>,
}

/// A filed document fetched from the FARA API.
///
/// Immutable for the lifetime of one run; never persisted locally.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Filing {
    /// Registrant display name
    #[serde(rename = "Registrant_Name", default)]
    pub registrant_name: String,

    /// FARA registration number
    #[serde(rename = "Registration_Number", default)]
    pub registration_number: String,

    /// Document type (e.g., "Supplemental Statement")
    #[serde(rename = "Document_Type", default)]
    pub document_type: String,

    /// Filing date as served by the API, kept verbatim for notifications
    #[serde(rename = "Date_Stamped")]
    pub date_stamped: String,

    /// Official document URL
    #[serde(rename = "Url")]
    pub url: String,
}

impl Filing {
    /// Archive/dedup identity: the filename component of the official URL.
    ///
    /// Query strings and fragments are not part of the key.
    pub fn derived_key(&self) -> String {
        derive_key(&self.url)
    }

    /// Parse the stamped date to a calendar date, ignoring time-of-day.
    ///
    /// The API has served both `04/30/2021` and `04/30/2021 12:00:00 AM`
    /// style stamps; ISO dates are accepted as well. Returns `None` when no
    /// format matches.
    pub fn stamped_date(&self) -> Option<NaiveDate> {
        let raw = self.date_stamped.trim();

        for format in ["%m/%d/%Y %I:%M:%S %p", "%m/%d/%Y", "%Y-%m-%d"] {
            if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
                return Some(date);
            }
        }

        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.date_naive())
            .ok()
    }
}

/// Extract the final path segment of a document URL.
pub fn derive_key(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        if let Some(segments) = parsed.path_segments() {
            if let Some(name) = segments.filter(|s| !s.is_empty()).next_back() {
                return name.to_string();
            }
        }
    }

    // Relative or otherwise unparseable URL: fall back to a raw split.
    url.rsplit('/').next().unwrap_or(url).to_string()
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<Filing>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<Filing>),
        One(Filing),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(rows) => rows,
        OneOrMany::One(row) => vec![row],
    })
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
            url: "https://efile.fara.gov/docs/5483-Supplemental-Statement-20210430-24.pdf"
                .to_string(),
        }
    }

    #[test]
    fn derived_key_is_final_path_segment() {
        assert_eq!(derive_key("https://x/y/Doc123.pdf"), "Doc123.pdf");
        assert_eq!(
            sample_filing().derived_key(),
            "5483-Supplemental-Statement-20210430-24.pdf"
        );
    }

    #[test]
    fn derived_key_strips_query_string() {
        assert_eq!(derive_key("https://x/y/Doc123.pdf?version=2"), "Doc123.pdf");
    }

    #[test]
    fn stamped_date_accepts_known_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 4, 30).unwrap();

        let mut filing = sample_filing();
        assert_eq!(filing.stamped_date(), Some(expected));

        filing.date_stamped = "04/30/2021 12:00:00 AM".to_string();
        assert_eq!(filing.stamped_date(), Some(expected));

        filing.date_stamped = "2021-04-30".to_string();
        assert_eq!(filing.stamped_date(), Some(expected));
    }

    #[test]
    fn stamped_date_rejects_garbage() {
        let mut filing = sample_filing();
        filing.date_stamped = "not a date".to_string();
        assert_eq!(filing.stamped_date(), None);
    }

    #[test]
    fn envelope_parses_row_array() {
        let json = r#"{
            "REGISTRANTDOCS": {
                "ROW": [
                    {"Registrant_Name": "MSLGROUP Americas",
                     "Registration_Number": "5483",
                     "Document_Type": "Supplemental Statement",
                     "Date_Stamped": "04/30/2021",
                     "Url": "https://efile.fara.gov/docs/A.pdf"},
                    {"Date_Stamped": "10/29/2020",
                     "Url": "https://efile.fara.gov/docs/B.pdf"}
                ]
            }
        }"#;

        let response: RegDocsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.registrant_docs.rows.len(), 2);
        assert_eq!(response.registrant_docs.rows[0].derived_key(), "A.pdf");
        assert_eq!(response.registrant_docs.rows[1].registrant_name, "");
    }

    #[test]
    fn envelope_parses_single_row_object() {
        let json = r#"{
            "REGISTRANTDOCS": {
                "ROW": {"Date_Stamped": "04/30/2021",
                        "Url": "https://efile.fara.gov/docs/A.pdf"}
            }
        }"#;

        let response: RegDocsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.registrant_docs.rows.len(), 1);
    }

    #[test]
    fn envelope_parses_empty_doc_list() {
        let json = r#"{"REGISTRANTDOCS": {}}"#;
        let response: RegDocsResponse = serde_json::from_str(json).unwrap();
        assert!(response.registrant_docs.rows.is_empty());
    }

    #[test]
    fn envelope_rejects_missing_wrapper() {
        let json = r#"{"ROWS": []}"#;
        assert!(serde_json::from_str::<RegDocsResponse>(json).is_err());
    }
}

//! Structured résumé input, in the JSON Resume shape the rest of the product uses.
//!
//! Every field is optional. Absent lists deserialize to empty vectors, and an
//! empty list is indistinguishable from an absent one: both omit the section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeDocument {
    pub basics: Option<Basics>,
    pub summary: Option<String>,
    pub work: Vec<WorkEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<ProjectEntry>,
    pub certificates: Vec<Certificate>,
    pub languages: Vec<Language>,
}

impl ResumeDocument {
    /// Summary text, falling back to `basics.summary` when the top-level field is absent or blank.
    pub fn summary_text(&self) -> Option<&str> {
        non_empty(&self.summary)
            .or_else(|| self.basics.as_ref().and_then(|b| non_empty(&b.summary)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Basics {
    pub name: Option<String>,
    /// Headline, e.g. "Senior Backend Engineer".
    pub label: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Portfolio / personal site.
    pub url: Option<String>,
    pub summary: Option<String>,
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub network: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkEntry {
    /// Company name.
    #[serde(alias = "company")]
    pub name: Option<String>,
    pub position: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    /// Absent means the role is current.
    pub end_date: Option<String>,
    pub summary: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub study_type: Option<String>,
    pub area: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// GPA or grade, rendered verbatim.
    #[serde(alias = "gpa")]
    pub score: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillGroup {
    pub name: Option<String>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Language {
    pub language: Option<String>,
    pub fluency: Option<String>,
}

/// Returns the trimmed string when it carries any content.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_json_resume_shape() {
        let json = r#"{
            "basics": {
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "profiles": [{ "network": "GitHub", "url": "https://github.com/ada" }]
            },
            "work": [{
                "name": "Analytical Engines Ltd",
                "position": "Programmer",
                "startDate": "1842-09",
                "endDate": "Present",
                "highlights": ["Wrote the first published algorithm"]
            }],
            "education": [{ "institution": "Home", "studyType": "Tutoring", "area": "Mathematics", "gpa": "4.0" }],
            "skills": [{ "name": "Mathematics", "keywords": ["Calculus", "Bernoulli numbers"] }],
            "certificates": []
        }"#;

        let doc: ResumeDocument = serde_json::from_str(json).unwrap();
        let basics = doc.basics.as_ref().unwrap();
        assert_eq!(basics.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(basics.profiles.len(), 1);
        assert_eq!(doc.work[0].start_date.as_deref(), Some("1842-09"));
        assert_eq!(doc.work[0].highlights.len(), 1);
        assert_eq!(doc.education[0].score.as_deref(), Some("4.0"));
        assert!(doc.certificates.is_empty());
        assert!(doc.languages.is_empty());
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_company_alias_accepted() {
        let entry: WorkEntry = serde_json::from_str(r#"{"company": "Acme"}"#).unwrap();
        assert_eq!(entry.name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_summary_falls_back_to_basics() {
        let doc = ResumeDocument {
            basics: Some(Basics {
                summary: Some("Builds things.".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(doc.summary_text(), Some("Builds things."));

        let doc = ResumeDocument {
            summary: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(doc.summary_text(), None);
    }

    #[test]
    fn test_blank_summary_falls_back_to_basics() {
        let doc = ResumeDocument {
            summary: Some("  \n ".to_string()),
            basics: Some(Basics {
                summary: Some(" Builds things. ".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(doc.summary_text(), Some("Builds things."));
    }
}

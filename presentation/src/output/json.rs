//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use folio_application::ContactConfig;
use folio_domain::{AcceptedEnquiry, ErrorSet, Profile, Project, Section};
use serde_json::{Map, Value, json};

/// Formats the page and enquiry results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn section_value(
        profile: &Profile,
        contact: &ContactConfig,
        section: Section,
        tag: Option<&str>,
    ) -> Value {
        match section {
            Section::Home => json!({ "name": profile.name, "hero": profile.hero }),
            Section::About => json!({
                "about": profile.about,
                "education": profile.education,
                "experience": profile.experience,
                "skills": profile.skills,
                "softSkills": profile.soft_skills,
                "hobbies": profile.hobbies,
                "links": profile.links,
            }),
            Section::Portfolio => {
                let projects: Vec<&Project> = match tag {
                    Some(tag) => profile.projects_tagged(tag),
                    None => profile.projects.iter().collect(),
                };
                json!({ "lead": profile.portfolio_lead, "projects": projects })
            }
            Section::Contact => json!({
                "email": contact.recipient_email,
                "mailto": contact.mailto(),
                "phone": contact.recipient_phone,
            }),
        }
    }

    fn pretty(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_page(
        &self,
        profile: &Profile,
        contact: &ContactConfig,
        sections: &[Section],
        tag: Option<&str>,
    ) -> String {
        let mut map = Map::new();
        for section in Section::ALL.iter().filter(|s| sections.contains(s)) {
            map.insert(
                section.anchor().to_string(),
                Self::section_value(profile, contact, *section, tag),
            );
        }
        Self::pretty(&Value::Object(map))
    }

    fn format_errors(&self, errors: &ErrorSet) -> String {
        Self::pretty(&json!({ "valid": false, "errors": errors }))
    }

    fn format_summary(&self, accepted: &AcceptedEnquiry, contact: &ContactConfig) -> String {
        Self::pretty(&json!({
            "valid": true,
            "to": contact.recipient_email,
            "enquiry": accepted,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio_domain::{ContactMethod, EnquiryDraft, validate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_format_errors_json() {
        let draft = EnquiryDraft::new();
        let output = JsonFormatter.format_errors(&validate(&draft, today()));
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"]["firstName"], "Please enter your first name.");
        assert_eq!(value["errors"].as_object().unwrap().len(), 8);
    }

    #[test]
    fn test_format_summary_json() {
        let draft = EnquiryDraft::new()
            .with_first_name("Karim")
            .with_project_description("Build a site")
            .with_email("a@b.com")
            .with_confirm_email("A@B.com")
            .with_phone("07123456789")
            .with_preferred_contact(ContactMethod::Phone)
            .with_project_date(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())
            .with_duration("2 weeks");
        let accepted = AcceptedEnquiry::accept(&draft, today()).unwrap();

        let output = JsonFormatter.format_summary(&accepted, &ContactConfig::new("me@example.com"));
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["valid"], true);
        assert_eq!(value["to"], "me@example.com");
        assert_eq!(value["enquiry"]["confirmEmail"], "A@B.com");
        assert_eq!(value["enquiry"]["preferredContact"], "phone");
    }

    #[test]
    fn test_format_page_json_keys_follow_sections() {
        let profile = Profile {
            name: "Karim".to_string(),
            ..Default::default()
        };
        let output = JsonFormatter.format_page(
            &profile,
            &ContactConfig::default(),
            &[Section::Home, Section::Contact],
            None,
        );
        let value: Value = serde_json::from_str(&output).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(value["home"]["name"], "Karim");
        assert!(value["contact"]["email"].is_string());
        assert_eq!(
            value["contact"]["mailto"],
            format!("mailto:{}", value["contact"]["email"].as_str().unwrap())
        );
    }
}

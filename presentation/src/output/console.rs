//! Console output formatter for the portfolio and enquiry results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use folio_application::ContactConfig;
use folio_domain::{
    AcceptedEnquiry, EnquiryDraft, EnquiryField, ErrorSet, Profile, Project, Section, SkillLevel,
};

/// Formats the page and enquiry results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render the requested sections in page order
    pub fn format_page(
        profile: &Profile,
        contact: &ContactConfig,
        sections: &[Section],
        tag: Option<&str>,
    ) -> String {
        let mut output = String::new();

        output.push_str(&Self::nav_bar(&profile.name));

        for section in Section::ALL.iter().filter(|s| sections.contains(s)) {
            let body = match section {
                Section::Home => Self::format_home(profile),
                Section::About => Self::format_about(profile),
                Section::Portfolio => Self::format_portfolio(profile, tag),
                Section::Contact => Self::format_contact_card(contact),
            };
            output.push_str(&body);
        }

        output.push_str(&Self::footer(&profile.name));
        output
    }

    /// Hero section
    pub fn format_home(profile: &Profile) -> String {
        let hero = &profile.hero;
        let mut output = String::new();

        output.push('\n');
        if !hero.badge.is_empty() {
            output.push_str(&format!("  [ {} ]\n\n", hero.badge.dimmed()));
        }
        output.push_str(&format!(
            "  {} {}\n\n",
            hero.headline.bold(),
            hero.highlight.magenta().bold()
        ));
        output.push_str(&Self::indent(&Self::wrap(&hero.subtext, 70), "  "));
        output.push_str("\n\n");
        output.push_str(&format!(
            "  {}   {}\n",
            "View My Work → folio portfolio".cyan(),
            "Get In Touch → folio --contact".cyan()
        ));
        output
    }

    /// About, education, experience and skills
    pub fn format_about(profile: &Profile) -> String {
        let mut output = Self::section_header(Section::About.title());

        if !profile.about.is_empty() {
            output.push_str(&Self::wrap(&profile.about, 72));
            output.push('\n');
        }

        if !profile.education.is_empty() {
            output.push_str(&Self::sub_header("Education"));
            for entry in &profile.education {
                output.push_str(&format!("\n{}\n", entry.title.yellow().bold()));
                output.push_str(&format!("{}\n", entry.period.dimmed()));
                output.push_str(&Self::indent(&Self::wrap(&entry.summary, 70), "  "));
                output.push('\n');
            }
        }

        if !profile.experience.is_empty() {
            output.push_str(&Self::sub_header("Work Experience"));
            for job in &profile.experience {
                output.push_str(&format!(
                    "\n{}\n",
                    format!("{} — {}", job.employer, job.role).yellow().bold()
                ));
                output.push_str(&format!("{}\n", job.period.dimmed()));
                output.push_str(&Self::indent(&Self::wrap(&job.summary, 70), "  "));
                output.push('\n');
            }
        }

        if !profile.skills.is_empty() {
            output.push_str(&Self::sub_header("Technical Skills"));
            for level in [
                SkillLevel::Advanced,
                SkillLevel::Intermediate,
                SkillLevel::Beginner,
            ] {
                let names = profile
                    .skills_at(level)
                    .map(|skill| skill.name.as_str())
                    .collect::<Vec<_>>();
                if !names.is_empty() {
                    output.push_str(&format!(
                        "  {:<14} {}\n",
                        format!("{}:", level).bold(),
                        names.join(", ")
                    ));
                }
            }
        }

        if !profile.soft_skills.is_empty() {
            output.push_str(&Self::sub_header("Soft Skills"));
            for skill in &profile.soft_skills {
                output.push_str(&format!("  * {}\n", skill));
            }
        }

        if !profile.hobbies.is_empty() {
            output.push_str(&Self::sub_header("Hobbies"));
            output.push_str(&Self::wrap(&profile.hobbies, 72));
            output.push('\n');
        }

        if !profile.links.is_empty() {
            output.push('\n');
            for link in &profile.links {
                output.push_str(&format!("  {} {}\n", format!("{}:", link.label).bold(), link.url));
            }
        }

        output
    }

    /// Project showcase, optionally filtered by tag
    pub fn format_portfolio(profile: &Profile, tag: Option<&str>) -> String {
        let mut output = Self::section_header(Section::Portfolio.title());

        if !profile.portfolio_lead.is_empty() {
            output.push_str(&Self::wrap(&profile.portfolio_lead, 72));
            output.push('\n');
        }

        let projects: Vec<&Project> = match tag {
            Some(tag) => profile.projects_tagged(tag),
            None => profile.projects.iter().collect(),
        };

        if projects.is_empty() {
            let note = match tag {
                Some(tag) => format!("No projects tagged \"{}\".", tag),
                None => "No projects yet.".to_string(),
            };
            output.push_str(&format!("\n{}\n", note.dimmed()));
            let tags = profile.all_tags();
            if tag.is_some() && !tags.is_empty() {
                output.push_str(&format!("Available tags: {}\n", tags.join(", ")));
            }
            return output;
        }

        for project in projects {
            output.push_str(&Self::project_card(project));
        }
        output
    }

    /// The contact information card shown beside the form
    pub fn format_contact_card(contact: &ContactConfig) -> String {
        let mut output = Self::section_header(Section::Contact.title());
        output.push_str(
            "Have a project in mind? Let's discuss how we can work together to bring your ideas to life.\n",
        );
        output.push_str(&Self::sub_header("Contact Information"));
        output.push_str(&format!(
            "  {} {}\n",
            "Email:".bold(),
            contact.mailto()
        ));
        if let Some(phone) = &contact.recipient_phone {
            output.push_str(&format!("  {} {}\n", "Phone:".bold(), phone));
        }
        output.push_str(&format!(
            "\n  {}\n",
            "Send me a message: folio --contact".cyan()
        ));
        output
    }

    /// Every failing field with its message, in form order
    pub fn format_errors(errors: &ErrorSet) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            format!("Please fix {} field(s):", errors.len()).red().bold()
        ));
        for (field, error) in errors.iter() {
            output.push_str(&format!(
                "  {} {}: {}\n",
                "✗".red(),
                field.label().bold(),
                error.message()
            ));
        }
        output
    }

    /// The enquiry summary shown after a valid submit
    pub fn format_summary(accepted: &AcceptedEnquiry, contact: &ContactConfig) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Enquiry Summary"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "To:".cyan().bold(),
            contact.recipient_email
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for (label, value) in accepted.summary_rows() {
            if value.contains('\n') {
                output.push_str(&format!("{}\n", format!("{}:", label).bold()));
                output.push_str(&Self::indent(&value, "  "));
                output.push('\n');
            } else {
                output.push_str(&format!("{} {}\n", format!("{}:", label).bold(), value));
            }
        }

        output.push_str(&Self::footer_line());
        output
    }

    /// The form as currently filled in, with inline messages from the last submit
    pub fn format_draft(draft: &EnquiryDraft, errors: &ErrorSet) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Send Me a Message".bold()));
        output.push_str(&format!(
            "{}\n\n",
            "Fill out the form below and I'll get back to you soon".dimmed()
        ));

        for field in EnquiryField::ALL {
            let value = draft.value(field);
            let shown = if value.is_empty() {
                field
                    .placeholder()
                    .map(|p| p.dimmed().to_string())
                    .unwrap_or_default()
            } else {
                value
            };
            output.push_str(&format!(
                "  {:<26} {}\n",
                format!("{} *", field.label()),
                shown
            ));
            if let Some(message) = errors.message(field) {
                output.push_str(&format!("  {:<26} {}\n", "", message.red()));
            }
        }
        output
    }

    fn project_card(project: &Project) -> String {
        let mut output = format!("\n{}\n", format!("── {} ──", project.title).yellow().bold());
        output.push_str(&Self::indent(&Self::wrap(&project.description, 70), "  "));
        output.push('\n');
        if !project.tags.is_empty() {
            let tags = project
                .tags
                .iter()
                .map(|t| format!("[{}]", t))
                .collect::<Vec<_>>()
                .join(" ");
            output.push_str(&format!("  {}\n", tags.blue()));
        }
        if let Some(url) = &project.live_url {
            output.push_str(&format!("  {} {}\n", "View Live:".bold(), url));
        }
        if let Some(url) = &project.source_url {
            output.push_str(&format!("  {} {}\n", "Source Code:".bold(), url));
        }
        output
    }

    fn nav_bar(name: &str) -> String {
        let links = Section::ALL
            .iter()
            .map(|s| format!("#{}", s.anchor()))
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}  {}\n", name.bold(), links.dimmed())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn sub_header(title: &str) -> String {
        format!("\n{}\n", title.cyan())
    }

    fn footer(name: &str) -> String {
        format!(
            "\n{}\n{}\n",
            "=".repeat(60).cyan(),
            format!("© {}", name).dimmed()
        )
    }

    fn footer_line() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Greedy word wrap; existing line breaks are kept
    pub fn wrap(text: &str, width: usize) -> String {
        text.lines()
            .map(|line| {
                let mut wrapped = String::new();
                let mut current = 0;
                for word in line.split_whitespace() {
                    let len = word.chars().count();
                    if current > 0 && current + 1 + len > width {
                        wrapped.push('\n');
                        current = 0;
                    } else if current > 0 {
                        wrapped.push(' ');
                        current += 1;
                    }
                    wrapped.push_str(word);
                    current += len;
                }
                wrapped
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_page(
        &self,
        profile: &Profile,
        contact: &ContactConfig,
        sections: &[Section],
        tag: Option<&str>,
    ) -> String {
        Self::format_page(profile, contact, sections, tag)
    }

    fn format_errors(&self, errors: &ErrorSet) -> String {
        Self::format_errors(errors)
    }

    fn format_summary(&self, accepted: &AcceptedEnquiry, contact: &ContactConfig) -> String {
        Self::format_summary(accepted, contact)
    }
}

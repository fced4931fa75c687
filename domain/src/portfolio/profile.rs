//! Portfolio profile content (Value Objects)
//!
//! Deserialized from TOML by the infrastructure layer; the domain only
//! defines the shape and a few queries over it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything shown on the page outside the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub hero: Hero,
    /// Lead paragraph of the About section
    pub about: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<WorkExperience>,
    pub skills: Vec<Skill>,
    pub soft_skills: Vec<String>,
    pub hobbies: String,
    pub links: Vec<SocialLink>,
    /// Lead paragraph of the Portfolio section
    pub portfolio_lead: String,
    pub projects: Vec<Project>,
}

impl Profile {
    /// Projects carrying `tag` (case-insensitive)
    pub fn projects_tagged(&self, tag: &str) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// Every distinct tag across the showcase, in first-seen order
    pub fn all_tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.projects.iter().flat_map(|p| p.tags.iter()) {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                tags.push(tag.as_str());
            }
        }
        tags
    }

    /// Skills at the given level
    pub fn skills_at(&self, level: SkillLevel) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.level == level)
    }
}

/// The introductory banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    /// Emphasised part of the headline
    pub highlight: String,
    pub subtext: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub role: String,
    pub employer: String,
    pub period: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "Beginner"),
            SkillLevel::Intermediate => write!(f, "Intermediate"),
            SkillLevel::Advanced => write!(f, "Advanced"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// One card of the project showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub live_url: Option<String>,
    pub source_url: Option<String>,
}

impl Project {
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, tags: &[&str]) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            live_url: None,
            source_url: None,
        }
    }

    fn sample() -> Profile {
        Profile {
            projects: vec![
                project("Shop", &["React", "Stripe"]),
                project("Hotel", &["react", "CSS"]),
                project("Site", &["Tailwind"]),
            ],
            skills: vec![
                Skill {
                    name: "HTML5".to_string(),
                    level: SkillLevel::Advanced,
                },
                Skill {
                    name: "Java".to_string(),
                    level: SkillLevel::Intermediate,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_projects_tagged_is_case_insensitive() {
        let profile = sample();
        let titles: Vec<_> = profile
            .projects_tagged("REACT")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Shop", "Hotel"]);
        assert!(profile.projects_tagged("rust").is_empty());
    }

    #[test]
    fn test_all_tags_deduplicates() {
        assert_eq!(sample().all_tags(), vec!["React", "Stripe", "CSS", "Tailwind"]);
    }

    #[test]
    fn test_skills_at_level() {
        let profile = sample();
        let advanced: Vec<_> = profile.skills_at(SkillLevel::Advanced).collect();
        assert_eq!(advanced.len(), 1);
        assert_eq!(advanced[0].name, "HTML5");
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml_str = r#"
name = "Karim"

[hero]
headline = "Hi, I'm a"
highlight = "Creative Developer"

[[skills]]
name = "Rust"
level = "beginner"

[[projects]]
title = "Gem Hotel"
description = "A responsive hotel website."
tags = ["React"]
live_url = "https://example.com"
"#;
        let profile: Profile = toml::from_str(toml_str).unwrap();
        assert_eq!(profile.hero.highlight, "Creative Developer");
        assert_eq!(profile.skills[0].level, SkillLevel::Beginner);
        assert_eq!(profile.projects[0].source_url, None);
        assert!(profile.education.is_empty());
    }
}

//! Portfolio content repository.
//!
//! All display content lives here as immutable typed records. The repository
//! is built once at startup (either the built-in portfolio or a JSON file)
//! and is never mutated afterwards; runtime state such as the theme or
//! animation progress is kept elsewhere.

use std::collections::HashSet;
use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Maximum value of [`Skill::level`].
pub const MAX_SKILL_LEVEL: u8 = 100;

/// Number of social links repeated in the footer.
pub const FOOTER_SOCIAL_LINKS: usize = 3;

/// Personal details shown across hero, about, contact and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub description: String,
    /// Biography paragraphs, in display order
    pub bio: Vec<String>,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// Year shown in the badges and the copyright line
    #[serde(default = "current_year")]
    pub year: i32,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// A headline number in the about section, animated from zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl Stat {
    /// Suffix text, empty when the stat has none
    pub fn suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or("")
    }
}

/// Skill grouping used by the skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tool,
}

impl SkillCategory {
    /// Display order of the category blocks
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tool,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tool => "Tools & DevOps",
        }
    }

    /// Font Awesome icon name (without the `fa-` prefix)
    pub fn icon(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "paint-brush",
            SkillCategory::Backend => "server",
            SkillCategory::Tool => "tools",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, 0 to 100
    pub level: u8,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Icon class list, e.g. `fab fa-github`
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    /// Glyph shown in the card header
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Page sections that can be targeted by in-page anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }

    /// Whether the section fades in when scrolled into view.
    ///
    /// The hero is visible on load and never takes part in the reveal.
    pub fn reveals_on_scroll(&self) -> bool {
        !matches!(self, Section::Home)
    }
}

/// Skills of one category, each paired with its index in the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup<'a> {
    pub category: SkillCategory,
    pub skills: Vec<(usize, &'a Skill)>,
}

/// Group skills by category, omitting empty categories.
///
/// Categories appear in [`SkillCategory::ALL`] order and skills keep their
/// declaration order inside each group.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup<'_>> {
    SkillCategory::ALL
        .into_iter()
        .map(|category| SkillGroup {
            category,
            skills: skills
                .iter()
                .enumerate()
                .filter(|(_, skill)| skill.category == category)
                .collect(),
        })
        .filter(|group| !group.skills.is_empty())
        .collect()
}

/// Featured projects first, then the rest. Both partitions are stable.
pub fn display_order(projects: &[Project]) -> Vec<&Project> {
    let (featured, others): (Vec<&Project>, Vec<&Project>) =
        projects.iter().partition(|project| project.featured);
    featured.into_iter().chain(others).collect()
}

/// The complete, read-only content of the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRepository {
    pub personal: PersonalInfo,
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
    pub nav_items: Vec<NavItem>,
}

impl ContentRepository {
    /// Parse a repository from JSON and validate it.
    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        let content: ContentRepository = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Read a repository from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> FolioResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the repository invariants.
    pub fn validate(&self) -> FolioResult<()> {
        if self.personal.name.trim().is_empty() {
            return Err(FolioError::InvalidContent("name is empty".to_string()));
        }

        let mut nav_ids = HashSet::new();
        for item in &self.nav_items {
            if !nav_ids.insert(item.id.as_str()) {
                return Err(FolioError::InvalidContent(format!(
                    "duplicate nav item id '{}'",
                    item.id
                )));
            }
        }

        let mut project_ids = HashSet::new();
        for project in &self.projects {
            if !project_ids.insert(project.id) {
                return Err(FolioError::InvalidContent(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
        }

        if let Some(skill) = self.skills.iter().find(|s| s.level > MAX_SKILL_LEVEL) {
            return Err(FolioError::InvalidContent(format!(
                "skill '{}' has level {} (max {})",
                skill.name, skill.level, MAX_SKILL_LEVEL
            )));
        }

        Ok(())
    }

    /// Logo text: first letter of first and last name.
    pub fn initials(&self) -> String {
        self.personal
            .first_name
            .chars()
            .take(1)
            .chain(self.personal.last_name.chars().take(1))
            .collect()
    }

    pub fn footer_links(&self) -> &[SocialLink] {
        let end = self.social_links.len().min(FOOTER_SOCIAL_LINKS);
        &self.social_links[..end]
    }

    /// `tel:` link for the phone number, whitespace removed.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .personal
            .phone
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("tel:{}", digits)
    }

    /// The built-in portfolio.
    pub fn builtin() -> Self {
        fn s(text: &str) -> String {
            text.to_string()
        }

        fn skill(name: &str, level: u8, category: SkillCategory) -> Skill {
            Skill {
                name: s(name),
                level,
                category,
            }
        }

        fn project(
            id: u32,
            title: &str,
            description: &str,
            technologies: &[&str],
            image: &str,
            featured: bool,
        ) -> Project {
            Project {
                id,
                title: s(title),
                description: s(description),
                technologies: technologies.iter().map(|t| s(t)).collect(),
                image: s(image),
                link: Some(s("#")),
                github: Some(s("#")),
                featured,
            }
        }

        fn stat(value: u32, label: &str, suffix: &str) -> Stat {
            Stat {
                value,
                label: s(label),
                suffix: Some(s(suffix)),
            }
        }

        fn social(name: &str, url: &str, icon: &str) -> SocialLink {
            SocialLink {
                name: s(name),
                url: s(url),
                icon: s(icon),
            }
        }

        use SkillCategory::{Backend, Frontend, Tool};

        ContentRepository {
            personal: PersonalInfo {
                name: s("Hamse Mo"),
                first_name: s("Hamse"),
                last_name: s("Mo"),
                title: s("Full Stack Developer"),
                description: s("I craft exceptional digital experiences through innovative full-stack solutions. Specializing in modern web technologies, I transform complex challenges into elegant, scalable applications."),
                bio: vec![
                    s("As a passionate Full Stack Developer with 4+ years of experience, I specialize in building end-to-end web solutions that deliver exceptional user experiences."),
                    s("My expertise spans modern frontend frameworks, robust backend architectures, cloud infrastructure, and everything in between. I thrive on solving complex problems and turning ideas into reality."),
                    s("When I'm not coding, I contribute to open-source projects, write technical blogs, and continuously explore emerging technologies to stay ahead of the curve."),
                ],
                location: s("Available for Remote Work"),
                email: s("hamse.mo@example.com"),
                phone: s("+1 (234) 567-890"),
                year: 2025,
            },
            stats: vec![
                stat(45, "Projects Completed", "+"),
                stat(28, "Happy Clients", "+"),
                stat(4, "Years Experience", "+"),
                stat(100, "Coffee Cups", "+ \u{2615}"),
            ],
            skills: vec![
                skill("TypeScript", 95, Frontend),
                skill("React", 90, Frontend),
                skill("Next.js", 88, Frontend),
                skill("Vue.js", 85, Frontend),
                skill("CSS/SCSS", 95, Frontend),
                skill("Tailwind CSS", 92, Frontend),
                skill("Node.js", 92, Backend),
                skill("Express", 90, Backend),
                skill("Python", 85, Backend),
                skill("PostgreSQL", 88, Backend),
                skill("MongoDB", 85, Backend),
                skill("Redis", 80, Backend),
                skill("Git", 95, Tool),
                skill("Docker", 85, Tool),
                skill("AWS", 82, Tool),
                skill("CI/CD", 88, Tool),
            ],
            projects: vec![
                project(
                    1,
                    "E-Commerce Platform",
                    "Complete full-stack e-commerce solution with real-time inventory, payment processing, order management, and analytics dashboard. Built with microservices architecture.",
                    &["TypeScript", "Next.js", "Node.js", "PostgreSQL", "Stripe", "Redis"],
                    "\u{1F6D2}",
                    true,
                ),
                project(
                    2,
                    "SaaS Analytics Dashboard",
                    "Real-time analytics platform with interactive data visualization, custom reporting, and automated insights. Supports multiple data sources and export formats.",
                    &["React", "TypeScript", "Python", "FastAPI", "PostgreSQL", "Chart.js"],
                    "\u{1F4CA}",
                    true,
                ),
                project(
                    3,
                    "Collaborative Task Manager",
                    "Team collaboration tool with real-time updates, kanban boards, time tracking, and automated workflows. Built with WebSocket for instant synchronization.",
                    &["Vue.js", "Node.js", "Socket.io", "MongoDB", "Express", "JWT"],
                    "\u{2705}",
                    true,
                ),
                project(
                    4,
                    "Social Media Platform",
                    "Full-featured social networking application with user profiles, posts, comments, real-time messaging, and content moderation. Scalable cloud architecture.",
                    &["Next.js", "TypeScript", "Node.js", "MongoDB", "AWS S3", "Redis"],
                    "\u{1F4F1}",
                    false,
                ),
                project(
                    5,
                    "Learning Management System",
                    "Comprehensive LMS with video streaming, progress tracking, quizzes, certificates, and analytics. Supports multiple course formats and payment integration.",
                    &["React", "Node.js", "PostgreSQL", "FFmpeg", "Stripe", "AWS"],
                    "\u{1F393}",
                    false,
                ),
                project(
                    6,
                    "API Gateway & Management",
                    "Centralized API management system with rate limiting, authentication, monitoring, and documentation. Built for microservices architecture.",
                    &["Node.js", "TypeScript", "Express", "MongoDB", "Redis", "Docker"],
                    "\u{1F50C}",
                    false,
                ),
            ],
            social_links: vec![
                social("GitHub", "#", "fab fa-github"),
                social("LinkedIn", "#", "fab fa-linkedin"),
                social("Twitter", "#", "fab fa-x-twitter"),
                social("Email", "mailto:hamse.mo@example.com", "fas fa-envelope"),
            ],
            nav_items: Section::ALL
                .into_iter()
                .map(|section| NavItem {
                    id: s(section.id()),
                    label: nav_label(section),
                    href: format!("#{}", section.id()),
                })
                .collect(),
        }
    }
}

fn nav_label(section: Section) -> String {
    match section {
        Section::Home => "Home",
        Section::About => "About",
        Section::Skills => "Skills",
        Section::Projects => "Projects",
        Section::Contact => "Contact",
    }
    .to_string()
}

impl Default for ContentRepository {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, featured: bool) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            description: String::new(),
            technologies: vec![],
            image: "*".to_string(),
            link: None,
            github: None,
            featured,
        }
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_builtin_is_valid() {
        let content = ContentRepository::builtin();
        content.validate().unwrap();
        assert_eq!(content.stats.len(), 4);
        assert_eq!(content.skills.len(), 16);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.nav_items.len(), 5);
    }

    #[test]
    fn test_display_order_featured_already_first() {
        let projects = vec![project(1, true), project(2, true), project(3, false), project(4, false)];
        assert_eq!(ids(&display_order(&projects)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display_order_moves_featured_ahead() {
        let projects = vec![project(1, false), project(2, true), project(3, true)];
        assert_eq!(ids(&display_order(&projects)), vec![2, 3, 1]);
    }

    #[test]
    fn test_display_order_empty() {
        assert!(display_order(&[]).is_empty());
    }

    #[test]
    fn test_initials() {
        assert_eq!(ContentRepository::builtin().initials(), "HM");
    }

    #[test]
    fn test_initials_with_empty_last_name() {
        let mut content = ContentRepository::builtin();
        content.personal.last_name.clear();
        assert_eq!(content.initials(), "H");
    }

    #[test]
    fn test_phone_href_strips_whitespace() {
        assert_eq!(ContentRepository::builtin().phone_href(), "tel:+1(234)567-890");
    }

    #[test]
    fn test_footer_links_takes_first_three() {
        let content = ContentRepository::builtin();
        let names: Vec<&str> = content.footer_links().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["GitHub", "LinkedIn", "Twitter"]);
    }

    #[test]
    fn test_footer_links_with_fewer_links() {
        let mut content = ContentRepository::builtin();
        content.social_links.truncate(1);
        assert_eq!(content.footer_links().len(), 1);
    }

    #[test]
    fn test_skill_groups_keep_global_index() {
        let content = ContentRepository::builtin();
        let groups = group_skills(&content.skills);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].category, SkillCategory::Backend);
        assert_eq!(groups[1].skills[0].0, 6);
        assert_eq!(groups[1].skills[0].1.name, "Node.js");
    }

    #[test]
    fn test_skill_groups_skip_empty_categories() {
        let skills = vec![Skill {
            name: "Git".to_string(),
            level: 95,
            category: SkillCategory::Tool,
        }];
        let groups = group_skills(&skills);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, SkillCategory::Tool);
    }

    #[test]
    fn test_validate_rejects_duplicate_project_id() {
        let mut content = ContentRepository::builtin();
        content.projects.push(project(1, false));
        let err = content.validate().unwrap_err();
        assert!(matches!(err, FolioError::InvalidContent(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_nav_id() {
        let mut content = ContentRepository::builtin();
        let first = content.nav_items[0].clone();
        content.nav_items.push(first);
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_level_above_100() {
        let mut content = ContentRepository::builtin();
        content.skills[0].level = 101;
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_section_ids_roundtrip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
        assert!(!Section::Home.reveals_on_scroll());
        assert!(Section::Contact.reveals_on_scroll());
    }

    #[test]
    fn test_from_json_optional_fields() {
        let json = r##"{
            "personal": {
                "name": "Ada Lovelace",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "title": "Analyst",
                "description": "Notes on the engine",
                "bio": ["First paragraph"],
                "location": "London",
                "email": "ada@example.com",
                "phone": "+44 20 0000",
                "year": 1843
            },
            "stats": [{ "value": 1, "label": "Programs" }],
            "skills": [{ "name": "Mathematics", "level": 99, "category": "backend" }],
            "projects": [{
                "id": 7,
                "title": "Note G",
                "description": "Bernoulli numbers",
                "technologies": ["Analytical Engine"],
                "image": "*"
            }],
            "social_links": [],
            "nav_items": [{ "id": "home", "label": "Home", "href": "#home" }]
        }"##;

        let content = ContentRepository::from_json_str(json).unwrap();
        assert_eq!(content.initials(), "AL");
        assert_eq!(content.stats[0].suffix(), "");
        assert!(!content.projects[0].featured);
        assert!(content.projects[0].link.is_none());
        assert_eq!(content.personal.year, 1843);
    }

    #[test]
    fn test_from_json_defaults_year() {
        let mut value = serde_json::to_value(ContentRepository::builtin()).unwrap();
        value["personal"].as_object_mut().unwrap().remove("year");
        let content = ContentRepository::from_json_str(&value.to_string()).unwrap();
        assert_eq!(content.personal.year, chrono::Local::now().year());
    }

    #[test]
    fn test_from_json_invalid_content_is_rejected() {
        let mut value = serde_json::to_value(ContentRepository::builtin()).unwrap();
        value["skills"][0]["level"] = serde_json::json!(150);
        let err = ContentRepository::from_json_str(&value.to_string()).unwrap_err();
        assert!(matches!(err, FolioError::InvalidContent(_)));
    }
}

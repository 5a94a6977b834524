//! Server-side render checks for the section components.

use dioxus::prelude::*;
use folio_core::{
    ContactForm, ContentRepository, Presentation, Project, Section, Skill, SkillCategory,
    SocialLink, Theme,
};
use folio_ui::{About, Contact, Fallback, Footer, Navbar, Projects, Skills};

fn render<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn project(id: u32, featured: bool, link: Option<&str>, github: Option<&str>) -> Project {
    Project {
        id,
        title: format!("Project {}", id),
        description: "Description".to_string(),
        technologies: vec!["Rust".to_string(), "Dioxus".to_string()],
        image: "*".to_string(),
        link: link.map(str::to_string),
        github: github.map(str::to_string),
        featured,
    }
}

fn projects_page(projects: Vec<Project>) -> Element {
    rsx! {
        Projects { projects: projects }
    }
}

fn about_page(presentation: Presentation) -> Element {
    let content = ContentRepository::builtin();
    rsx! {
        About {
            bio: content.personal.bio.clone(),
            stats: content.stats.clone(),
            presentation: presentation,
        }
    }
}

fn skills_page(skills: Vec<Skill>) -> Element {
    rsx! {
        Skills { skills: skills }
    }
}

fn navbar_page((theme, menu_open, scrolled): (Theme, bool, bool)) -> Element {
    let content = ContentRepository::builtin();
    rsx! {
        Navbar {
            nav_items: content.nav_items.clone(),
            initials: content.initials(),
            year: content.personal.year,
            theme: theme,
            menu_open: menu_open,
            scrolled: scrolled,
        }
    }
}

fn contact_page(form: ContactForm) -> Element {
    let content = ContentRepository::builtin();
    rsx! {
        Contact {
            personal: content.personal.clone(),
            phone_href: content.phone_href(),
            form: form,
        }
    }
}

fn footer_page(links: Vec<SocialLink>) -> Element {
    let content = ContentRepository::builtin();
    rsx! {
        Footer {
            personal: content.personal.clone(),
            links: links,
        }
    }
}

fn social(name: &str, url: &str) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        url: url.to_string(),
        icon: "fab fa-github".to_string(),
    }
}

fn fallback_page(_: ()) -> Element {
    rsx! {
        Fallback {}
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let projects = ContentRepository::builtin().projects;
    let first = render(projects_page, projects.clone());
    let second = render(projects_page, projects);
    assert_eq!(first, second);
}

#[test]
fn test_featured_projects_render_first() {
    let html = render(
        projects_page,
        vec![
            project(1, false, None, None),
            project(2, true, None, None),
            project(3, true, None, None),
        ],
    );

    let position = |id: u32| {
        html.find(&format!("data-project-id=\"{}\"", id))
            .unwrap_or_else(|| panic!("project {} not rendered", id))
    };
    assert!(position(2) < position(3));
    assert!(position(3) < position(1));
}

#[test]
fn test_every_project_card_uses_same_template() {
    let html = render(
        projects_page,
        vec![project(1, true, None, None), project(2, false, None, None)],
    );
    assert_eq!(html.matches("project-badge").count(), 2);
    assert_eq!(html.matches(">Featured<").count(), 2);
}

#[test]
fn test_absent_project_links_are_omitted() {
    let html = render(
        projects_page,
        vec![
            project(1, false, Some("https://example.com/live"), None),
            project(2, false, None, None),
        ],
    );
    assert!(html.contains("https://example.com/live"));
    assert_eq!(html.matches("project-link").count(), 1);
    assert!(!html.contains("fa-github"));
}

#[test]
fn test_project_technologies_render_as_tags() {
    let html = render(projects_page, vec![project(1, false, None, None)]);
    assert_eq!(html.matches("tech-tag").count(), 2);
}

#[test]
fn test_counters_start_at_zero_with_target() {
    let html = render(about_page, Presentation::default());
    assert!(html.contains("data-target=\"45\""));
    assert!(html.contains("0+"));
    assert!(html.contains("0+ \u{2615}"));
    assert!(!html.contains("45+"));
}

#[test]
fn test_about_shows_counter_progress_and_reveal() {
    let mut presentation = Presentation::default();
    presentation.reveal(Section::About);
    presentation.set_counter(0, "45+".to_string());

    let html = render(about_page, presentation);
    assert!(html.contains("section about animate"));
    assert!(html.contains("45+"));
}

#[test]
fn test_skill_bars_start_empty() {
    let html = render(skills_page, ContentRepository::builtin().skills);
    assert!(html.contains("data-width=\"95\""));
    assert!(html.contains("width: 0%"));
    assert!(!html.contains("width: 95%"));
    assert_eq!(html.matches("skill-category-title").count(), 3);
}

#[test]
fn test_empty_skill_categories_are_skipped() {
    let skills = vec![Skill {
        name: "Rust".to_string(),
        level: 90,
        category: SkillCategory::Backend,
    }];
    let html = render(skills_page, skills);
    assert_eq!(html.matches("skill-category-title").count(), 1);
    assert!(html.contains("Backend"));
    assert!(!html.contains("Frontend"));
}

#[test]
fn test_navbar_icon_follows_theme() {
    let dark = render(navbar_page, (Theme::Dark, false, false));
    assert!(dark.contains("fa-sun"));
    assert!(!dark.contains("fa-moon"));

    let light = render(navbar_page, (Theme::Light, false, false));
    assert!(light.contains("fa-moon"));
}

#[test]
fn test_navbar_menu_and_scroll_classes() {
    let closed = render(navbar_page, (Theme::Dark, false, false));
    assert!(!closed.contains("nav-menu active"));
    assert!(!closed.contains("hamburger active"));
    assert!(!closed.contains("navbar scrolled"));

    let open = render(navbar_page, (Theme::Dark, true, true));
    assert!(open.contains("nav-menu active"));
    assert!(open.contains("hamburger active"));
    assert!(open.contains("navbar scrolled"));
}

#[test]
fn test_navbar_lists_every_section() {
    let html = render(navbar_page, (Theme::Dark, false, false));
    assert_eq!(html.matches("class=\"nav-link\"").count(), Section::ALL.len());
    assert!(html.contains("HM"));
}

#[test]
fn test_contact_form_idle_and_sent() {
    let idle = render(contact_page, ContactForm::default());
    assert!(idle.contains("Send Message"));
    assert!(idle.contains("fa-paper-plane"));
    assert!(idle.contains("mailto:hamse.mo@example.com"));
    assert!(idle.contains("tel:+1(234)567-890"));

    let mut form = ContactForm::default();
    form.submit();
    let sent = render(contact_page, form);
    assert!(sent.contains("Sent!"));
    assert!(sent.contains("fa-check"));
    assert!(!sent.contains("Send Message"));
}

#[test]
fn test_footer_shows_three_links() {
    let links = ContentRepository::builtin().footer_links().to_vec();
    let html = render(footer_page, links);
    assert_eq!(html.matches("footer-social-link").count(), 3);
    assert!(html.contains("2025 Hamse Mo. All rights reserved."));
}

#[test]
fn test_footer_anchor_links_stay_in_page() {
    let links = ContentRepository::builtin().footer_links().to_vec();
    let html = render(footer_page, links);
    assert!(html.contains("href=\"#\""));
    assert!(!html.contains("target=\"_blank\""));
}

#[test]
fn test_footer_external_links_open_new_window() {
    let html = render(
        footer_page,
        vec![social("GitHub", "#"), social("Mastodon", "https://example.com/@me")],
    );
    assert_eq!(html.matches("target=\"_blank\"").count(), 1);
    assert!(html.contains("https://example.com/@me"));
}

#[test]
fn test_fallback_message() {
    let html = render(fallback_page, ());
    assert!(html.contains("error-message"));
    assert!(html.contains("Please refresh the page."));
}

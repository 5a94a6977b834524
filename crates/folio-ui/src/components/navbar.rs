//! Navigation Bar Component
//!
//! Desktop: horizontal link list with logo and theme toggle
//! Mobile: links collapse behind the hamburger menu

use dioxus::prelude::*;
use folio_core::{NavItem, Theme};

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    pub nav_items: Vec<NavItem>,
    /// Logo text (owner's initials)
    pub initials: String,
    /// Year shown in the logo badge
    pub year: i32,
    /// Active theme; selects the toggle icon
    pub theme: Theme,
    /// Whether the mobile menu is open
    #[props(default = false)]
    pub menu_open: bool,
    /// Whether the page is scrolled past the navbar threshold
    #[props(default = false)]
    pub scrolled: bool,
    /// Hamburger click
    #[props(default)]
    pub on_toggle_menu: Option<EventHandler<()>>,
    /// Theme toggle click
    #[props(default)]
    pub on_toggle_theme: Option<EventHandler<()>>,
    /// Nav link click, receives the link's href
    #[props(default)]
    pub on_nav: Option<EventHandler<String>>,
}

/// Fixed navigation bar
#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    let active = if props.menu_open { " active" } else { "" };
    let navbar_class = if props.scrolled { "navbar scrolled" } else { "navbar" };
    let on_nav = props.on_nav;
    let on_toggle_menu = props.on_toggle_menu;
    let on_toggle_theme = props.on_toggle_theme;

    rsx! {
        nav { class: "{navbar_class}", id: "navbar",
            div { class: "nav-container",
                div { class: "logo",
                    span { class: "logo-text", "{props.initials}" }
                    span { class: "logo-badge", "{props.year}" }
                }

                ul { class: "nav-menu{active}", id: "navMenu",
                    for item in props.nav_items.iter() {
                        li { key: "{item.id}",
                            NavLink { item: item.clone(), on_nav: on_nav }
                        }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "theme-toggle",
                        r#type: "button",
                        "aria-label": "Toggle theme",
                        onclick: move |_| {
                            if let Some(handler) = on_toggle_theme {
                                handler.call(());
                            }
                        },
                        i { class: "fas fa-{props.theme.toggle_icon()}" }
                    }
                    div {
                        class: "hamburger{active}",
                        id: "hamburger",
                        onclick: move |_| {
                            if let Some(handler) = on_toggle_menu {
                                handler.call(());
                            }
                        },
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(item: NavItem, #[props(!optional)] on_nav: Option<EventHandler<String>>) -> Element {
    let href = item.href.clone();

    rsx! {
        a {
            href: "{item.href}",
            class: "nav-link",
            "data-section": "{item.id}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if let Some(handler) = on_nav {
                    handler.call(href.clone());
                }
            },
            "{item.label}"
        }
    }
}

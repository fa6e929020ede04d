//! Bootstrap navigation bar and dropdown menu

use tagloom_html::{attrs, Attributes, Node};

use crate::paths::{is_relative, rebase_href};

/// Navbar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    /// Single link
    Link { title: String, href: String },
    /// Named group of links, shown as a dropdown
    Menu { title: String, links: Vec<(String, String)> },
}

impl NavEntry {
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        NavEntry::Link {
            title: title.into(),
            href: href.into(),
        }
    }

    /// Menu of `(title, href)` pairs
    pub fn menu<T, H>(title: impl Into<String>, links: impl IntoIterator<Item = (T, H)>) -> Self
    where
        T: Into<String>,
        H: Into<String>,
    {
        NavEntry::Menu {
            title: title.into(),
            links: links.into_iter().map(|(t, h)| (t.into(), h.into())).collect(),
        }
    }
}

/// Create an `<a href>` holding `text`
pub fn link(href: &str, text: &str) -> Node {
    let mut a = Node::with_attrs("a", attrs! { "href" => href });
    a.append(text);
    a
}

/// Create a dropdown `<li>` for a navbar list
pub fn dropdown(name: &str, links: &[(String, String)]) -> Node {
    let mut li = Node::with_attrs("li", attrs! { "class_" => "dropdown" });

    let toggle = li.append_tag(
        "a",
        attrs! {
            "href" => "#",
            "class_" => "dropdown-toggle",
            "data" => [("toggle", "dropdown")],
            "aria" => [("haspopup", "true"), ("expanded", "false")],
            "role" => "button",
        },
    );
    toggle.append(name);
    toggle.append_tag("span", attrs! { "class_" => "caret" });

    let menu = li.append_tag("ul", attrs! { "class_" => "dropdown-menu" });
    for (title, href) in links {
        menu.append_tag("li", Attributes::new()).append_node(link(href, title));
    }
    li
}

/// Create a `<nav>` with a brand link and the given entries.
///
/// Menus with no links are skipped and menus with one link render as a
/// plain link. The `class` attribute is always `navbar navbar-default`.
pub fn navbar(brand: &str, root: &str, entries: &[NavEntry], mut attrs: Attributes) -> Node {
    attrs.set("class", "navbar navbar-default");
    let mut nav = Node::with_attrs("nav", attrs);

    let container = nav.append_tag("div", attrs! { "class_" => "container-fluid" });
    container
        .append_tag("a", attrs! { "class_" => "navbar-brand", "href" => root })
        .append(brand);

    let list = container.append_tag("ul", attrs! { "class_" => "nav navbar-nav" });
    for entry in entries {
        match entry {
            NavEntry::Link { title, href } => {
                list.append_tag("li", Attributes::new()).append_node(link(href, title));
            }
            NavEntry::Menu { links, .. } if links.is_empty() => {}
            NavEntry::Menu { links, .. } if links.len() == 1 => {
                let (title, href) = &links[0];
                list.append_tag("li", Attributes::new()).append_node(link(href, title));
            }
            NavEntry::Menu { title, links } => {
                list.append_node(dropdown(title, links));
            }
        }
    }
    nav
}

/// Rebase every relative anchor href under `node` for a page `level`
/// directories deep. Returns the number of hrefs rewritten.
pub fn set_level(node: &mut Node, level: usize) -> usize {
    let mut rewritten = 0;
    node.for_each_mut("a", |a| {
        let Some(href) = a.attribute("href").filter(|href| is_relative(href)) else {
            return;
        };
        let rebased = rebase_href(href, level);
        a.set_attribute("href", rebased);
        rewritten += 1;
    });
    tracing::debug!("Rebased {} links to level {}", rewritten, level);
    rewritten
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(node: &Node) -> Vec<&str> {
        node.find("a").into_iter().filter_map(|a| a.attribute("href")).collect()
    }

    #[test]
    fn test_dropdown_markup() {
        let li = dropdown("Runs", &[("first".into(), "runs/1.html".into())]);

        assert_eq!(
            li.build().unwrap(),
            concat!(
                r#"<li class="dropdown">"#,
                r##"<a href="#" class="dropdown-toggle" data-toggle="dropdown" "##,
                r#"aria-haspopup="true" aria-expanded="false" role="button">"#,
                r#"Runs<span class="caret"></span></a>"#,
                r#"<ul class="dropdown-menu"><li><a href="runs/1.html">first</a></li></ul>"#,
                "</li>"
            )
        );
    }

    #[test]
    fn test_navbar_entries() {
        let nav = navbar(
            "Viewer",
            "index.html",
            &[
                NavEntry::link("Home", "index.html"),
                NavEntry::menu("Empty", Vec::<(String, String)>::new()),
                NavEntry::menu("Single", [("Only", "only.html")]),
                NavEntry::menu("Many", [("A", "a.html"), ("B", "b.html")]),
            ],
            Attributes::new(),
        );

        assert_eq!(
            hrefs(&nav),
            ["index.html", "index.html", "only.html", "#", "a.html", "b.html"]
        );
        assert_eq!(nav.find("li").len(), 5);
        assert_eq!(nav.find("ul").len(), 2);
    }

    #[test]
    fn test_navbar_class_overrides_caller() {
        let nav = navbar("B", "/", &[], attrs! { "class_" => "mine", "id" => "top" });
        let attrs = nav.attrs();

        assert_eq!(attrs.get_attribute("class"), Some("navbar navbar-default"));
        assert_eq!(attrs.get_attribute("id"), Some("top"));
    }

    #[test]
    fn test_set_level_rewrites_relative_only() {
        let mut nav = navbar(
            "Viewer",
            "../index.html",
            &[
                NavEntry::link("Abs", "/abs.html"),
                NavEntry::menu("M", [("X", "../x.html"), ("Y", "y.html")]),
            ],
            Attributes::new(),
        );

        assert_eq!(set_level(&mut nav, 2), 3);
        assert_eq!(
            hrefs(&nav),
            ["../../index.html", "/abs.html", "#", "../../x.html", "../../y.html"]
        );
    }

    #[test]
    fn test_set_level_is_repeatable() {
        let mut nav = navbar("V", "index.html", &[], Attributes::new());
        set_level(&mut nav, 3);
        set_level(&mut nav, 1);
        assert_eq!(hrefs(&nav), ["../index.html"]);
    }
}

//! tagloom widgets
//!
//! Composite page pieces built purely on the `tagloom-html` node API:
//! tables, a Bootstrap navbar with dropdown menus, and relative link
//! rebasing for pages written at different directory depths.
//!
//! # Example
//! ```
//! use tagloom_html::{Attributes, Document};
//! use tagloom_widgets::{navbar, set_level, NavEntry};
//!
//! let mut nav = navbar("Viewer", "index.html", &[NavEntry::link("Runs", "runs.html")], Attributes::new());
//! set_level(&mut nav, 1);
//!
//! let mut doc = Document::new(Some("Run 1"), 1);
//! doc.append(nav);
//! assert!(doc.build().unwrap().contains(r#"<a href="../runs.html">Runs</a>"#));
//! ```

mod navbar;
mod paths;
mod table;

pub use navbar::{dropdown, link, navbar, set_level, NavEntry};
pub use paths::{is_relative, rebase_href};
pub use table::{table, table_cell, table_header, table_row, Row, TableExt};

/// Create a `<span>`
pub fn span(attrs: tagloom_html::Attributes) -> tagloom_html::Node {
    tagloom_html::Node::with_attrs("span", attrs)
}

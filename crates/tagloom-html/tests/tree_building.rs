//! Tree building tests for tagloom-html
//!
//! Builds trees through the public API and checks the serialized markup.

use tagloom_html::fragment::tokenize;
use tagloom_html::{attrs, Attributes, BuildError, Document, MarkupEvent, Node};

fn start_tags(html: &str) -> Vec<(String, Vec<(String, String)>)> {
    tokenize(html)
        .into_iter()
        .filter_map(|event| match event {
            MarkupEvent::Start { name, attrs } => Some((
                name,
                attrs.iter().map(|a| (a.name.clone(), a.value.clone())).collect(),
            )),
            _ => None,
        })
        .collect()
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_well_formed_tree_round_trips() {
    let mut root = Node::with_attrs("div", attrs! { "id" => "main", "class_" => "wrap" });
    let list = root.append_tag("ul", attrs! { "data" => [("role", "menu"), ("depth", "1")] });
    for label in ["one", "two"] {
        list.append_tag("li", Attributes::new())
            .append_tag("a", attrs! { "href" => format!("{label}.html") })
            .append(label);
    }
    root.append_tag("img", attrs! { "src" => "x.png", "alt" => "x & y" });

    let html = root.build().unwrap();
    let tags = start_tags(&html);

    let names: Vec<_> = tags.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["div", "ul", "li", "a", "li", "a", "img"]);
    assert_eq!(
        tags[0].1,
        [("id".to_string(), "main".to_string()), ("class".to_string(), "wrap".to_string())]
    );
    assert_eq!(
        tags[1].1,
        [
            ("data-role".to_string(), "menu".to_string()),
            ("data-depth".to_string(), "1".to_string())
        ]
    );
    assert_eq!(tags[6].1[1], ("alt".to_string(), "x & y".to_string()));
}

#[test]
fn test_void_elements_have_no_end_tag() {
    let mut p = Node::new("p");
    p.append("line");
    p.append_tag("br", Attributes::new());
    p.append("next");

    assert_eq!(p.build().unwrap(), "<p>line<br>next</p>");
}

// ============================================================================
// FRAGMENT REPAIR
// ============================================================================

#[test]
fn test_fragment_out_of_order_close() {
    let mut div = Node::new("div");
    div.append_formatted("<b><i>text</b> tail");

    assert_eq!(div.build().unwrap(), "<div><b><i>text</i></b> tail</div>");
}

#[test]
fn test_fragment_cannot_close_outer_element() {
    let mut outer = Node::new("section");
    let inner = outer.append_tag("div", Attributes::new());
    inner.append_formatted("<p>ok</p></div></section>");
    outer.append("still inside");

    let html = outer.build().unwrap();
    assert_eq!(
        html,
        "<section><div>&lt;p&gt;ok&lt;/p&gt;&lt;/div&gt;&lt;/section&gt;</div>still inside</section>"
    );
}

#[test]
fn test_fragment_failure_leaves_siblings_intact() {
    let mut table = Node::new("table");
    let row = table.append_tag("tr", Attributes::new());
    row.append_tag("td", Attributes::new()).append_formatted("</td>broken");
    row.append_tag("td", Attributes::new()).append_formatted("<em>fine");

    assert_eq!(
        table.build().unwrap(),
        "<table><tr><td>&lt;/td&gt;broken</td><td><em>fine</em></td></tr></table>"
    );
}

#[test]
fn test_failed_fragment_cannot_escape_style_or_script() {
    for parent in ["style", "script"] {
        let mut div = Node::new("div");
        div.append_tag(parent, Attributes::new())
            .append_formatted(format!("</{parent}><img src=x onerror=alert(1)>"));
        div.append("after");

        let html = div.build().unwrap();
        assert_eq!(
            html,
            format!(
                "<div><{parent}>&lt;/{parent}&gt;&lt;img src=x onerror=alert(1)&gt;</{parent}>after</div>"
            )
        );
        assert!(!start_tags(&html).iter().any(|(name, _)| name == "img"));
    }
}

#[test]
fn test_fragment_entities_stay_escaped() {
    let mut p = Node::new("p");
    p.append_formatted("a &lt; b &amp;&amp; <code>x</code>");

    assert_eq!(p.build().unwrap(), "<p>a &lt; b &amp;&amp; <code>x</code></p>");
}

#[test]
fn test_fragment_attributes_are_kept() {
    let mut p = Node::new("p");
    p.append_formatted(r#"<a href="/x?a=1&amp;b=2" title='say "hi"'>x</a>"#);

    assert_eq!(
        p.build().unwrap(),
        r#"<p><a href="/x?a=1&amp;b=2" title="say &quot;hi&quot;">x</a></p>"#
    );
}

#[test]
fn test_empty_fragment() {
    let mut p = Node::new("p");
    p.append_formatted("");
    assert_eq!(p.build().unwrap(), "<p></p>");
}

// ============================================================================
// STRUCTURAL QUERIES
// ============================================================================

#[test]
fn test_find_nested_anchors_in_pre_order() {
    let mut root = Node::new("div");
    root.append_tag("a", attrs! { "id" => "1" })
        .append_tag("span", Attributes::new())
        .append_tag("a", attrs! { "id" => "2" });
    root.append_tag("p", Attributes::new())
        .append_tag("a", attrs! { "id" => "3" });

    let ids: Vec<_> = root.find("a").into_iter().filter_map(|a| a.attribute("id")).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn test_find_ignores_formatted_markup() {
    let mut root = Node::new("div");
    root.append_formatted("<a href='x'>x</a>");
    assert!(root.find("a").is_empty());
}

// ============================================================================
// DOCUMENT
// ============================================================================

#[test]
fn test_document_level_two_paths() {
    let doc = Document::new(None, 2);
    for path in doc.scripts().iter().chain(doc.stylesheets()) {
        let parents = path.split('/').take_while(|s| *s == "..").count();
        assert_eq!(parents, 2, "{path}");
    }
}

#[test]
fn test_document_level_zero_paths() {
    let doc = Document::new(None, 0);
    assert!(doc.scripts().iter().all(|p| !p.starts_with("..")));
    assert!(doc.stylesheets().iter().all(|p| p.starts_with("viewer/")));
}

#[test]
fn test_document_body_and_doctype() {
    let mut doc = Document::new(Some("A & B"), 0);
    doc.append_tag("h1", Attributes::new()).append("Title");
    doc.append_formatted("<p>unclosed");

    let html = doc.build().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>\n<html><head><title>A &amp; B</title>"));
    assert!(html.ends_with("</head><body><h1>Title</h1><p>unclosed</p></body></html>"));
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_strict_normalization_error_message() {
    let bag = attrs! { "class" => "a", "class_" => "b" };
    let err = bag.try_normalize().unwrap_err();
    assert_eq!(err, BuildError::AttributeCollision { name: "class".into() });
    assert_eq!(err.to_string(), "Attribute 'class' given more than once");
}

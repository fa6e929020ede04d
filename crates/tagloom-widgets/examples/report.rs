//! Example: write a small two-level report site to stdout
//!
//! Run with `RUST_LOG=debug` to see build logging.

use tagloom_html::{attrs, AssetManifest, Attributes, Document};
use tagloom_widgets::{navbar, set_level, table, NavEntry, TableExt};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let manifest = match std::env::args().nth(1) {
        Some(path) => AssetManifest::load_from_file(path)?,
        None => AssetManifest::default(),
    };

    let entries = [
        NavEntry::link("Summary", "index.html"),
        NavEntry::menu("Runs", [("Nightly", "runs/nightly.html")]),
    ];

    for (level, name) in [(0, "index.html"), (1, "runs/nightly.html")] {
        let mut nav = navbar("Report", "index.html", &entries, Attributes::new());
        set_level(&mut nav, level);

        let mut doc = Document::with_manifest(Some(name), level, &manifest);
        doc.append(nav);

        let mut results = table(attrs! { "class_" => "table" });
        let mut header = results.append_header(Attributes::new());
        header.append_cell("Check", Attributes::new());
        header.append_cell("Notes", Attributes::new());
        let mut row = results.append_row(Attributes::new());
        row.append_cell("parser", Attributes::new());
        row.append_cell("", Attributes::new())
            .append_formatted("<b>3 warnings</b><ul><li>unclosed list");
        doc.append(results);

        println!("==> {name}");
        println!("{}", doc.build()?);
    }

    Ok(())
}

//! Tables
//!
//! `table > tr > td|th` builders. A row is a borrowed view that remembers
//! which cell tag it takes, so header rows need no node type of their own.

use tagloom_html::{Attributes, Child, Node};

/// Create a `<table>`
pub fn table(attrs: Attributes) -> Node {
    Node::with_attrs("table", attrs)
}

/// Create a `<tr>`
pub fn table_row(attrs: Attributes) -> Node {
    Node::with_attrs("tr", attrs)
}

/// Create a `<td>` holding `child`
pub fn table_cell(child: impl Into<Child>, attrs: Attributes) -> Node {
    let mut cell = Node::with_attrs("td", attrs);
    cell.append(child);
    cell
}

/// Create a `<th>` holding `child`
pub fn table_header(child: impl Into<Child>, attrs: Attributes) -> Node {
    let mut cell = Node::with_attrs("th", attrs);
    cell.append(child);
    cell
}

/// Row being populated
#[derive(Debug)]
pub struct Row<'a> {
    node: &'a mut Node,
    header: bool,
}

impl<'a> Row<'a> {
    /// Wrap an existing `<tr>`
    pub fn new(node: &'a mut Node, header: bool) -> Self {
        Self { node, header }
    }

    /// Whether cells are `<th>`
    pub fn is_header(&self) -> bool {
        self.header
    }

    /// Wrap `child` in a cell and append it
    pub fn append_cell(&mut self, child: impl Into<Child>, attrs: Attributes) -> &mut Node {
        let cell = if self.header {
            table_header(child, attrs)
        } else {
            table_cell(child, attrs)
        };
        self.node.append_node(cell)
    }

    pub fn node(&mut self) -> &mut Node {
        self.node
    }
}

/// Row operations on a `<table>` node
pub trait TableExt {
    /// Append a data row
    fn append_row(&mut self, attrs: Attributes) -> Row<'_>;
    /// Append a header row
    fn append_header(&mut self, attrs: Attributes) -> Row<'_>;
}

impl TableExt for Node {
    fn append_row(&mut self, attrs: Attributes) -> Row<'_> {
        Row::new(self.append_node(table_row(attrs)), false)
    }

    fn append_header(&mut self, attrs: Attributes) -> Row<'_> {
        Row::new(self.append_node(table_row(attrs)), true)
    }
}

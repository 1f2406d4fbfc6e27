//! Renderer-agnostic layout model.
//!
//! The compositor produces a [`LayoutTable`] describing rows, cells, spans
//! and icon placement. Nothing in here knows about HTML; the web renderer
//! translates this into actual markup.

/// What a cell is, structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRole {
    /// Column header cell.
    Header,
    /// Regular data cell.
    Data,
    /// Blank padding cell keeping columns aligned.
    Spacer,
}

/// One piece of cell content, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellPart {
    Text(String),
    /// A semantic icon reference. `id` is the icon identifier resolved from
    /// the configured tables; `class` tags its purpose for styling.
    Icon { id: String, class: &'static str },
}

/// A single cell of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub parts: Vec<CellPart>,
    pub role: CellRole,
    /// Semantic tag for styling ("stopname", "line", "time", ...).
    pub class: &'static str,
    /// Horizontal span; `None` means a single column.
    pub col_span: Option<u32>,
}

impl Cell {
    /// A data cell holding plain text.
    pub fn text(content: impl Into<String>, class: &'static str) -> Self {
        Self {
            parts: vec![CellPart::Text(content.into())],
            role: CellRole::Data,
            class,
            col_span: None,
        }
    }

    /// A header cell holding plain text.
    pub fn header(content: impl Into<String>) -> Self {
        Self {
            parts: vec![CellPart::Text(content.into())],
            role: CellRole::Header,
            class: "header",
            col_span: None,
        }
    }

    /// A data cell with no content yet; icons get appended by the caller.
    pub fn empty(class: &'static str) -> Self {
        Self {
            parts: Vec::new(),
            role: CellRole::Data,
            class,
            col_span: None,
        }
    }

    /// An empty padding cell.
    pub fn spacer() -> Self {
        Self {
            parts: Vec::new(),
            role: CellRole::Spacer,
            class: "spacer",
            col_span: None,
        }
    }

    pub fn with_col_span(mut self, span: u32) -> Self {
        self.col_span = Some(span);
        self
    }

    /// Insert an icon before the existing content.
    ///
    /// Repeated prepends keep their call order: the first prepended icon
    /// stays leftmost.
    pub fn prepend_icon(&mut self, id: impl Into<String>, class: &'static str) {
        let at = self
            .parts
            .iter()
            .position(|p| matches!(p, CellPart::Text(_)))
            .unwrap_or(self.parts.len());
        self.parts.insert(
            at,
            CellPart::Icon {
                id: id.into(),
                class,
            },
        );
    }

    /// Append an icon after the existing content.
    pub fn append_icon(&mut self, id: impl Into<String>, class: &'static str) {
        self.parts.push(CellPart::Icon {
            id: id.into(),
            class,
        });
    }
}

/// One row of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Total cell count, ignoring spans.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The complete board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTable {
    /// Semantic tag for styling the table as a whole.
    pub class: &'static str,
    pub rows: Vec<Row>,
}

impl LayoutTable {
    pub fn new(class: &'static str) -> Self {
        Self {
            class,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepend_keeps_icons_before_text_in_call_order() {
        let mut cell = Cell::text("Dam", "stopname");
        cell.prepend_icon("sign", "timingpointicon");
        cell.prepend_icon("wheelchair", "accessibilityicon");

        assert_eq!(
            cell.parts,
            vec![
                CellPart::Icon {
                    id: "sign".to_string(),
                    class: "timingpointicon"
                },
                CellPart::Icon {
                    id: "wheelchair".to_string(),
                    class: "accessibilityicon"
                },
                CellPart::Text("Dam".to_string()),
            ]
        );
    }

    #[test]
    fn append_places_icon_after_text() {
        let mut cell = Cell::text("18", "line");
        cell.append_icon("wheelchair", "accessibilityicon");

        assert!(matches!(cell.parts[0], CellPart::Text(_)));
        assert!(matches!(cell.parts[1], CellPart::Icon { .. }));
    }

    #[test]
    fn spacer_has_no_content() {
        let cell = Cell::spacer();
        assert!(cell.parts.is_empty());
        assert_eq!(cell.role, CellRole::Spacer);
    }

    #[test]
    fn col_span_builder() {
        let cell = Cell::text("Dam", "stopname").with_col_span(6);
        assert_eq!(cell.col_span, Some(6));
    }
}

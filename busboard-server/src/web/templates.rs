//! Askama templates and their view models.
//!
//! View models flatten the abstract [`LayoutTable`] into strings the
//! templates can loop over without logic: header cells become `<th>`,
//! spacers get a non-breaking space, icon parts carry their final CSS
//! class list.

use askama::Template;

use crate::board::{BoardContent, Cell, CellPart, CellRole, LayoutTable};
use crate::translate::{self, Language};

/// Full board page.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardPageTemplate {
    pub board: BoardView,
    /// Page auto-refresh period in seconds.
    pub refresh_secs: u64,
}

/// Board fragment for polling clients.
#[derive(Template)]
#[template(path = "board_fragment.html")]
pub struct BoardFragmentTemplate {
    pub board: BoardView,
}

/// Either a rendered table or a translated diagnostic message.
pub struct BoardView {
    pub message: Option<&'static str>,
    pub table: Option<TableView>,
}

impl BoardView {
    pub fn from_content(content: BoardContent, lang: Language) -> Self {
        match content {
            BoardContent::Message(msg) => Self {
                message: Some(translate::message(lang, msg)),
                table: None,
            },
            BoardContent::Table(table) => Self {
                message: None,
                table: Some(TableView::from_layout(&table)),
            },
        }
    }
}

pub struct TableView {
    pub class: &'static str,
    pub rows: Vec<RowView>,
}

impl TableView {
    fn from_layout(table: &LayoutTable) -> Self {
        Self {
            class: table.class,
            rows: table
                .rows
                .iter()
                .map(|row| RowView {
                    cells: row.cells.iter().map(CellView::from_cell).collect(),
                })
                .collect(),
        }
    }
}

pub struct RowView {
    pub cells: Vec<CellView>,
}

pub struct CellView {
    /// "td" or "th".
    pub tag: &'static str,
    pub class: &'static str,
    /// 0 means no colspan attribute.
    pub col_span: u32,
    pub parts: Vec<PartView>,
}

impl CellView {
    fn from_cell(cell: &Cell) -> Self {
        let tag = match cell.role {
            CellRole::Header => "th",
            CellRole::Data | CellRole::Spacer => "td",
        };

        let mut parts: Vec<PartView> = cell.parts.iter().map(PartView::from_part).collect();
        if cell.role == CellRole::Spacer && parts.is_empty() {
            parts.push(PartView {
                is_icon: false,
                text: "\u{a0}".to_string(),
                class: String::new(),
            });
        }

        Self {
            tag,
            class: cell.class,
            col_span: cell.col_span.unwrap_or(0),
            parts,
        }
    }
}

pub struct PartView {
    pub is_icon: bool,
    /// Text content, or the icon id for icon parts.
    pub text: String,
    /// Extra CSS classes for icon parts.
    pub class: String,
}

impl PartView {
    fn from_part(part: &CellPart) -> Self {
        match part {
            CellPart::Text(text) => Self {
                is_icon: false,
                text: text.clone(),
                class: String::new(),
            },
            CellPart::Icon { id, class } => Self {
                is_icon: true,
                text: id.clone(),
                class: (*class).to_string(),
            },
        }
    }
}

//! User-visible strings for board messages and column headers.
//!
//! The board compositor returns structured values ([`BoardMessage`],
//! [`HeaderLabel`]); this module maps them to display text in the
//! configured language.

use serde::Deserialize;

use crate::board::BoardMessage;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
    It,
}

/// Column header labels for the large display tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLabel {
    Line,
    Destination,
    StopName,
    Departure,
}

/// Display text for a board message.
pub fn message(lang: Language, msg: BoardMessage) -> &'static str {
    match (lang, msg) {
        (Language::En, BoardMessage::NotConfigured) => "No stop or stop area configured.",
        (Language::En, BoardMessage::InvalidDisplayMode) => "Invalid display mode.",
        (Language::En, BoardMessage::FetchFailed) => "Could not fetch departures.",
        (Language::En, BoardMessage::Loading) => "Loading\u{2026}",
        (Language::En, BoardMessage::NoData) => "No departure information.",

        (Language::Nl, BoardMessage::NotConfigured) => "Geen halte of haltegebied ingesteld.",
        (Language::Nl, BoardMessage::InvalidDisplayMode) => "Ongeldige weergavemodus.",
        (Language::Nl, BoardMessage::FetchFailed) => "Kon vertrektijden niet ophalen.",
        (Language::Nl, BoardMessage::Loading) => "Laden\u{2026}",
        (Language::Nl, BoardMessage::NoData) => "Geen vertrekinformatie.",

        (Language::It, BoardMessage::NotConfigured) => "Nessuna fermata configurata.",
        (Language::It, BoardMessage::InvalidDisplayMode) => {
            "Modalit\u{e0} di visualizzazione non valida."
        }
        (Language::It, BoardMessage::FetchFailed) => "Impossibile recuperare le partenze.",
        (Language::It, BoardMessage::Loading) => "Caricamento\u{2026}",
        (Language::It, BoardMessage::NoData) => "Nessuna informazione sulle partenze.",
    }
}

/// Display text for a column header.
pub fn header(lang: Language, label: HeaderLabel) -> &'static str {
    match (lang, label) {
        (Language::En, HeaderLabel::Line) => "Line",
        (Language::En, HeaderLabel::Destination) => "Destination",
        (Language::En, HeaderLabel::StopName) => "Stop",
        (Language::En, HeaderLabel::Departure) => "Departure",

        (Language::Nl, HeaderLabel::Line) => "Lijn",
        (Language::Nl, HeaderLabel::Destination) => "Bestemming",
        (Language::Nl, HeaderLabel::StopName) => "Halte",
        (Language::Nl, HeaderLabel::Departure) => "Vertrek",

        (Language::It, HeaderLabel::Line) => "Linea",
        (Language::It, HeaderLabel::Destination) => "Destinazione",
        (Language::It, HeaderLabel::StopName) => "Fermata",
        (Language::It, HeaderLabel::Departure) => "Partenza",
    }
}

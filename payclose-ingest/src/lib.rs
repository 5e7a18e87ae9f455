//! payclose-ingest: card-snapshot acquisition for the cycle engine —
//! backend JSON exports, hand-maintained CSV sheets, and the backend
//! REST API. Every path validates profiles before handing them over.

pub mod api;
pub mod backend_json;
pub mod cards_csv;

pub use api::ApiSource;
pub use backend_json::{CardRecord, parse_cards_json};
pub use cards_csv::{parse_cards_csv, parse_cards_csv_file};

//! Actions: intents from the screens and results from the loaders

use serde::{Deserialize, Serialize};

use crate::state::{EntitySummary, Profile};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    // ===== Collection category =====
    /// List screen became active: rebuild the collection from scratch
    CollectionFetch,
    CollectionDidLoad(Vec<EntitySummary>),
    CollectionDidError(String),

    // ===== Page category =====
    PageNext,
    PagePrev,
    PageFirst,
    PageLast,
    /// 1-based; out-of-range targets are ignored
    PageGoto(usize),

    SelectionMove(i16),

    // ===== Nav category =====
    /// Open the detail screen; `None` means no name was handed over
    NavDetail(Option<String>),
    NavBack,

    // ===== Detail category =====
    DetailDidLoad { name: String, profile: Profile },
    DetailDidError { name: String, error: String },

    // ===== UI category =====
    UiToggleShiny,

    // ===== Uncategorized (global) =====
    Tick,
    Quit,
}

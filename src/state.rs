//! Application state - records, routes and screen resources

use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::pagination::{self, PageTransition};

/// One row of the list screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub name: String,
    pub id: u32,
    pub image_url: String,
    pub categories: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatValue {
    pub name: String,
    pub base_value: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageVariants {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
    pub back_shiny: Option<String>,
    pub official_artwork: Option<String>,
    pub official_artwork_shiny: Option<String>,
}

impl ImageVariants {
    /// Official artwork first, then the front sprite; shiny falls back to the plain variant.
    pub fn preferred(&self, shiny: bool) -> &str {
        let shiny_pick = if shiny {
            self.official_artwork_shiny
                .as_deref()
                .or(self.front_shiny.as_deref())
        } else {
            None
        };
        shiny_pick
            .or(self.official_artwork.as_deref())
            .or(self.front_default.as_deref())
            .unwrap_or("")
    }
}

/// Full record behind the detail screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityDetail {
    pub id: u32,
    pub name: String,
    /// Decimeters
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    pub base_experience: Option<u32>,
    pub categories: Vec<String>,
    pub stats: Vec<StatValue>,
    pub abilities: Vec<Ability>,
    pub images: ImageVariants,
}

impl EntityDetail {
    pub fn height_m(&self) -> f32 {
        crate::detail::decimeters_to_meters(self.height)
    }

    pub fn weight_kg(&self) -> f32 {
        crate::detail::hectograms_to_kilograms(self.weight)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub habitat: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub detail: EntityDetail,
    pub species: SpeciesInfo,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Route {
    #[default]
    List,
    /// `None` when navigation carried no name; nothing is loaded.
    Detail { name: Option<String> },
}

impl Route {
    pub fn detail_name(&self) -> Option<&str> {
        match self {
            Route::Detail { name } => name.as_deref(),
            Route::List => None,
        }
    }
}

pub const TICK_MS: u64 = 30;
pub const DEFAULT_FETCH_LIMIT: usize = 100;

#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    #[debug(section = "Route", label = "Current", debug_fmt)]
    pub route: Route,

    /// List lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Collection", label = "Data", debug_fmt)]
    pub collection: DataResource<Vec<EntitySummary>>,

    #[debug(section = "Collection", label = "Page")]
    pub page: usize,

    #[debug(section = "Collection", label = "Page size")]
    pub page_size: usize,

    #[debug(section = "Collection", label = "Fetch limit")]
    pub fetch_limit: usize,

    /// Cursor inside the visible page
    #[debug(section = "Collection", label = "Cursor")]
    pub cursor: usize,

    #[debug(section = "Collection", label = "Transition", debug_fmt)]
    pub transition: Option<PageTransition>,

    #[debug(skip)]
    pub animate_pages: bool,

    #[debug(section = "Detail", label = "Data", debug_fmt)]
    pub detail: DataResource<Profile>,

    #[debug(section = "Detail", label = "Shiny")]
    pub shiny: bool,

    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(fetch_limit: usize, page_size: usize, animate_pages: bool) -> Self {
        Self {
            route: Route::List,
            collection: DataResource::Empty,
            page: 1,
            page_size: page_size.max(1),
            fetch_limit,
            cursor: 0,
            transition: None,
            animate_pages,
            detail: DataResource::Empty,
            shiny: false,
            tick_count: 0,
        }
    }

    pub fn entities(&self) -> &[EntitySummary] {
        self.collection.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.entities().len(), self.page_size)
    }

    pub fn visible(&self) -> &[EntitySummary] {
        pagination::visible_slice(self.entities(), self.page, self.page_size)
    }

    pub fn selected_entity(&self) -> Option<&EntitySummary> {
        self.visible().get(self.cursor)
    }

    pub fn is_loading(&self) -> bool {
        self.collection.is_loading() || self.detail.is_loading()
    }

    /// Content opacity of the list body, 1.0 outside transitions
    pub fn list_opacity(&self) -> f32 {
        self.transition
            .as_ref()
            .map(PageTransition::opacity)
            .unwrap_or(1.0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_LIMIT, pagination::DEFAULT_PAGE_SIZE, true)
    }
}

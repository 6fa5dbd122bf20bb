//! Screen rendering through RenderHarness

use pokedex::{
    components::{Component, DetailView, DetailViewProps, DexList, DexListProps},
    state::{
        Ability, AppState, EntityDetail, EntitySummary, ImageVariants, Profile, Route,
        SpeciesInfo, StatValue,
    },
};
use tui_dispatch::{testing::*, DataResource};

fn render_list(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = DexList;
    render.render_to_string_plain(|frame| {
        let props = DexListProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn render_detail(state: &AppState) -> String {
    let mut render = RenderHarness::new(90, 30);
    let mut component = DetailView;
    render.render_to_string_plain(|frame| {
        let props = DetailViewProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn collection(count: u32) -> Vec<EntitySummary> {
    (1..=count)
        .map(|id| EntitySummary {
            name: format!("mon-{id}"),
            id,
            image_url: String::new(),
            categories: vec!["fire".into()],
        })
        .collect()
}

fn bulbasaur() -> Profile {
    Profile {
        detail: EntityDetail {
            id: 1,
            name: "bulbasaur".into(),
            height: 7,
            weight: 69,
            base_experience: Some(64),
            categories: vec!["grass".into(), "poison".into()],
            stats: vec![
                StatValue {
                    name: "hp".into(),
                    base_value: 45,
                },
                StatValue {
                    name: "special-attack".into(),
                    base_value: 65,
                },
            ],
            abilities: vec![
                Ability {
                    name: "overgrow".into(),
                    is_hidden: false,
                },
                Ability {
                    name: "chlorophyll".into(),
                    is_hidden: true,
                },
            ],
            images: ImageVariants {
                front_default: Some("front.png".into()),
                front_shiny: Some("front-shiny.png".into()),
                ..Default::default()
            },
        },
        species: SpeciesInfo {
            name: "bulbasaur".into(),
            description: "A strange seed was planted on its back at birth.".into(),
            category: Some("Seed Pokémon".into()),
            habitat: Some("grassland".into()),
        },
    }
}

fn detail_state(detail: DataResource<Profile>) -> AppState {
    AppState {
        route: Route::Detail {
            name: Some("bulbasaur".into()),
        },
        detail,
        ..Default::default()
    }
}

#[test]
fn test_render_list_page_header() {
    let state = AppState {
        collection: DataResource::Loaded(collection(25)),
        page: 3,
        ..Default::default()
    };

    let output = render_list(&state, 70, 20);

    assert!(output.contains("Page 3/3"), "header missing:\n{output}");
    assert!(output.contains("25 entries"));
    assert!(output.contains("Mon 21"));
    assert!(output.contains("FIRE"));
    assert!(!output.contains("Mon 11"), "previous page leaked:\n{output}");
}

#[test]
fn test_render_list_shows_art_of_selected_row() {
    let entries = (1..=3)
        .map(|id| EntitySummary {
            name: format!("mon-{id}"),
            id,
            image_url: format!("https://img.test/{id}.png"),
            categories: vec!["water".into()],
        })
        .collect();
    let state = AppState {
        collection: DataResource::Loaded(entries),
        cursor: 1,
        ..Default::default()
    };

    let output = render_list(&state, 80, 16);

    assert!(output.contains("Art https://img.test/2.png"), "{output}");
    assert!(!output.contains("img.test/1.png"));
}

#[test]
fn test_render_list_loading() {
    let state = AppState {
        collection: DataResource::Loading,
        ..Default::default()
    };

    let output = render_list(&state, 60, 16);

    assert!(output.contains("Loading pokedex"), "{output}");
    assert!(output.contains("Page 1/1"));
}

#[test]
fn test_render_list_error() {
    let state = AppState {
        collection: DataResource::Failed("list request failed: HTTP 503".into()),
        ..Default::default()
    };

    let output = render_list(&state, 70, 16);

    assert!(output.contains("Error loading pokedex"));
    assert!(output.contains("HTTP 503"), "{output}");
}

#[test]
fn test_render_empty_collection() {
    let state = AppState {
        collection: DataResource::Loaded(Vec::new()),
        ..Default::default()
    };

    let output = render_list(&state, 60, 16);

    assert!(output.contains("No entries."));
    assert!(output.contains("Page 1/1"));
}

#[test]
fn test_render_detail_profile() {
    let state = detail_state(DataResource::Loaded(bulbasaur()));

    let output = render_detail(&state);

    assert!(output.contains("Bulbasaur"), "{output}");
    assert!(output.contains("Seed Pokémon"));
    assert!(output.contains("0.7 m"));
    assert!(output.contains("6.9 kg"));
    assert!(output.contains("Grassland"));
    assert!(output.contains("Chlorophyll (hidden)"));
    assert!(output.contains("Sp. Atk"));
    assert!(output.contains("A strange seed"));
    assert!(output.contains("front.png"));
}

#[test]
fn test_render_shiny_uses_shiny_art() {
    let mut state = detail_state(DataResource::Loaded(bulbasaur()));
    state.shiny = true;

    let output = render_detail(&state);

    assert!(output.contains("front-shiny.png"), "{output}");
}

#[test]
fn test_render_detail_failure() {
    let state = detail_state(DataResource::Failed(
        "species request failed: HTTP 404".into(),
    ));

    let output = render_detail(&state);

    assert!(output.contains("Error loading Bulbasaur"), "{output}");
    assert!(output.contains("species request failed"));
}

#[test]
fn test_render_detail_loading() {
    let state = detail_state(DataResource::Loading);

    let output = render_detail(&state);

    assert!(output.contains("Loading Bulbasaur"), "{output}");
}

#[test]
fn test_render_missing_description() {
    let mut profile = bulbasaur();
    profile.species.description.clear();
    let state = detail_state(DataResource::Loaded(profile));

    let output = render_detail(&state);

    assert!(output.contains("No description available."));
}

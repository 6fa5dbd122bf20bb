//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::pagination::{self, PageTransition, TransitionStep};
use crate::state::{AppState, Route};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Collection actions =====
        Action::CollectionFetch => {
            state.collection = DataResource::Loading;
            state.page = 1;
            state.cursor = 0;
            state.transition = None;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::LoadCollection {
                limit: state.fetch_limit,
            })
        }

        Action::CollectionDidLoad(entries) => {
            if !state.collection.is_loading() {
                return DispatchResult::unchanged();
            }
            state.collection = DataResource::Loaded(entries);
            state.page = 1;
            state.cursor = 0;
            DispatchResult::changed()
        }

        Action::CollectionDidError(error) => {
            if !state.collection.is_loading() {
                return DispatchResult::unchanged();
            }
            state.collection = DataResource::Failed(error);
            DispatchResult::changed()
        }

        // ===== Page actions =====
        Action::PageNext => {
            let len = state.entities().len();
            match pagination::offset_page(len, state.page_size, state.page, 1) {
                Some(target) => change_page(state, target),
                None => DispatchResult::unchanged(),
            }
        }

        Action::PagePrev => {
            let len = state.entities().len();
            match pagination::offset_page(len, state.page_size, state.page, -1) {
                Some(target) => change_page(state, target),
                None => DispatchResult::unchanged(),
            }
        }

        Action::PageFirst => change_page(state, 1),
        Action::PageLast => {
            let last = state.total_pages();
            change_page(state, last)
        }
        Action::PageGoto(target) => change_page(state, target),

        Action::SelectionMove(delta) => {
            let count = state.visible().len();
            if count == 0 {
                return DispatchResult::unchanged();
            }
            let index = (state.cursor as i64 + i64::from(delta)).clamp(0, count as i64 - 1) as usize;
            if index == state.cursor {
                return DispatchResult::unchanged();
            }
            state.cursor = index;
            DispatchResult::changed()
        }

        // ===== Navigation actions =====
        Action::NavDetail(name) => {
            let name = name.filter(|name| !name.trim().is_empty());
            if let Route::Detail { name: current } = &state.route {
                if *current == name && !state.detail.is_failed() {
                    return DispatchResult::unchanged();
                }
            }
            state.route = Route::Detail { name: name.clone() };
            state.shiny = false;
            match name {
                Some(name) => {
                    state.detail = DataResource::Loading;
                    state.tick_count = 0;
                    DispatchResult::changed_with(Effect::LoadDetail { name })
                }
                None => {
                    state.detail = DataResource::Empty;
                    DispatchResult::changed()
                }
            }
        }

        Action::NavBack => {
            if state.route == Route::List {
                return DispatchResult::unchanged();
            }
            state.route = Route::List;
            state.detail = DataResource::Empty;
            state.shiny = false;
            DispatchResult::changed_with(Effect::CancelDetail)
        }

        // ===== Detail actions =====
        Action::DetailDidLoad { name, profile } => {
            if !awaiting_detail(state, &name) {
                return DispatchResult::unchanged();
            }
            state.detail = DataResource::Loaded(profile);
            DispatchResult::changed()
        }

        Action::DetailDidError { name, error } => {
            if !awaiting_detail(state, &name) {
                return DispatchResult::unchanged();
            }
            state.detail = DataResource::Failed(error);
            DispatchResult::changed()
        }

        // ===== UI actions =====
        Action::UiToggleShiny => {
            if !state.detail.is_loaded() {
                return DispatchResult::unchanged();
            }
            state.shiny = !state.shiny;
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Tick => {
            let mut changed = false;
            if let Some(transition) = state.transition.as_mut() {
                match transition.advance() {
                    TransitionStep::Running => {}
                    TransitionStep::Swap { target } => {
                        state.cursor = 0;
                        state.page = target;
                    }
                    TransitionStep::Finished => state.transition = None,
                }
                changed = true;
            }
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                changed = true;
            }
            if changed {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

fn change_page(state: &mut AppState, target: usize) -> DispatchResult<Effect> {
    let len = state.entities().len();
    if !state.collection.is_loaded()
        || state.transition.is_some()
        || target == state.page
        || !pagination::is_valid_page(len, state.page_size, target)
    {
        return DispatchResult::unchanged();
    }
    if state.animate_pages {
        state.transition = Some(PageTransition::start(target));
    } else {
        state.cursor = 0;
        state.page = target;
    }
    DispatchResult::changed()
}

/// Results for a screen that is gone, or for another name, are dropped.
fn awaiting_detail(state: &AppState, name: &str) -> bool {
    state.route.detail_name() == Some(name) && state.detail.is_loading()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::FADE_TICKS;
    use crate::state::EntitySummary;

    fn entries(count: u32) -> Vec<EntitySummary> {
        (1..=count)
            .map(|id| EntitySummary {
                name: format!("mon-{id}"),
                id,
                image_url: String::new(),
                categories: vec!["normal".into()],
            })
            .collect()
    }

    fn loaded(count: u32, animate: bool) -> AppState {
        AppState {
            collection: DataResource::Loaded(entries(count)),
            animate_pages: animate,
            ..Default::default()
        }
    }

    #[test]
    fn test_collection_fetch_sets_loading() {
        let mut state = loaded(25, false);
        state.page = 3;
        state.cursor = 4;

        let result = reducer(&mut state, Action::CollectionFetch);

        assert!(result.changed);
        assert!(state.collection.is_loading());
        assert_eq!(state.page, 1);
        assert_eq!(state.cursor, 0);
        assert_eq!(result.effects, vec![Effect::LoadCollection { limit: 100 }]);
    }

    #[test]
    fn test_late_collection_result_is_ignored() {
        let mut state = loaded(3, false);
        let result = reducer(&mut state, Action::CollectionDidLoad(entries(10)));
        assert!(!result.changed);
        assert_eq!(state.entities().len(), 3);

        let result = reducer(&mut state, Action::CollectionDidError("late".into()));
        assert!(!result.changed);
        assert!(state.collection.is_loaded());
    }

    #[test]
    fn test_page_bounds_without_animation() {
        let mut state = loaded(25, false);

        assert!(!reducer(&mut state, Action::PagePrev).changed);
        assert!(!reducer(&mut state, Action::PageGoto(0)).changed);
        assert!(!reducer(&mut state, Action::PageGoto(4)).changed);
        assert_eq!(state.page, 1);

        state.cursor = 5;
        assert!(reducer(&mut state, Action::PageGoto(3)).changed);
        assert_eq!(state.page, 3);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.visible().len(), 5);

        assert!(!reducer(&mut state, Action::PageNext).changed);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn test_page_transition_swaps_while_hidden() {
        let mut state = loaded(25, true);
        state.cursor = 2;

        assert!(reducer(&mut state, Action::PageNext).changed);
        assert_eq!(state.page, 1, "page swaps only once faded out");
        assert!(!reducer(&mut state, Action::PageNext).changed, "busy while fading");

        for _ in 0..FADE_TICKS {
            reducer(&mut state, Action::Tick);
        }
        assert_eq!(state.page, 2);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.list_opacity(), 0.0);

        for _ in 0..FADE_TICKS {
            reducer(&mut state, Action::Tick);
        }
        assert!(state.transition.is_none());
        assert_eq!(state.list_opacity(), 1.0);
        assert!(!reducer(&mut state, Action::Tick).changed);
    }

    #[test]
    fn test_selection_clamps_to_visible_page() {
        let mut state = loaded(12, false);
        state.page = 2;
        assert!(reducer(&mut state, Action::SelectionMove(5)).changed);
        assert_eq!(state.cursor, 1);
        assert!(!reducer(&mut state, Action::SelectionMove(1)).changed);
        assert!(reducer(&mut state, Action::SelectionMove(-9)).changed);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_nav_detail_without_name_stays_idle() {
        let mut state = loaded(3, false);
        let result = reducer(&mut state, Action::NavDetail(None));
        assert!(result.changed);
        assert!(result.effects.is_empty());
        assert!(state.detail.is_empty());
        assert_eq!(state.route, Route::Detail { name: None });

        let result = reducer(&mut state, Action::NavDetail(Some("  ".into())));
        assert!(!result.changed);
    }

    #[test]
    fn test_nav_back_discards_pending_detail() {
        let mut state = loaded(3, false);
        reducer(&mut state, Action::NavDetail(Some("mon-1".into())));
        assert!(state.detail.is_loading());

        let result = reducer(&mut state, Action::NavBack);
        assert_eq!(result.effects, vec![Effect::CancelDetail]);
        assert_eq!(state.route, Route::List);
        assert!(state.detail.is_empty());

        let result = reducer(
            &mut state,
            Action::DetailDidError {
                name: "mon-1".into(),
                error: "late".into(),
            },
        );
        assert!(!result.changed);
        assert!(state.detail.is_empty());
    }
}

//! Pokedex TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use pokedex::action::Action;
use pokedex::api::{Endpoints, HttpUpstream};
use pokedex::collection::fetch_collection;
use pokedex::components::{Component, DetailView, DetailViewProps, DexList, DexListProps};
use pokedex::config::Config;
use pokedex::detail::fetch_detail;
use pokedex::effect::Effect;
use pokedex::reducer::reducer;
use pokedex::state::{AppState, Profile, Route, TICK_MS};

const COLLECTION_TASK: &str = "collection";
const DETAIL_TASK: &str = "detail";

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Paginated Pokedex over PokeAPI")]
struct Args {
    #[command(flatten)]
    config: Config,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum DexComponentId {
    List,
    Detail,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum DexContext {
    List,
    Detail,
}

impl EventRoutingState<DexComponentId, DexContext> for AppState {
    fn focused(&self) -> Option<DexComponentId> {
        match self.route {
            Route::List => Some(DexComponentId::List),
            Route::Detail { .. } => Some(DexComponentId::Detail),
        }
    }

    fn modal(&self) -> Option<DexComponentId> {
        None
    }

    fn binding_context(&self, id: DexComponentId) -> DexContext {
        match id {
            DexComponentId::List => DexContext::List,
            DexComponentId::Detail => DexContext::Detail,
        }
    }

    fn default_context(&self) -> DexContext {
        DexContext::List
    }
}

/// Shared by every spawned loader task
#[derive(Clone)]
struct Loaders {
    upstream: Arc<HttpUpstream>,
    endpoints: Arc<Endpoints>,
    language: Arc<str>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        config,
        debug: debug_args,
    } = Args::parse();

    pokedex::logging::init(config.log_file.as_deref())?;
    tracing::info!(api_base = %config.api_base, limit = config.limit, "starting");

    let debug = DebugSession::new(debug_args);
    let initial = config.initial_state();
    let state = debug
        .load_state_or_else_async(move || async move { Ok::<AppState, io::Error>(initial) })
        .await
        .map_err(debug_error)?;
    let replay_actions = debug.load_replay_items().map_err(debug_error)?;
    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    let upstream = HttpUpstream::new(config.timeout()).map_err(|err| {
        tracing::error!(error = %err, "http client unavailable");
        io::Error::other(err.to_string())
    })?;
    let loaders = Loaders {
        upstream: Arc::new(upstream),
        endpoints: Arc::new(config.endpoints()),
        language: Arc::from(config.language.as_str()),
    };

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, loaders, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct DexUi {
    list: DexList,
    detail: DetailView,
}

impl DexUi {
    fn new() -> Self {
        Self {
            list: DexList,
            detail: DetailView,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<DexComponentId>,
    ) {
        match state.route {
            Route::List => {
                event_ctx.component_areas.remove(&DexComponentId::Detail);
                event_ctx.set_component_area(DexComponentId::List, area);
                let props = DexListProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                self.list.render(frame, area, props);
            }
            Route::Detail { .. } => {
                event_ctx.component_areas.remove(&DexComponentId::List);
                event_ctx.set_component_area(DexComponentId::Detail, area);
                let props = DetailViewProps {
                    state,
                    is_focused: render_ctx.is_focused(),
                };
                self.detail.render(frame, area, props);
            }
        }
    }

    fn handle_list_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = DexListProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.list.handle_event(event, props).into_iter().collect();
        handler_response(actions)
    }

    fn handle_detail_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = DetailViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.detail.handle_event(event, props).into_iter().collect();
        handler_response(actions)
    }
}

fn handler_response(actions: Vec<Action>) -> HandlerResponse<Action> {
    if actions.is_empty() {
        HandlerResponse::ignored()
    } else {
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    loaders: Loaders,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(DexUi::new()));
    let mut bus: EventBus<AppState, Action, DexComponentId, DexContext> = EventBus::new();
    let keybindings: Keybindings<DexContext> = Keybindings::new();

    let ui_list = Rc::clone(&ui);
    bus.register(DexComponentId::List, move |event, state| {
        ui_list.borrow_mut().handle_list_event(&event.kind, state)
    });

    let ui_detail = Rc::clone(&ui);
    bus.register(DexComponentId::Detail, move |event, state| {
        ui_detail
            .borrow_mut()
            .handle_detail_event(&event.kind, state)
    });

    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::CollectionFetch),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }
                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&loaders, effect, ctx),
        )
        .await
}

/// Handle effects by spawning keyed tasks
fn handle_effect(loaders: &Loaders, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadCollection { limit } => {
            let loaders = loaders.clone();
            ctx.tasks().spawn(TaskKey::new(COLLECTION_TASK), async move {
                match fetch_collection(loaders.upstream.as_ref(), &loaders.endpoints, limit).await
                {
                    Ok(entries) => Action::CollectionDidLoad(entries),
                    Err(error) => {
                        tracing::error!(%error, "collection fetch failed");
                        Action::CollectionDidError(error.to_string())
                    }
                }
            });
        }
        Effect::LoadDetail { name } => {
            let loaders = loaders.clone();
            ctx.tasks().spawn(TaskKey::new(DETAIL_TASK), async move {
                let result = fetch_detail(
                    loaders.upstream.as_ref(),
                    &loaders.endpoints,
                    &name,
                    &loaders.language,
                )
                .await;
                match result {
                    Ok((detail, species)) => Action::DetailDidLoad {
                        name,
                        profile: Profile { detail, species },
                    },
                    Err(error) => {
                        tracing::error!(%name, %error, "detail fetch failed");
                        Action::DetailDidError {
                            name,
                            error: error.to_string(),
                        }
                    }
                }
            });
        }
        Effect::CancelDetail => {
            ctx.tasks().cancel(&TaskKey::new(DETAIL_TASK));
        }
    }
}

use super::{board_svg::BoardSvg, legend_panel::LegendPanel, route_summary::RouteSummary};
use crate::api::fetch_board;
use crate::config::BoardConfig;
use crate::engine::sample_board;
use crate::error::BoardError;
use crate::model::{BoardData, Connector};
use crate::route::Route;
use crate::state::{BoardAction, BoardState};
use yew::prelude::*;

/// A failed fetch still draws the grid, just without connectors.
pub fn connectors_or_bare_grid(id: u64, fetched: Result<BoardData, BoardError>) -> Vec<Connector> {
    match fetched {
        Ok(data) => data.connectors(),
        Err(e) => {
            log::warn!("board {}: {}; drawing grid without connectors", id, e);
            Vec::new()
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: BoardConfig,
    pub route: Option<Route>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let board = {
        let config = props.config.clone();
        use_reducer(move || BoardState::new(config))
    };

    // Load connectors once on mount, then draw
    {
        let board = board.clone();
        let route = props.route;
        let api_base = props.config.api_base.clone();
        let inline_board = props.config.inline_board.clone();
        use_effect_with((), move |_| {
            match route {
                Some(Route::Board(id)) => {
                    wasm_bindgen_futures::spawn_local(async move {
                        let connectors = connectors_or_bare_grid(id, fetch_board(&api_base, id).await);
                        board.dispatch(BoardAction::Render { connectors });
                    });
                }
                Some(Route::Sample) => {
                    let data = inline_board.unwrap_or_else(sample_board);
                    board.dispatch(BoardAction::Render {
                        connectors: data.connectors(),
                    });
                }
                None => log::info!("not a board page; nothing to render"),
            }
            || ()
        });
    }

    html! {
        <>
            { for board.drawings.iter().map(|d| html! {
                <div class="board-drawing">
                    <BoardSvg scene={d.scene.clone()} />
                    <LegendPanel connectors={d.connectors.clone()} />
                    <RouteSummary route={d.route.clone()} />
                </div>
            }) }
        </>
    }
}

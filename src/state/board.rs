use std::rc::Rc;
use yew::Reducible;

use crate::config::BoardConfig;
use crate::engine::{quickest_route, MoveGraph, QuickestRoute};
use crate::model::Connector;
use crate::render::{render, Scene};

/// One complete rendering of the board, appended to the host as its own `<svg>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawing {
    pub scene: Scene,
    pub connectors: Vec<Connector>,
    pub route: Option<QuickestRoute>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    pub config: BoardConfig,
    /// Every drawing rendered so far, oldest first. Nothing is ever cleared.
    pub drawings: Vec<Drawing>,
}

impl BoardState {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            drawings: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum BoardAction {
    /// Draw the grid, labels and the given connectors once more.
    Render { connectors: Vec<Connector> },
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            BoardAction::Render { connectors } => {
                let scene = render(&new.config, &connectors);
                let graph = MoveGraph::pristine(new.config.cells_count).with_connectors(&connectors);
                let route = quickest_route(&graph);
                log::debug!(
                    "rendering drawing #{} with {} connectors",
                    new.drawings.len() + 1,
                    connectors.len()
                );
                new.drawings.push(Drawing {
                    scene,
                    connectors,
                    route,
                });
            }
        }
        Rc::new(new)
    }
}

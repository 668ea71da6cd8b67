use super::legend::LegendRow;
use crate::model::{Connector, ConnectorKind};
use crate::render::line_style;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendPanelProps {
    pub connectors: Vec<Connector>,
}

#[function_component]
pub fn LegendPanel(props: &LegendPanelProps) -> Html {
    let row = |kind: ConnectorKind| {
        let count = props.connectors.iter().filter(|c| c.kind == kind).count();
        if count == 0 {
            return html! {};
        }
        let style = line_style(kind);
        html! { <LegendRow color={style.stroke} label={kind.label()} dashed={style.dash.is_some()}/> }
    };
    if props.connectors.is_empty() {
        return html! {};
    }
    html! {<div style="display:inline-block; margin-top:8px; padding:6px 10px; border:1px solid #30363d; border-radius:8px; font-size:13px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        { row(ConnectorKind::Ladder) }
        { row(ConnectorKind::Snake) }
    </div>}
}

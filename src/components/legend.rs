use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: &'static str,
    pub label: &'static str,
    #[prop_or(false)]
    pub dashed: bool,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let border = if props.dashed { "dashed" } else { "solid" };
    html! { <div style="display:flex; align-items:center; gap:8px; margin:3px 0;"> <span style={format!("display:inline-block; width:18px; height:0; border-top:3px {} {};", border, props.color)}></span> <span>{ props.label }</span> </div> }
}

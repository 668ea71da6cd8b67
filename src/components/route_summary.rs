use crate::engine::QuickestRoute;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RouteSummaryProps {
    pub route: Option<QuickestRoute>,
}

pub fn summary_text(route: Option<&QuickestRoute>) -> String {
    match route {
        Some(r) if r.throws == 1 => "Quickest way up: 1 throw".to_string(),
        Some(r) => format!("Quickest way up: {} throws", r.throws),
        None => "Quickest way up: unreachable".to_string(),
    }
}

#[function_component]
pub fn RouteSummary(props: &RouteSummaryProps) -> Html {
    let cells = props
        .route
        .as_ref()
        .map(|r| {
            r.cells
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" → ")
        })
        .unwrap_or_default();
    html! {<div style="margin-top:8px; font-size:14px;">
        <div style="font-weight:600;">{ summary_text(props.route.as_ref()) }</div>
        { if cells.is_empty() { html!{} } else { html!{<div style="font-size:12px; opacity:0.7;">{ cells }</div>} } }
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralises_throws() {
        let one = QuickestRoute { throws: 1, cells: vec![1, 6] };
        let many = QuickestRoute { throws: 3, cells: vec![1, 7, 98, 100] };
        assert_eq!(summary_text(Some(&one)), "Quickest way up: 1 throw");
        assert_eq!(summary_text(Some(&many)), "Quickest way up: 3 throws");
        assert_eq!(summary_text(None), "Quickest way up: unreachable");
    }
}

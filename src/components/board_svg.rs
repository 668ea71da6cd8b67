use crate::render::{
    line_style, Scene, CELL_FILL, CELL_OPACITY, CELL_STROKE, CELL_STROKE_WIDTH,
    CONNECTOR_STROKE_WIDTH, LABEL_FILL,
};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardSvgProps {
    pub scene: Scene,
}

#[function_component(BoardSvg)]
pub fn board_svg(props: &BoardSvgProps) -> Html {
    let scene = &props.scene;
    let rect_style = format!(
        "stroke:{}; stroke-width:{}; opacity:{}; fill:{};",
        CELL_STROKE, CELL_STROKE_WIDTH, CELL_OPACITY, CELL_FILL
    );
    let label_style = format!(
        "fill:{}; font-size:{}px; text-anchor:middle;",
        LABEL_FILL, scene.font_size
    );
    html! {
        <svg width={scene.width.to_string()} height={scene.height.to_string()}>
            { for scene.rects.iter().map(|r| html! {
                <rect
                    x={r.origin.x.to_string()}
                    y={r.origin.y.to_string()}
                    width={r.size.to_string()}
                    height={r.size.to_string()}
                    style={rect_style.clone()}
                />
            }) }
            { for scene.labels.iter().map(|l| html! {
                <text x={l.at.x.to_string()} y={l.at.y.to_string()} style={label_style.clone()}>
                    { l.text.clone() }
                </text>
            }) }
            { for scene.lines.iter().map(|s| {
                let style = line_style(s.kind);
                html! {
                    <line
                        x1={s.from.x.to_string()}
                        y1={s.from.y.to_string()}
                        x2={s.to.x.to_string()}
                        y2={s.to.y.to_string()}
                        stroke={style.stroke}
                        stroke-width={CONNECTOR_STROKE_WIDTH.to_string()}
                        stroke-dasharray={style.dash}
                        stroke-linecap="round"
                    />
                }
            }) }
        </svg>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::model::{Connector, ConnectorKind};
    use crate::render::render;
    use std::time::Duration;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn child_tags(el: &Element) -> Vec<String> {
        let mut tags = Vec::new();
        let mut child = el.first_element_child();
        while let Some(c) = child {
            tags.push(c.tag_name().to_lowercase());
            child = c.next_element_sibling();
        }
        tags
    }

    #[wasm_bindgen_test]
    async fn paints_rects_then_labels_then_lines() {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        let connectors = [
            Connector { src: 12, dst: 98, kind: ConnectorKind::Ladder },
            Connector { src: 95, dst: 13, kind: ConnectorKind::Snake },
        ];
        let scene = render(&BoardConfig::default(), &connectors);
        yew::Renderer::<BoardSvg>::with_root_and_props(host.clone(), BoardSvgProps { scene })
            .render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let svg = host.first_element_child().unwrap();
        assert_eq!(svg.tag_name().to_lowercase(), "svg");
        assert_eq!(svg.get_attribute("width").as_deref(), Some("400"));
        assert_eq!(svg.get_attribute("height").as_deref(), Some("400"));

        let tags = child_tags(&svg);
        assert_eq!(tags.len(), 202);
        assert!(tags[..100].iter().all(|t| t == "rect"));
        assert!(tags[100..200].iter().all(|t| t == "text"));
        assert!(tags[200..].iter().all(|t| t == "line"));

        let ladder = svg.last_element_child().unwrap().previous_element_sibling().unwrap();
        assert_eq!(ladder.get_attribute("x1").as_deref(), Some("340"));
        assert_eq!(ladder.get_attribute("x2").as_deref(), Some("100"));
        assert_eq!(ladder.get_attribute("stroke-dasharray"), None);
        let snake = svg.last_element_child().unwrap();
        assert_eq!(snake.get_attribute("stroke-dasharray").as_deref(), Some("6,4"));
    }

    #[wasm_bindgen_test]
    async fn bare_grid_has_no_lines() {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = document.create_element("div").unwrap();
        let scene = render(&BoardConfig::default(), &[]);
        yew::Renderer::<BoardSvg>::with_root_and_props(host.clone(), BoardSvgProps { scene })
            .render();
        yew::platform::time::sleep(Duration::from_millis(10)).await;

        let svg = host.first_element_child().unwrap();
        let tags = child_tags(&svg);
        assert_eq!(tags.len(), 200);
        assert!(!tags.iter().any(|t| t == "line"));
    }
}

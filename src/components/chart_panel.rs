use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Line, Pie},
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::hooks::use_theme::use_theme;
use crate::models::segments::SegmentBreakdown;
use crate::models::series::ChartSeries;
use crate::utils::debounce::debounced_resize_listener;

/// Configuration object describing one chart. A single generic panel
/// component renders any variant, instead of one near-duplicate component
/// per chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    /// Category/value line chart.
    Trend {
        title: String,
        series: ChartSeries,
        color: &'static str,
    },
    /// Doughnut over ordered, pre-colored segment slices.
    Breakdown {
        title: String,
        breakdown: SegmentBreakdown,
    },
}

impl ChartSpec {
    /// Builds the chart-library configuration for this spec.
    pub fn build(&self, dark_mode: bool) -> CharmingChart {
        // Theme-aware colors
        let (title_color, axis_color, grid_color) = if dark_mode {
            ("#e4e4e7", "#a1a1aa", "#404040")
        } else {
            ("#1f2937", "#6b7280", "#e5e7eb")
        };

        match self {
            ChartSpec::Trend {
                title,
                series,
                color,
            } => {
                let labels = series.labels();

                CharmingChart::new()
                    .title(
                        Title::new()
                            .text(title.as_str())
                            .left("center")
                            .text_style(TextStyle::new().font_size(16).color(title_color)),
                    )
                    .tooltip(
                        Tooltip::new()
                            .trigger(Trigger::Axis)
                            .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
                    )
                    .color(vec![Color::from(*color)])
                    .grid(
                        Grid::new()
                            .left("8%")
                            .right("4%")
                            .bottom("14%")
                            .contain_label(true),
                    )
                    .x_axis(
                        Axis::new()
                            .type_(AxisType::Category)
                            .data(labels)
                            .axis_label(AxisLabel::new().rotate(35).color(axis_color)),
                    )
                    .y_axis(
                        Axis::new()
                            .type_(AxisType::Value)
                            .axis_label(AxisLabel::new().color(axis_color))
                            .split_line(
                                SplitLine::new().line_style(
                                    LineStyle::new()
                                        .color(grid_color)
                                        .type_(LineStyleType::Dashed),
                                ),
                            ),
                    )
                    .series(Line::new().data(series.values()).show_symbol(false))
            }
            ChartSpec::Breakdown { title, breakdown } => {
                let data: Vec<(f64, &str)> = breakdown
                    .slices()
                    .iter()
                    .map(|s| (s.count, s.segment.name()))
                    .collect();
                let palette: Vec<Color> =
                    breakdown.colors().into_iter().map(Color::from).collect();

                CharmingChart::new()
                    .title(
                        Title::new()
                            .text(title.as_str())
                            .left("center")
                            .text_style(TextStyle::new().font_size(16).color(title_color)),
                    )
                    .tooltip(Tooltip::new().trigger(Trigger::Item))
                    .color(palette)
                    .series(Pie::new().radius(vec!["45%", "70%"]).data(data))
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id the renderer attaches to; must be unique per mounted chart.
    pub id: AttrValue,
    pub spec: ChartSpec,
    #[prop_or(320)]
    pub height: u32,
}

/// Renders a `ChartSpec` into a canvas, re-rendering on spec changes, theme
/// changes, and (debounced) window resizes.
#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    let container_ref = use_node_ref();
    let theme = use_theme();

    {
        let container_ref = container_ref.clone();
        let spec = props.spec.clone();
        let id = props.id.clone();
        let height = props.height;
        let dark_mode = theme.is_dark();

        use_effect_with(
            (spec, container_ref, id, dark_mode),
            move |(spec, container_ref, id, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, id, spec, height, *dark_mode);

                    let spec = spec.clone();
                    let id = id.clone();
                    let dark_mode = *dark_mode;
                    debounced_resize_listener(
                        move || render_chart(&container, &id, &spec, height, dark_mode),
                        150,
                    )
                });

                move || drop(listener)
            },
        );
    }

    let style = format!("height: {}px;", props.height);

    html! {
        <div class="chart-container" style={style} ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, id: &str, spec: &ChartSpec, height: u32, dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    if width == 0 {
        return;
    }

    let chart = spec.build(dark_mode);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

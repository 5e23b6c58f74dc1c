use yew::prelude::*;

/// Maps values onto SVG coordinates inside a horizontal band starting at
/// `x_start` and spanning `x_span`, scaled against an externally chosen
/// value range so several paths can share one scale.
pub fn path_for_range(
    values: &[f64],
    min: f64,
    max: f64,
    x_start: f64,
    x_span: f64,
    height: f64,
    padding: f64,
) -> String {
    if values.is_empty() {
        return String::new();
    }

    let range = if (max - min).abs() < f64::EPSILON {
        1.0 // Avoid division by zero for flat lines
    } else {
        max - min
    };
    let denominator = (values.len() - 1).max(1) as f64;

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = x_start + (i as f64 / denominator) * x_span;
            let y = padding + (1.0 - (value - min) / range) * (height - 2.0 * padding);
            (x, y)
        })
        .collect();

    let mut path = format!("M {:.2},{:.2}", points[0].0, points[0].1);
    for (x, y) in points.iter().skip(1) {
        path.push_str(&format!(" L {:.2},{:.2}", x, y));
    }
    path
}

/// SVG path data across the full width, scaled to the values' own range.
pub fn build_path(values: &[f64], width: f64, height: f64, padding: f64) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    path_for_range(values, min, max, 0.0, width, height, padding)
}

#[derive(Properties, PartialEq)]
pub struct SparklineProps {
    pub values: Vec<f64>,

    /// Height in pixels
    #[prop_or(120)]
    pub height: u32,

    /// Stroke color
    #[prop_or_else(|| "#ef4444".to_string())]
    pub color: String,

    /// Stroke width
    #[prop_or(2.5)]
    pub stroke_width: f64,

    /// Labels rendered under the left and right edges
    #[prop_or_default]
    pub edge_labels: Option<(String, String)>,
}

/// Lightweight inline trend line. The viewBox is fixed and stretched by
/// CSS; `vector-effect` keeps the stroke width stable.
#[function_component(Sparkline)]
pub fn sparkline(props: &SparklineProps) -> Html {
    const VIEWBOX_WIDTH: f64 = 1000.0;
    let viewbox_height = f64::from(props.height);
    let padding = 6.0;

    let path_data = build_path(&props.values, VIEWBOX_WIDTH, viewbox_height, padding);
    let viewbox = format!("0 0 {VIEWBOX_WIDTH} {viewbox_height}");
    let style = format!("width: 100%; height: {}px; display: block;", props.height);

    html! {
        <div class="sparkline">
            <svg {viewbox} preserveAspectRatio="none" {style}>
                <path
                    d={path_data}
                    fill="none"
                    stroke={props.color.clone()}
                    stroke-width={props.stroke_width.to_string()}
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    vector-effect="non-scaling-stroke"
                />
            </svg>
            if let Some((first, last)) = &props.edge_labels {
                <div class="sparkline-labels">
                    <span>{first}</span>
                    <span>{last}</span>
                </div>
            }
        </div>
    }
}

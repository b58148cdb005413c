use leptos::prelude::*;

use super::frame::{px, ChartFrame};
use crate::charts::presentation::ChartPresentation;

/// Grid lines, y ticks and rotated period labels
#[component]
pub fn Axes(
    frame: ChartFrame,
    labels: Vec<String>,
    presentation: ChartPresentation,
) -> impl IntoView {
    let left = frame.plot_left();
    let right = frame.plot_right();
    let bottom = frame.plot_bottom();
    let baseline = px(frame.baseline());

    let grid = frame
        .ticks()
        .into_iter()
        .map(|tick| {
            let y = frame.y(tick);
            view! {
                <line x1=px(left) y1=px(y) x2=px(right) y2=px(y) class="chart-grid" />
                <text x=px(left - 8.0) y=px(y + 4.0) text-anchor="end" class="chart-tick">
                    {presentation.tick(tick)}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let periods = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let x = frame.x(i);
            let y = bottom + 16.0;
            view! {
                <text
                    x=px(x)
                    y=px(y)
                    text-anchor="end"
                    transform=format!("rotate(-45 {:.1} {:.1})", x, y)
                    class="chart-tick"
                >
                    {label}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <g class="chart-axes">
            {grid}
            <line x1=px(left) y1=baseline.clone() x2=px(right) y2=baseline class="chart-axis" />
            <line x1=px(left) y1=px(frame.plot_top()) x2=px(left) y2=px(bottom) class="chart-axis" />
            {periods}
        </g>
    }
}

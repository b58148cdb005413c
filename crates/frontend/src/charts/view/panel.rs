use contracts::charts::{ChartData, ChartFilter};
use leptos::prelude::*;

use super::bar::BarChart;
use super::legend::{legend_entries, Legend};
use super::line::LineChart;
use super::pie::PieChart;
use crate::charts::hook::use_chart_kind;
use crate::charts::kinds::ChartKind;
use crate::charts::pipeline::{ChartDisplay, LOADING_MESSAGE};
use crate::charts::presentation::{ChartPresentation, ChartShape, LegendPosition};

/// Chart with its legend, drawn from ready data
#[component]
pub fn ChartView(data: ChartData, presentation: ChartPresentation) -> impl IntoView {
    let entries = legend_entries(&data, presentation.shape);
    let chart = match presentation.shape {
        ChartShape::Line => view! { <LineChart data=data presentation=presentation /> }.into_any(),
        ChartShape::Bar => view! { <BarChart data=data presentation=presentation /> }.into_any(),
        ChartShape::Pie => view! { <PieChart data=data presentation=presentation /> }.into_any(),
    };

    match presentation.legend {
        LegendPosition::Top => view! {
            <div class="chart-view">
                <Legend entries=entries />
                {chart}
            </div>
        }
        .into_any(),
        LegendPosition::Bottom => view! {
            <div class="chart-view">
                {chart}
                <Legend entries=entries />
            </div>
        }
        .into_any(),
    }
}

/// Card that fetches one chart for the given filter and shows its state
#[component]
pub fn ChartPanel(kind: ChartKind, #[prop(into)] filter: Signal<ChartFilter>) -> impl IntoView {
    let display = use_chart_kind(kind, filter);
    let presentation = kind.presentation();

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{move || kind.heading(&filter.get())}</h3>
            {move || match display.get() {
                ChartDisplay::Loading => {
                    view! { <p class="chart-card__status">{LOADING_MESSAGE}</p> }.into_any()
                }
                ChartDisplay::Incomplete(message) => {
                    view! { <p class="chart-card__status">{message}</p> }.into_any()
                }
                ChartDisplay::Failed(message) => {
                    view! { <p class="chart-card__status chart-card__status--error">{message}</p> }
                        .into_any()
                }
                ChartDisplay::Ready { notice: Some(message), .. } => {
                    view! { <p class="chart-card__status chart-card__status--notice">{message}</p> }
                        .into_any()
                }
                ChartDisplay::Ready { data, notice: None } => {
                    view! { <ChartView data=data presentation=presentation /> }.into_any()
                }
            }}
        </div>
    }
}

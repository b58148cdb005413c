//! Filter bars feeding the chart pages.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use contracts::catalog::{Centro, Contrato};
use contracts::charts::{filter::month_name, ChartFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::charts::api::{fetch_centros, fetch_centros_nomina, fetch_contratos};
use crate::charts::pipeline::RequestSequencer;

const YEARS_OFFERED: i32 = 5;

/// The given year and the four before it, newest first
pub fn year_options(current: i32) -> Vec<i32> {
    (0..YEARS_OFFERED).map(|i| current - i).collect()
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Empty select values mean "nothing chosen"
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn parse_month(value: &str) -> Option<u32> {
    value.trim().parse().ok().filter(|m| (1..=12).contains(m))
}

/// Starting filter for the period pages: this year, January to December
pub fn default_period_filter() -> ChartFilter {
    ChartFilter {
        ano: Some(current_year()),
        mes_inicio: Some(1),
        mes_fin: Some(12),
        ..ChartFilter::default()
    }
}

fn month_options() -> Vec<(u32, &'static str)> {
    (1..=12u32)
        .filter_map(|m| month_name(m).map(|name| (m, name)))
        .collect()
}

#[component]
fn YearSelect(filter: RwSignal<ChartFilter>) -> impl IntoView {
    view! {
        <div class="filter-group">
            <label class="filter-label">"Año:"</label>
            <select
                class="filter-input"
                prop:value=move || filter.with(|f| f.ano.map(|a| a.to_string()).unwrap_or_default())
                on:change=move |ev| {
                    let ano = event_target_value(&ev).parse::<i32>().ok();
                    filter.update(|f| f.ano = ano);
                }
            >
                {year_options(current_year())
                    .into_iter()
                    .map(|ano| view! { <option value=ano.to_string()>{ano}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn MonthSelect(
    filter: RwSignal<ChartFilter>,
    label: &'static str,
    read: fn(&ChartFilter) -> Option<u32>,
    write: fn(&mut ChartFilter, Option<u32>),
) -> impl IntoView {
    view! {
        <div class="filter-group">
            <label class="filter-label">{label}</label>
            <select
                class="filter-input"
                prop:value=move || filter.with(|f| read(f).map(|m| m.to_string()).unwrap_or_default())
                on:change=move |ev| {
                    let month = parse_month(&event_target_value(&ev));
                    filter.update(|f| write(f, month));
                }
            >
                {month_options()
                    .into_iter()
                    .map(|(value, name)| view! { <option value=value.to_string()>{name}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Company, payroll center, year and month range
#[component]
pub fn PeriodFilterBar(filter: RwSignal<ChartFilter>) -> impl IntoView {
    let contratos = RwSignal::new(Vec::<Contrato>::new());
    let centros = RwSignal::new(Vec::<Centro>::new());

    spawn_local(async move {
        match fetch_contratos().await {
            Ok(list) => contratos.set(list),
            Err(e) => log::error!("failed to load contratos: {}", e),
        }
    });

    // Centers follow the chosen company; a late answer for an earlier
    // company is ignored
    let contrato_id = Memo::new(move |_| filter.with(|f| f.contrato_id.clone()));
    let sequencer = Arc::new(RequestSequencer::default());
    Effect::new(move |_| {
        let selected = contrato_id.get();
        let ticket = sequencer.issue();
        centros.set(Vec::new());
        let Some(id) = selected else {
            return;
        };
        let sequencer = Arc::clone(&sequencer);
        spawn_local(async move {
            let result = fetch_centros_nomina(&id).await;
            if !sequencer.is_current(ticket) {
                return;
            }
            match result {
                Ok(list) => centros.set(list),
                Err(e) => log::error!("failed to load centros de nómina: {}", e),
            }
        });
    });

    view! {
        <div class="filter-container">
            <div class="filter-group">
                <label class="filter-label">"Empresa (Contrato):"</label>
                <select
                    class="filter-input"
                    prop:value=move || filter.with(|f| f.contrato_id.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let contrato = non_empty(event_target_value(&ev));
                        filter.update(|f| {
                            f.contrato_id = contrato;
                            f.centro_id = None;
                        });
                    }
                >
                    <option value="">"Elegir Contrato"</option>
                    <For
                        each=move || contratos.get()
                        key=|c| c.id.clone()
                        children=|c| view! { <option value=c.id.clone()>{c.nombre.clone()}</option> }
                    />
                </select>
            </div>

            <div class="filter-group">
                <label class="filter-label">"Centro de Nómina:"</label>
                <select
                    class="filter-input"
                    prop:value=move || filter.with(|f| f.centro_id.clone().unwrap_or_default())
                    prop:disabled=move || contrato_id.get().is_none() || centros.with(|c| c.is_empty())
                    on:change=move |ev| {
                        let centro = non_empty(event_target_value(&ev));
                        filter.update(|f| f.centro_id = centro);
                    }
                >
                    <option value="">
                        {move || if contrato_id.get().is_some() {
                            "Elegir centro"
                        } else {
                            "Seleccione Contrato primero"
                        }}
                    </option>
                    <For
                        each=move || centros.get()
                        key=|c| c.id.clone()
                        children=|c| view! { <option value=c.id.clone()>{c.nombre.clone()}</option> }
                    />
                </select>
            </div>

            <YearSelect filter=filter />
            <MonthSelect
                filter=filter
                label="Desde Mes:"
                read=|f| f.mes_inicio
                write=|f, m| f.mes_inicio = m
            />
            <MonthSelect
                filter=filter
                label="Hasta Mes:"
                read=|f| f.mes_fin
                write=|f, m| f.mes_fin = m
            />
        </div>
    }
}

/// Billing center, year and an optional single month. The first center is
/// preselected once the list arrives.
#[component]
pub fn CenterYearFilterBar(filter: RwSignal<ChartFilter>) -> impl IntoView {
    let centros = RwSignal::new(Vec::<Centro>::new());

    spawn_local(async move {
        match fetch_centros().await {
            Ok(list) => {
                if let Some(first) = list.first() {
                    let id = first.id.clone();
                    filter.update(|f| {
                        if f.centro_id.is_none() {
                            f.centro_id = Some(id);
                        }
                    });
                }
                centros.set(list);
            }
            Err(e) => log::error!("failed to load centros: {}", e),
        }
    });

    view! {
        <div class="filter-container">
            <div class="filter-group">
                <label class="filter-label">"Centro:"</label>
                <select
                    class="filter-input"
                    prop:value=move || filter.with(|f| f.centro_id.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let centro = non_empty(event_target_value(&ev));
                        filter.update(|f| f.centro_id = centro);
                    }
                >
                    <option value="">"Seleccione un Centro"</option>
                    <For
                        each=move || centros.get()
                        key=|c| c.id.clone()
                        children=|c| view! { <option value=c.id.clone()>{c.nombre.clone()}</option> }
                    />
                </select>
            </div>

            <YearSelect filter=filter />

            <div class="filter-group">
                <label class="filter-label">"Mes:"</label>
                <select
                    class="filter-input"
                    prop:value=move || filter.with(|f| f.mes.map(|m| m.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let mes = parse_month(&event_target_value(&ev));
                        filter.update(|f| f.mes = mes);
                    }
                >
                    <option value="">"Todos los Meses"</option>
                    {month_options()
                        .into_iter()
                        .map(|(value, name)| view! { <option value=value.to_string()>{name}</option> })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_options() {
        assert_eq!(year_options(2025), vec![2025, 2024, 2023, 2022, 2021]);
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("3"), Some(3));
        assert_eq!(parse_month(""), None);
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("0"), None);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  ".into()), None);
        assert_eq!(non_empty(" 12 ".into()), Some("12".into()));
    }

    #[test]
    fn test_default_period_filter_waits_for_center() {
        let filter = default_period_filter();
        assert_eq!(filter.mes_inicio, Some(1));
        assert_eq!(filter.mes_fin, Some(12));
        assert!(!filter.is_complete(contracts::charts::PERIOD_RANGE));
    }
}

//! The dashboard's charts and the registry the pages render them through.

use contracts::charts::{
    BillingRow, ChartData, ChartFilter, ChartSeries, ExpenseRow, FilterField, HeadcountRow, NoveltyRow,
    NoveltyTotals, PayrollRow, ProfitMarginResponse, SalaryTransportRow, SeriesStyle, CENTER_YEAR,
};

use super::definition::{series_from_rows, ChartDefinition, Column};
use super::presentation::{
    ChartPresentation, ChartShape, DataLabelPolicy, LegendPosition, ValueScale,
    STACKED_LABEL_THRESHOLD,
};
use crate::shared::number_format::MillionsPrecision;

const RED: (u8, u8, u8) = (255, 99, 132);
const BLUE: (u8, u8, u8) = (54, 162, 235);
const YELLOW: (u8, u8, u8) = (255, 205, 86);
const TEAL: (u8, u8, u8) = (75, 192, 192);
const PURPLE: (u8, u8, u8) = (153, 102, 255);
const ORANGE: (u8, u8, u8) = (255, 159, 64);

/// Category colors, in column order, for the stacked charts and the pie
const CATEGORY_PALETTE: [(u8, u8, u8); 5] = [RED, BLUE, YELLOW, TEAL, PURPLE];

fn style((r, g, b): (u8, u8, u8), alpha: f32) -> SeriesStyle {
    SeriesStyle::rgb(r, g, b, alpha)
}

fn category(index: usize) -> SeriesStyle {
    style(CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()], 0.8)
}

const PAYROLL_CENTER_INCOMPLETE: &str = "Seleccione un Centro de Nómina, Año y Rango de Meses.";

pub struct Billing;

impl ChartDefinition for Billing {
    type Response = Vec<BillingRow>;

    const KEY: &'static str = "billing";
    const TITLE: &'static str = "Facturación Mensual";
    const ENDPOINT: &'static str = "facturacion";
    const FAILURE_MESSAGE: &'static str = "Error al cargar datos del gráfico de facturación.";

    fn transform(rows: Self::Response) -> ChartData {
        series_from_rows(
            &rows,
            |r| r.fecha_label.as_str(),
            vec![Column::new(
                "Facturación",
                |r: &BillingRow| r.facturacion_valor,
                style(TEAL, 0.4).filled(),
            )],
        )
    }

    fn presentation() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Line,
            stacked: false,
            legend: LegendPosition::Top,
            scale: ValueScale::Currency(MillionsPrecision::Whole),
            data_labels: DataLabelPolicy::NonZero,
        }
    }
}

pub struct Payroll;

impl ChartDefinition for Payroll {
    type Response = Vec<PayrollRow>;

    const KEY: &'static str = "payroll";
    const TITLE: &'static str = "Costo Mensual de Nómina";
    const ENDPOINT: &'static str = "nomina";
    const FAILURE_MESSAGE: &'static str = "Error al cargar datos del gráfico de nómina.";

    fn transform(rows: Self::Response) -> ChartData {
        series_from_rows(
            &rows,
            |r| r.fecha_label.as_str(),
            vec![Column::new(
                "Costo de Nómina",
                |r: &PayrollRow| r.nomina_valor,
                style(ORANGE, 0.8),
            )],
        )
    }

    fn presentation() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Bar,
            stacked: false,
            legend: LegendPosition::Top,
            scale: ValueScale::Currency(MillionsPrecision::OneDecimal),
            data_labels: DataLabelPolicy::NonZero,
        }
    }
}

pub struct Headcount;

impl ChartDefinition for Headcount {
    type Response = Vec<HeadcountRow>;

    const KEY: &'static str = "headcount";
    const TITLE: &'static str = "Cantidad de Personal";
    const ENDPOINT: &'static str = "personas";
    const FAILURE_MESSAGE: &'static str = "Error al cargar datos del gráfico de personas.";

    fn transform(rows: Self::Response) -> ChartData {
        series_from_rows(
            &rows,
            |r| r.fecha_label.as_str(),
            vec![Column::new(
                "Cantidad de Personas",
                |r: &HeadcountRow| r.personas_valor,
                style(RED, 0.4).filled(),
            )],
        )
    }

    fn presentation() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Line,
            stacked: false,
            legend: LegendPosition::Top,
            scale: ValueScale::Count,
            data_labels: DataLabelPolicy::NonZero,
        }
    }
}

pub struct Expenses;

impl ChartDefinition for Expenses {
    type Response = Vec<ExpenseRow>;

    const KEY: &'static str = "expenses";
    const TITLE: &'static str = "Composición de Gastos Mensuales";
    const ENDPOINT: &'static str = "gastos";
    const FAILURE_MESSAGE: &'static str = "Error al cargar datos del gráfico de gastos.";

    fn transform(rows: Self::Response) -> ChartData {
        series_from_rows(
            &rows,
            |r| r.fecha_label.as_str(),
            vec![
                Column::new("Nómina", |r: &ExpenseRow| r.nomina, category(0)),
                Column::new("Aux. Transporte", |r: &ExpenseRow| r.aux_transporte, category(1)),
                Column::new("Prestaciones", |r: &ExpenseRow| r.prestaciones, category(2)),
                Column::new("Gastos Fijos", |r: &ExpenseRow| r.gastos_fijos, category(3)),
                Column::new("Gastos Variables", |r: &ExpenseRow| r.gastos_variable, category(4)),
            ],
        )
    }

    fn presentation() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Bar,
            stacked: true,
            legend: LegendPosition::Bottom,
            scale: ValueScale::Currency(MillionsPrecision::OneDecimal),
            data_labels: DataLabelPolicy::Hidden,
        }
    }
}

pub struct Novelties;

impl ChartDefinition for Novelties {
    type Response = Vec<NoveltyRow>;

    const KEY: &'static str = "novelties";
    const TITLE: &'static str = "Composición de Novedades (Recargos y Extras)";
    const ENDPOINT: &'static str = "novedades";
    const INCOMPLETE_MESSAGE: &'static str = PAYROLL_CENTER_INCOMPLETE;
    const FAILURE_MESSAGE: &'static str = "Error al cargar datos del gráfico de novedades.";

    fn transform(rows: Self::Response) -> ChartData {
        series_from_rows(
            &rows,
            |r| r.fecha_label.as_str(),
            vec![
                Column::new("Recargo", |r: &NoveltyRow| r.recaro_total, category(0)),
                Column::new("Extras", |r: &NoveltyRow| r.extras_total, category(1)),
                Column::new("Dominical", |r: &NoveltyRow| r.dominical_total, category(2)),
                Column::new("Bonificación", |r: &NoveltyRow| r.bonificacion_total, category(3)),
                Column::new("Incapacidad", |r: &NoveltyRow| r.incapacidad_total, category(4)),
            ],
        )
    }

    fn presentation() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Bar,
            stacked: true,
            legend: LegendPosition::Bottom,
            scale: ValueScale::Currency(MillionsPrecision::OneDecimal),
            data_labels: DataLabelPolicy::Abbreviation,
        }
    }
}

pub struct SalaryTransport;

impl ChartDefinition for SalaryTransport {
    type Response = Vec<SalaryTransportRow>;

    const KEY: &'static str = "salary_transport";
    const TITLE: &'static str = "Comparación Salario vs Aux. Transporte";
    const ENDPOINT: &'static str = "salario-transporte";
    const INCOMPLETE_MESSAGE: &'static str = PAYROLL_CENTER_INCOMPLETE;
    const FAILURE_MESSAGE: &'static str = "Error al cargar datos del gráfico de nómina.";

    fn transform(rows: Self::Response) -> ChartData {
        series_from_rows(
            &rows,
            |r| r.fecha_label.as_str(),
            vec![
                Column::new(
                    "Salario (Categoría)",
                    |r: &SalaryTransportRow| r.salario_total,
                    style(BLUE, 0.9),
                ),
                Column::new(
                    "Aux. Transporte (Categoría)",
                    |r: &SalaryTransportRow| r.transporte_total,
                    style(ORANGE, 0.9),
                ),
            ],
        )
    }

    fn presentation() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Bar,
            stacked: true,
            legend: LegendPosition::Top,
            scale: ValueScale::Currency(MillionsPrecision::OneDecimal),
            data_labels: DataLabelPolicy::AboveThreshold(STACKED_LABEL_THRESHOLD),
        }
    }
}

pub struct NoveltyShare;

impl ChartDefinition for NoveltyShare {
    type Response = NoveltyTotals;

    const KEY: &'static str = "novelty_share";
    const TITLE: &'static str = "Distribución Total de Novedades";
    const ENDPOINT: &'static str = "novedades-torta";
    const INCOMPLETE_MESSAGE: &'static str = PAYROLL_CENTER_INCOMPLETE;
    const EMPTY_MESSAGE: &'static str =
        "No hay valores de novedades positivos para el período seleccionado.";
    const FAILURE_MESSAGE: &'static str = "Error al cargar datos del gráfico de torta.";

    /// Zero and negative totals are dropped; every kept slice keeps its
    /// category color
    fn transform(totals: Self::Response) -> ChartData {
        let slices = [
            ("Recargo", totals.recaro_total),
            ("Extras", totals.extras_total),
            ("Dominical", totals.dominical_total),
            ("Bonificación", totals.bonificacion_total),
            ("Incapacidad", totals.incapacidad_total),
        ];

        let mut labels = Vec::new();
        let mut data = Vec::new();
        let mut colors = Vec::new();
        for (index, (label, value)) in slices.iter().enumerate() {
            if *value > 0.0 {
                labels.push(label.to_string());
                data.push(*value);
                colors.push(category(index).fill_color);
            }
        }

        if labels.is_empty() {
            return ChartData::default();
        }
        ChartData {
            labels,
            series: vec![ChartSeries {
                label: "Total Novedades".to_string(),
                data,
                style: SeriesStyle {
                    border_color: "white".to_string(),
                    ..SeriesStyle::default()
                }
                .with_slices(colors),
            }],
        }
    }

    fn presentation() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Pie,
            stacked: false,
            legend: LegendPosition::Bottom,
            scale: ValueScale::Currency(MillionsPrecision::OneDecimal),
            data_labels: DataLabelPolicy::Share,
        }
    }
}

pub struct ProfitMargin;

impl ChartDefinition for ProfitMargin {
    type Response = ProfitMarginResponse;

    const KEY: &'static str = "profit_margin";
    const TITLE: &'static str = "Utilidad Mensual";
    const ENDPOINT: &'static str = "utilidad";
    const REQUIRED: &'static [FilterField] = CENTER_YEAR;
    const INCOMPLETE_MESSAGE: &'static str =
        "Por favor, seleccione un centro y un año para ver los datos.";
    const FAILURE_MESSAGE: &'static str = "Error al cargar datos del gráfico de utilidad.";

    fn transform(response: Self::Response) -> ChartData {
        let line_colors = [TEAL, RED, BLUE, ORANGE, PURPLE];
        let series = response
            .datasets
            .into_iter()
            .enumerate()
            .map(|(i, dataset)| ChartSeries {
                label: dataset.label,
                data: dataset.data.into_iter().map(|v| v.0).collect(),
                style: style(line_colors[i % line_colors.len()], 0.2),
            })
            .collect();

        ChartData {
            labels: response.labels,
            series,
        }
    }

    fn presentation() -> ChartPresentation {
        ChartPresentation {
            shape: ChartShape::Line,
            stacked: false,
            legend: LegendPosition::Top,
            scale: ValueScale::Ratio,
            data_labels: DataLabelPolicy::Hidden,
        }
    }

    /// Names the selected year: "Utilidad Mensual (2024)"
    fn heading(filter: &ChartFilter) -> String {
        match filter.ano {
            Some(ano) => format!("{} ({})", Self::TITLE, ano),
            None => Self::TITLE.to_string(),
        }
    }
}

/// Every chart the pages can place, so components can stay non-generic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Billing,
    Payroll,
    Headcount,
    Expenses,
    Novelties,
    SalaryTransport,
    NoveltyShare,
    ProfitMargin,
}

impl ChartKind {
    pub fn all() -> Vec<ChartKind> {
        vec![
            ChartKind::Billing,
            ChartKind::Payroll,
            ChartKind::Headcount,
            ChartKind::Expenses,
            ChartKind::Novelties,
            ChartKind::SalaryTransport,
            ChartKind::NoveltyShare,
            ChartKind::ProfitMargin,
        ]
    }

    pub fn heading(&self, filter: &ChartFilter) -> String {
        match self {
            ChartKind::Billing => Billing::heading(filter),
            ChartKind::Payroll => Payroll::heading(filter),
            ChartKind::Headcount => Headcount::heading(filter),
            ChartKind::Expenses => Expenses::heading(filter),
            ChartKind::Novelties => Novelties::heading(filter),
            ChartKind::SalaryTransport => SalaryTransport::heading(filter),
            ChartKind::NoveltyShare => NoveltyShare::heading(filter),
            ChartKind::ProfitMargin => ProfitMargin::heading(filter),
        }
    }

    pub fn presentation(&self) -> ChartPresentation {
        match self {
            ChartKind::Billing => Billing::presentation(),
            ChartKind::Payroll => Payroll::presentation(),
            ChartKind::Headcount => Headcount::presentation(),
            ChartKind::Expenses => Expenses::presentation(),
            ChartKind::Novelties => Novelties::presentation(),
            ChartKind::SalaryTransport => SalaryTransport::presentation(),
            ChartKind::NoveltyShare => NoveltyShare::presentation(),
            ChartKind::ProfitMargin => ProfitMargin::presentation(),
        }
    }
}

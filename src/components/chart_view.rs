//! Task Chart View
//!
//! SVG pie of task counts per status plus one summary card per status.

use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::prelude::*;

use crate::board;
use crate::models::{Task, TaskStatus};

const CX: f64 = 160.0;
const CY: f64 = 120.0;
const RADIUS: f64 = 80.0;
const LABEL_RADIUS: f64 = RADIUS + 14.0;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub status: TaskStatus,
    pub count: usize,
    /// Rounded share of all tasks
    pub percent: u32,
    /// Sweep in radians
    pub sweep: f64,
    /// SVG path; `None` when the slice is the whole pie
    pub path: Option<String>,
    pub label_x: f64,
    pub label_y: f64,
    pub label_anchor: &'static str,
}

impl PieSlice {
    pub fn label(&self) -> String {
        format!("{}: {}%", self.status.label(), self.percent)
    }
}

/// Slices clockwise from 12 o'clock, skipping empty statuses
pub fn pie_slices(counts: &[(TaskStatus, usize)]) -> Vec<PieSlice> {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    let mut slices = Vec::new();
    for &(status, count) in counts.iter().filter(|(_, n)| *n > 0) {
        let fraction = count as f64 / total as f64;
        let sweep = fraction * TAU;
        let end = start + sweep;

        let path = (count < total).then(|| {
            let large_arc = if sweep > std::f64::consts::PI { 1 } else { 0 };
            format!(
                "M {CX} {CY} L {:.2} {:.2} A {RADIUS} {RADIUS} 0 {} 1 {:.2} {:.2} Z",
                CX + RADIUS * start.cos(),
                CY + RADIUS * start.sin(),
                large_arc,
                CX + RADIUS * end.cos(),
                CY + RADIUS * end.sin(),
            )
        });

        let mid = start + sweep / 2.0;
        slices.push(PieSlice {
            status,
            count,
            percent: (fraction * 100.0).round() as u32,
            sweep,
            path,
            label_x: CX + LABEL_RADIUS * mid.cos(),
            label_y: CY + LABEL_RADIUS * mid.sin(),
            label_anchor: if mid.cos() >= 0.0 { "start" } else { "end" },
        });
        start = end;
    }
    slices
}

#[component]
pub fn ChartView(#[prop(into)] tasks: Signal<Vec<Task>>) -> impl IntoView {
    let counts = Memo::new(move |_| tasks.with(|list| board::status_counts(list)));

    view! {
        <section class="chart-view">
            <h1 class="view-heading">"Task Status Chart"</h1>
            <div class="chart-panel">
                <Show
                    when=move || !tasks.with(Vec::is_empty)
                    fallback=|| view! {
                        <div class="chart-empty">
                            <p>"No tasks available to display in chart."</p>
                        </div>
                    }
                >
                    <PieChart counts=counts />
                </Show>
            </div>

            <div class="summary-grid">
                {move || counts.get().into_iter().map(|(status, count)| view! {
                    <div class="summary-card" style=format!("border-left: 4px solid {};", status.color())>
                        <h3>{status.label()}</h3>
                        <p class="summary-count">{count}</p>
                        <p class="summary-unit">"tasks"</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn PieChart(counts: Memo<[(TaskStatus, usize); 3]>) -> impl IntoView {
    let slices = move || pie_slices(&counts.get());

    view! {
        <svg class="pie-chart" viewBox="0 0 320 240" role="img" aria-label="Tasks by status">
            {move || slices().into_iter().map(|slice| {
                let color = slice.status.color();
                let title = format!("{}: {} tasks", slice.status.label(), slice.count);
                let shape = match slice.path.clone() {
                    Some(d) => view! { <path d=d fill=color stroke="#fff"><title>{title}</title></path> }.into_any(),
                    None => view! { <circle cx=CX.to_string() cy=CY.to_string() r=RADIUS.to_string() fill=color><title>{title}</title></circle> }.into_any(),
                };
                view! {
                    <g>
                        {shape}
                        <text
                            x=format!("{:.1}", slice.label_x)
                            y=format!("{:.1}", slice.label_y)
                            text-anchor=slice.label_anchor
                            class="pie-label"
                        >
                            {slice.label()}
                        </text>
                    </g>
                }
            }).collect_view()}
        </svg>
        <ul class="chart-legend">
            {TaskStatus::ALL.iter().map(|status| view! {
                <li>
                    <span class="legend-swatch" style=format!("background-color: {};", status.color())></span>
                    {status.label()}
                </li>
            }).collect_view()}
        </ul>
    }
}

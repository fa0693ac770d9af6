//! Money cell: right-aligned, formatted, optionally colored by sign.

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    /// Value to display; None renders an em dash.
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Currency prefix.
    #[prop(optional, default = "$")]
    currency: &'static str,

    /// Whether to show the currency prefix.
    #[prop(optional, default = false)]
    show_currency: bool,

    /// Positive green, negative red.
    #[prop(optional, default = false)]
    color_by_sign: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => {
            let formatted = format_money(v);
            if show_currency {
                format!("{} {}", currency, formatted)
            } else {
                formatted
            }
        }
        None => "—".to_string(),
    };

    let cell_style = move || {
        let mut styles = vec!["text-align: right", "font-variant-numeric: tabular-nums"];
        if color_by_sign {
            if let Some(v) = value.get() {
                if v > 0.0 {
                    styles.push("color: var(--color-success-700)");
                } else if v < 0.0 {
                    styles.push("color: var(--color-error-700)");
                }
            }
        }
        styles.join("; ")
    };

    view! {
        <TableCell attr:style=cell_style>
            <TableCellLayout>{formatted_text}</TableCellLayout>
        </TableCell>
    }
}

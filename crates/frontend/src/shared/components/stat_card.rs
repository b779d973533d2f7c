//! Карточки показателей для аналитических страниц

use crate::shared::icons::icon;
use crate::shared::number_format::format_value;
use contracts::shared::indicators::{IndicatorStatus, Kpi, ValueFormat};
use leptos::prelude::*;

/// Изменение меньше порога по модулю считается отсутствием изменения
const FLAT_CHANGE_PERCENT: f64 = 0.5;

pub fn status_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    }
}

/// Подпись и класс изменения: `↑4.2%`, `↓1.0%` или `0.3%`
pub fn change_label(pct: f64) -> (String, &'static str) {
    let (arrow, class) = if pct >= FLAT_CHANGE_PERCENT {
        ("↑", "stat-card__change stat-card__change--up")
    } else if pct <= -FLAT_CHANGE_PERCENT {
        ("↓", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    };
    (format!("{}{:.1}%", arrow, pct.abs()), class)
}

#[component]
pub fn StatCard(
    label: String,
    /// Имя для `icon()`
    icon_name: String,
    /// `None` пока данных нет
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(into)] status: Signal<IndicatorStatus>,
    /// Изменение к предыдущему значению, %
    #[prop(into)]
    change_percent: Signal<Option<f64>>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let value_text = move || {
        value
            .get()
            .map(|v| format_value(v, &format))
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <div class=move || status_class(status.get())>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {value_text}
                    {move || change_percent.get().map(|pct| {
                        let (text, class) = change_label(pct);
                        view! { <span class=class>{text}</span> }
                    })}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

/// Карточка готового KPI из ответа сервера
#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    view! {
        <StatCard
            label=kpi.label
            icon_name=kpi.icon
            value=Signal::stored(kpi.value)
            format=kpi.format
            status=Signal::stored(kpi.status)
            change_percent=Signal::stored(kpi.change_percent)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_label() {
        assert_eq!(change_label(4.26).0, "↑4.3%");
        assert_eq!(change_label(-1.0), ("↓1.0%".to_string(), "stat-card__change stat-card__change--down"));
        assert_eq!(change_label(0.3).1, "stat-card__change stat-card__change--flat");
    }

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(IndicatorStatus::Neutral), "stat-card");
        assert_eq!(status_class(IndicatorStatus::Bad), "stat-card stat-card--error");
    }
}

//! Страница `/analytics`: живые RTB-метрики, устройства и переходы к отчётам

use crate::dashboards::d400_rtb_metrics::ui::RtbMetricsDashboard;
use crate::dashboards::d403_device_breakdown::ui::DeviceBreakdownDashboard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use leptos::prelude::*;

/// Отчёты с отдельными страницами: (адрес, иконка, название, описание)
pub const REPORT_LINKS: &[(&str, &str, &str, &str)] = &[
    (
        "/fraud-detection",
        "shield",
        "Обнаружение фрода",
        "Типы фрода и подозрительные источники трафика",
    ),
    (
        "/audience-insights",
        "users",
        "Аудитория",
        "Возраст, пол, интересы и лучшие сегменты",
    ),
    (
        "/creative-performance",
        "bar-chart",
        "Эффективность креативов",
        "CTR, CPM и ROAS по каждому креативу",
    ),
    ("/segments", "pie-chart", "Сегменты", "Справочник аудиторных сегментов"),
];

#[component]
pub fn AnalyticsOverview() -> impl IntoView {
    view! {
        <PageFrame page_id="d400_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("bar-chart")}
                    <h1 class="page__title">"Аналитика"</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="report-links">
                    {REPORT_LINKS.iter().map(|&(href, icon_name, title, description)| view! {
                        <a class="report-link" href=href>
                            <div class="report-link__icon">{icon(icon_name)}</div>
                            <div class="report-link__title">{title}</div>
                            <div class="report-link__description">{description}</div>
                        </a>
                    }).collect_view()}
                </div>

                <RtbMetricsDashboard/>
                <DeviceBreakdownDashboard/>
            </div>
        </PageFrame>
    }
}

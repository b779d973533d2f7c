use crate::dashboards::d402_audience_insights::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::number_format::{format_number_int, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d402_audience_insights::{AudienceInsightsResponse, AudienceSegment};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Сегменты с наибольшим индексом соответствия
pub fn top_segments(segments: &[AudienceSegment], limit: usize) -> Vec<AudienceSegment> {
    let mut rows = segments.to_vec();
    rows.sort_by(|a, b| b.affinity_index.cmp(&a.affinity_index));
    rows.truncate(limit);
    rows
}

#[component]
pub fn AudienceInsightsDashboard() -> impl IntoView {
    let data = RwSignal::new(None::<AudienceInsightsResponse>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_audience_insights().await {
                Ok(response) => data.set(Some(response)),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let total_audience = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.total_audience() as f64))
    });
    let segment_count = Signal::derive(move || {
        data.with(|d| d.as_ref().map(|d| d.segments.len() as f64))
    });
    let avg_ctr = Signal::derive(move || {
        data.with(|d| {
            d.as_ref().filter(|d| !d.segments.is_empty()).map(|d| {
                d.segments.iter().map(|s| s.ctr).sum::<f64>() / d.segments.len() as f64
            })
        })
    });

    let age_rows = move || {
        data.with(|d| d.as_ref().map(|d| d.age_gender.clone()).unwrap_or_default())
            .into_iter()
            .map(|row| {
                let male = format!("width: {:.1}%", row.male_percent.clamp(0.0, 100.0));
                let female = format!("width: {:.1}%", row.female_percent.clamp(0.0, 100.0));
                view! {
                    <div class="age-gender__row">
                        <div class="age-gender__label">{row.age_range}</div>
                        <div class="age-gender__bars">
                            <div class="age-gender__bar age-gender__bar--male" style=male
                                title=format_percent(row.male_percent, 1)></div>
                            <div class="age-gender__bar age-gender__bar--female" style=female
                                title=format_percent(row.female_percent, 1)></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let interest_rows = move || {
        data.with(|d| d.as_ref().map(|d| d.interests.clone()).unwrap_or_default())
            .into_iter()
            .map(|interest| {
                let width = format!("width: {:.1}%", interest.share_percent.clamp(0.0, 100.0));
                view! {
                    <div class="share-bar">
                        <div class="share-bar__label">
                            {interest.name}
                            <span class="share-bar__value">{format_percent(interest.share_percent, 1)}</span>
                        </div>
                        <div class="share-bar__track">
                            <div class="share-bar__fill" style=width></div>
                        </div>
                    </div>
                }
            })
            .collect_view()
    };

    let segment_rows = move || {
        data.with(|d| d.as_ref().map(|d| top_segments(&d.segments, 5)).unwrap_or_default())
            .into_iter()
            .map(|segment| view! {
                <tr class="table__row">
                    <td class="table__cell">{segment.name}</td>
                    <td class="table__cell table__cell--muted">{segment.category}</td>
                    <td class="table__cell table__cell--number">{format_number_int(segment.size as f64)}</td>
                    <td class="table__cell table__cell--number">{segment.affinity_index}</td>
                </tr>
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="d402_audience_insights--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("users")}
                    <h1 class="page__title">"Аудитория"</h1>
                </div>
                <div class="page__header-right">
                    <a class="button button--secondary" href="/segments">
                        {icon("pie-chart")}
                        " Все сегменты"
                    </a>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard
                        label="Аудитория сегментов".to_string()
                        icon_name="users".to_string()
                        value=total_audience
                        format=ValueFormat::Integer
                        status=Signal::stored(IndicatorStatus::Neutral)
                        change_percent=Signal::stored(None::<f64>)
                    />
                    <StatCard
                        label="Сегментов".to_string()
                        icon_name="pie-chart".to_string()
                        value=segment_count
                        format=ValueFormat::Integer
                        status=Signal::stored(IndicatorStatus::Neutral)
                        change_percent=Signal::stored(None::<f64>)
                    />
                    <StatCard
                        label="Средний CTR".to_string()
                        icon_name="mouse-pointer".to_string()
                        value=avg_ctr
                        format=ValueFormat::Percent { decimals: 2 }
                        status=Signal::stored(IndicatorStatus::Neutral)
                        change_percent=Signal::stored(None::<f64>)
                    />
                </div>

                <div class="dashboard-grid">
                    <section class="dashboard-section">
                        <h2 class="dashboard-section__title">"Возраст и пол"</h2>
                        <div class="age-gender__legend">
                            <span class="age-gender__legend-item age-gender__legend-item--male">"Мужчины"</span>
                            <span class="age-gender__legend-item age-gender__legend-item--female">"Женщины"</span>
                        </div>
                        {age_rows}
                    </section>

                    <section class="dashboard-section">
                        <h2 class="dashboard-section__title">"Интересы"</h2>
                        {interest_rows}
                    </section>

                    <section class="dashboard-section dashboard-section--wide">
                        <h2 class="dashboard-section__title">"Лучшие сегменты"</h2>
                        <div class="table-wrapper">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        <th class="table__header-cell">"Сегмент"</th>
                                        <th class="table__header-cell">"Категория"</th>
                                        <th class="table__header-cell">"Размер"</th>
                                        <th class="table__header-cell">"Индекс"</th>
                                    </tr>
                                </thead>
                                <tbody>{segment_rows}</tbody>
                            </table>
                        </div>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(name: &str, affinity_index: u32) -> AudienceSegment {
        AudienceSegment {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: "Интересы".to_string(),
            size: 10_000,
            reach_percent: 12.0,
            ctr: 0.8,
            affinity_index,
        }
    }

    #[test]
    fn test_top_segments() {
        let segments = vec![segment("Авто", 90), segment("Спорт", 180), segment("Путешествия", 140)];
        let top = top_segments(&segments, 2);
        let names: Vec<_> = top.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Спорт", "Путешествия"]);
        assert!(top_segments(&[], 5).is_empty());
    }
}

use crate::dashboards::d403_device_breakdown::api;
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number_int, format_percent};
use crate::shared::toast::use_toast;
use contracts::dashboards::d403_device_breakdown::{DeviceBreakdownResponse, DeviceMetrics};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Строка таблицы устройств
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceRow(pub DeviceMetrics);

impl DeviceRow {
    fn os_label(&self) -> &str {
        if self.0.os.is_empty() {
            "Все ОС"
        } else {
            &self.0.os
        }
    }
}

impl CsvExportable for DeviceRow {
    fn headers() -> Vec<&'static str> {
        vec!["Устройство", "ОС", "Показы", "Клики", "CTR, %", "Конверсии", "Расход", "CPM", "CPA"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        let m = &self.0;
        let decimal = |v: f64| format!("{:.2}", v).replace('.', ",");
        vec![
            m.device.label().to_string(),
            self.os_label().to_string(),
            m.impressions.to_string(),
            m.clicks.to_string(),
            decimal(m.ctr()),
            m.conversions.to_string(),
            decimal(m.spend),
            decimal(m.cpm()),
            decimal(m.cpa()),
        ]
    }
}

/// Строки для таблицы: детально по ОС или свёрнуто по типу устройства
pub fn device_rows(response: &DeviceBreakdownResponse, by_device: bool) -> Vec<DeviceRow> {
    let rows = if by_device {
        response.totals_by_device()
    } else {
        response.rows.clone()
    };
    rows.into_iter().map(DeviceRow).collect()
}

#[component]
pub fn DeviceBreakdownDashboard() -> impl IntoView {
    let toast = use_toast();
    let data = RwSignal::new(None::<DeviceBreakdownResponse>);
    let error = RwSignal::new(None::<String>);
    let by_device = RwSignal::new(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_device_breakdown().await {
                Ok(response) => data.set(Some(response)),
                Err(e) => error.set(Some(e)),
            }
        });
    });

    let rows = Memo::new(move |_| {
        let grouped = by_device.get();
        data.with(|d| d.as_ref().map(|d| device_rows(d, grouped)).unwrap_or_default())
    });

    let export = move |_| {
        let filename = if by_device.get_untracked() {
            "devices.csv"
        } else {
            "devices_os.csv"
        };
        if let Err(e) = export_to_csv(&rows.get_untracked(), filename) {
            toast.error(e);
        }
    };

    view! {
        <section class="dashboard-section">
            <div class="dashboard-section__header">
                <h2 class="dashboard-section__title">
                    {icon("monitor")}
                    " Устройства"
                </h2>
                <div class="dashboard-section__actions">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || !by_device.get()
                            on:change=move |ev| by_device.set(!event_target_checked(&ev))
                        />
                        " По операционным системам"
                    </label>
                    <button class="button button--secondary" on:click=export>
                        {icon("download")}
                        " CSV"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="table-wrapper">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Устройство"</th>
                            <th class="table__header-cell">"ОС"</th>
                            <th class="table__header-cell">"Показы"</th>
                            <th class="table__header-cell">"Клики"</th>
                            <th class="table__header-cell">"CTR"</th>
                            <th class="table__header-cell">"Конверсии"</th>
                            <th class="table__header-cell">"Расход"</th>
                            <th class="table__header-cell">"CPM"</th>
                            <th class="table__header-cell">"CPA"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows.get().into_iter().map(|row| {
                            let os = row.os_label().to_string();
                            let m = row.0;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{m.device.label()}</td>
                                    <td class="table__cell table__cell--muted">{os}</td>
                                    <td class="table__cell table__cell--number">{format_number_int(m.impressions as f64)}</td>
                                    <td class="table__cell table__cell--number">{format_number_int(m.clicks as f64)}</td>
                                    <td class="table__cell table__cell--number">{format_percent(m.ctr(), 2)}</td>
                                    <td class="table__cell table__cell--number">{format_number_int(m.conversions as f64)}</td>
                                    <td class="table__cell table__cell--number">{format!("{} ₽", format_money(m.spend))}</td>
                                    <td class="table__cell table__cell--number">{format!("{} ₽", format_money(m.cpm()))}</td>
                                    <td class="table__cell table__cell--number">{format!("{} ₽", format_money(m.cpa()))}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_ad_group::DeviceType;

    fn metrics(device: DeviceType, os: &str) -> DeviceMetrics {
        DeviceMetrics {
            device,
            os: os.to_string(),
            impressions: 2000,
            clicks: 30,
            conversions: 3,
            spend: 240.0,
        }
    }

    #[test]
    fn test_device_rows_grouping() {
        let response = DeviceBreakdownResponse {
            rows: vec![
                metrics(DeviceType::Mobile, "Android"),
                metrics(DeviceType::Mobile, "iOS"),
                metrics(DeviceType::Desktop, "Windows"),
            ],
        };
        assert_eq!(device_rows(&response, false).len(), 3);

        let grouped = device_rows(&response, true);
        assert_eq!(grouped.len(), 2);
        assert!(grouped.iter().all(|r| r.os_label() == "Все ОС"));
    }

    #[test]
    fn test_csv_row() {
        let row = DeviceRow(metrics(DeviceType::Mobile, "iOS"));
        let cells = row.to_csv_row();
        assert_eq!(cells.len(), DeviceRow::headers().len());
        assert_eq!(cells[1], "iOS");
        assert_eq!(cells[4], "1,50");
        assert_eq!(cells[8], "80,00");
    }
}

use serde::{Deserialize, Serialize};

/// Формат отображения значения на фронтенде
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

impl ValueFormat {
    pub fn rub() -> Self {
        ValueFormat::Money {
            currency: "₽".to_string(),
        }
    }
}

/// Визуальный статус индикатора (цвет карточки)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

/// Карточка KPI на аналитической странице
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub icon: String,
    /// `None`, если данных нет
    pub value: Option<f64>,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    /// Изменение к предыдущему периоду, %
    pub change_percent: Option<f64>,
}

impl Kpi {
    pub fn new(label: &str, icon: &str, value: f64, format: ValueFormat) -> Self {
        Self {
            label: label.to_string(),
            icon: icon.to_string(),
            value: Some(value),
            format,
            status: IndicatorStatus::Neutral,
            change_percent: None,
        }
    }

    pub fn with_change(mut self, change_percent: f64) -> Self {
        self.change_percent = Some(change_percent);
        self
    }

    /// Статус по знаку изменения. Для стоимостных метрик `higher_is_better = false`
    pub fn with_trend_status(mut self, higher_is_better: bool) -> Self {
        self.status = match self.change_percent {
            Some(pct) if pct.abs() < 0.5 => IndicatorStatus::Neutral,
            Some(pct) if (pct > 0.0) == higher_is_better => IndicatorStatus::Good,
            Some(_) => IndicatorStatus::Bad,
            None => IndicatorStatus::Neutral,
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_status() {
        let kpi = Kpi::new("CTR", "activity", 1.2, ValueFormat::Percent { decimals: 2 })
            .with_change(4.0)
            .with_trend_status(true);
        assert_eq!(kpi.status, IndicatorStatus::Good);

        let cost = Kpi::new("CPM", "dollar-sign", 120.0, ValueFormat::rub())
            .with_change(4.0)
            .with_trend_status(false);
        assert_eq!(cost.status, IndicatorStatus::Bad);

        let flat = Kpi::new("CPM", "dollar-sign", 120.0, ValueFormat::rub())
            .with_change(0.1)
            .with_trend_status(false);
        assert_eq!(flat.status, IndicatorStatus::Neutral);
    }
}

use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

/// Цвет бейджа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
    Archived,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
            BadgeVariant::Archived => "badge--archived",
        }
    }
}

impl From<EntityStatus> for BadgeVariant {
    fn from(status: EntityStatus) -> Self {
        match status {
            EntityStatus::Active => BadgeVariant::Success,
            EntityStatus::Paused => BadgeVariant::Warning,
            EntityStatus::Draft => BadgeVariant::Neutral,
            EntityStatus::Archived => BadgeVariant::Archived,
        }
    }
}

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! { <span class=format!("badge {}", variant.class())>{children()}</span> }
}

/// Бейдж статуса рекламной сущности
#[component]
pub fn StatusBadge(#[prop(into)] status: Signal<EntityStatus>) -> impl IntoView {
    view! {
        <span class=move || {
            format!("badge badge--status {}", BadgeVariant::from(status.get()).class())
        }>
            {move || status.get().label()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(BadgeVariant::from(EntityStatus::Active).class(), "badge--success");
        assert_eq!(BadgeVariant::from(EntityStatus::Archived).class(), "badge--archived");
        assert_eq!(BadgeVariant::default(), BadgeVariant::Neutral);
    }
}

use super::{AggregateId, EntityMetadata};

/// Общий интерфейс рекламных сущностей для in-memory таблиц
pub trait AggregateRoot {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;

    /// Наименование, по нему сортируются списки
    fn description(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Сегмент REST-пути коллекции ("advertisers", "campaigns", ...)
    fn collection_name() -> &'static str;

    /// Префикс бизнес-кода ("ADV", "CMP", ...)
    fn code_prefix() -> &'static str;

    /// Запись видна в выборках, пока не удалена
    fn is_visible(&self) -> bool {
        !self.metadata().is_deleted
    }
}

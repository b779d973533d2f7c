//! Общие типы фронтенда и бэкенда DSP-консоли:
//! агрегаты рекламных сущностей, формы с правилами валидации
//! и DTO аналитических дашбордов.

pub mod dashboards;
pub mod domain;
pub mod shared;

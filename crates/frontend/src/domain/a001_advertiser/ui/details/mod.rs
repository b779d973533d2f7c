//! Форма рекламодателя (MVVM):
//! - view_model.rs: состояние формы и команды
//! - view.rs: разметка формы
//! - page.rs: страница маршрута, читает параметры и ведёт навигацию

mod page;
mod view;
mod view_model;

pub use page::AdvertiserDetailsPage;
pub use view::AdvertiserDetails;
pub use view_model::AdvertiserDetailsViewModel;

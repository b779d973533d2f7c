mod page;
mod view;
mod view_model;

pub use page::CreativeDetailsPage;
pub use view::CreativeDetails;
pub use view_model::CreativeDetailsViewModel;

mod page;
mod view;
mod view_model;

pub use page::AdGroupDetailsPage;
pub use view::AdGroupDetails;
pub use view_model::AdGroupDetailsViewModel;

mod page;
mod view;
mod view_model;

pub use page::CampaignDetailsPage;
pub use view::CampaignDetails;
pub use view_model::CampaignDetailsViewModel;

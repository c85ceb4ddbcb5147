//! UI Components
//!
//! Shared widgets plus one module per screen.

mod academic_programs;
mod category_tabs;
mod contact_inbox;
mod council_members;
mod delete_confirm_button;
mod event_videos_admin;
mod event_videos_gallery;
mod events;
mod image_gallery;
mod notice_stack;
mod pagination_bar;
mod research_projects;
mod search_bar;
mod stat_cards;

pub use academic_programs::AcademicPrograms;
pub use category_tabs::CategoryTabs;
pub use contact_inbox::ContactInbox;
pub use council_members::CouncilMembers;
pub use delete_confirm_button::DeleteConfirmButton;
pub use event_videos_admin::EventVideosAdmin;
pub use event_videos_gallery::EventVideosGallery;
pub use events::{PastEvents, UpcomingEvents};
pub use image_gallery::ImageGallery;
pub use notice_stack::NoticeStack;
pub use pagination_bar::PaginationBar;
pub use research_projects::ResearchProjects;
pub use search_bar::SearchBar;
pub use stat_cards::StatCards;

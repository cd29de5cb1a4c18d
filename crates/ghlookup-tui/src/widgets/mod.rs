//! Widget components for the TUI

mod header;
pub mod modal_overlay;
mod notice;
mod profile_card;
mod search_bar;
mod status_bar;
mod user_list;

pub use header::MainHeader;
pub use notice::NoticeModal;
pub use profile_card::ProfileCard;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use user_list::UserList;

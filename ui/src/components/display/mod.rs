pub mod members_panel;
pub mod notice_banner;
pub mod registration_complete;

pub use members_panel::*;
pub use notice_banner::*;
pub use registration_complete::*;

pub mod member_entry_form;
pub mod team_name_form;

pub use member_entry_form::*;
pub use team_name_form::*;

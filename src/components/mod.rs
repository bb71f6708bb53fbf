mod activities_list;
mod activity_board;
mod signup_form;
mod status_message;

pub use self::{activities_list::*, activity_board::*, signup_form::*, status_message::*};

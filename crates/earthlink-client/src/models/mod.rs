//! Wire models - JSON shapes exchanged with the API

mod auth;
mod message;
mod reaction;

pub use auth::{LoginResponse, SignUpResponse, ValidateResponse};
pub use message::{MessageCountResponse, MessageModel, NewMessageModel, PostMessageResponse};
pub use reaction::ReactionModel;

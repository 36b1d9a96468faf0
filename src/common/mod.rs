pub mod commands;
pub mod events;
pub mod types;

pub use commands::AuthCommand;
pub use events::{AuthEvent, ChatNotice};
pub use types::{
    ChannelEntry, ChatMessage, Classification, Decoration, MessageId, Priority, Rgb, Shape,
};

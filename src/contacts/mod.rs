pub mod contact;
pub mod contact_listener;
pub mod validation;

pub mod transport;
pub mod api_client;
pub mod store;


pub use self::{
    contact::{Contact, ContactBuilder, ContactId, ContactInput, ContactInputBuilder},
    contact_listener::ContactListener,
    validation::{Field, FieldError, FieldErrors},
    transport::Transport,
    api_client::APIClient,
    store::{ContactStore, Snapshot},
};

use async_trait::async_trait;

use crate::core::Result;
use super::contact::{Contact, ContactId, ContactInput};

/// Remote side of the contact store: the `/contacts` resource.
///
/// Implementations report network failures, non-2xx statuses and
/// undecodable bodies as `Error::Transport`, and a missing delete
/// target as `Error::NotFound`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// `GET /contacts`, in server order.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;

    /// `POST /contacts`. Whatever the backend answers with is discarded.
    async fn create_contact(&self, input: &ContactInput) -> Result<()>;

    /// `DELETE /contacts/{id}`.
    async fn delete_contact(&self, id: ContactId) -> Result<()>;
}

use super::contact::ContactId;
use super::store::Snapshot;

/// Observer of the store's published snapshots. Callbacks run on the task
/// that completed the operation, after the new snapshot is visible.
pub trait ContactListener: Send + Sync {
    fn on_contacts_refreshed(&self, _contacts: &Snapshot) {}
    fn on_contact_removed(&self, _id: ContactId, _contacts: &Snapshot) {}
}

use std::sync::{Arc, Mutex, RwLock};
use log::{debug, error, info};

use crate::core::Result;
use super::{
    contact::{Contact, ContactId, ContactInput},
    contact_listener::ContactListener,
    transport::Transport,
};

/// An immutable view of the collection as published by the store.
pub type Snapshot = Arc<Vec<Contact>>;

/// Owner of the in-memory contact collection.
///
/// Every completed operation publishes at most one new snapshot by swapping
/// the `Arc`; readers holding an older snapshot keep seeing it unchanged.
/// `add` and `remove` are serialized against each other, so a delete's
/// local splice can never be overwritten by an add's resync that was
/// issued before it.
pub struct ContactStore {
    transport   : Arc<dyn Transport>,
    contacts    : RwLock<Snapshot>,
    mutation    : tokio::sync::Mutex<()>,
    listeners   : Mutex<Vec<Arc<dyn ContactListener>>>,
}

impl ContactStore {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            contacts    : RwLock::new(Arc::new(Vec::new())),
            mutation    : tokio::sync::Mutex::new(()),
            listeners   : Mutex::new(Vec::new()),
        }
    }

    pub fn contacts(&self) -> Snapshot {
        match self.contacts.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn contact(&self, id: ContactId) -> Option<Contact> {
        self.contacts().iter().find(|c| c.id() == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.contacts().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts().is_empty()
    }

    pub fn add_listener(&self, listener: Arc<dyn ContactListener>) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }

    /// Replaces the whole collection with the backend's list. On failure
    /// the current snapshot is left as it was.
    pub async fn fetch_all(&self) -> Result<Snapshot> {
        let list = self.transport.list_contacts().await.map_err(|e| {
            error!("Fetch contacts error: {e}");
            e
        })?;

        debug!("Fetched {} contacts", list.len());
        let snapshot = Arc::new(list);
        self.publish(snapshot.clone());
        self.notify(|l| l.on_contacts_refreshed(&snapshot));
        Ok(snapshot)
    }

    /// Creates a contact then resynchronizes from the backend, which owns
    /// the id and timestamps of the new record.
    pub async fn add(&self, input: &ContactInput) -> Result<Snapshot> {
        let _gate = self.mutation.lock().await;

        self.transport.create_contact(input).await.map_err(|e| {
            error!("Add contact error: {e}");
            e
        })?;

        info!("Contact {} <{}> added", input.name(), input.email());
        self.fetch_all().await
    }

    /// Deletes on the backend, then drops the matching entry locally.
    /// An id that is not cached leaves the local collection untouched.
    pub async fn remove(&self, id: ContactId) -> Result<Snapshot> {
        let _gate = self.mutation.lock().await;

        self.transport.delete_contact(id).await.map_err(|e| {
            error!("Delete contact {} error: {e}", id);
            e
        })?;

        info!("Contact {} deleted", id);
        let current = self.contacts();
        if !current.iter().any(|c| c.id() == id) {
            return Ok(current);
        }

        let remaining = current.iter()
            .filter(|c| c.id() != id)
            .cloned()
            .collect::<Vec<_>>();

        let snapshot = Arc::new(remaining);
        self.publish(snapshot.clone());
        self.notify(|l| l.on_contact_removed(id, &snapshot));
        Ok(snapshot)
    }

    fn publish(&self, snapshot: Snapshot) {
        match self.contacts.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }

    fn notify<F>(&self, f: F) where F: Fn(&dyn ContactListener) {
        let listeners = match self.listeners.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };
        listeners.iter().for_each(|l| f(l.as_ref()));
    }
}

use axum::http::StatusCode;
use crm::{
    APIClient,
    ContactInputBuilder,
    Error,
    Transport,
};

use crate::backend::{self, Backend};

/**
# APIClient
 - new
 - base_url
 - list_contacts
 - create_contact
 - delete_contact
 */
#[test]
fn test_new() {
    let client = APIClient::new("http://localhost:8000").unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:8000/");

    let client = APIClient::new("http://localhost:8000/api/v1").unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:8000/api/v1/");

    assert!(matches!(APIClient::new("localhost"), Err(Error::Argument(_))));
    assert!(matches!(APIClient::new("data:text/plain,hi"), Err(Error::Argument(_))));
}

#[tokio::test]
async fn test_list_contacts() {
    let backend = Backend::new();
    backend.seed("Alice", "alice@acme.com", "123", "Acme");
    backend.seed("Bob", "bob@initech.com", "", "");

    let client = APIClient::new(&backend.spawn().await).unwrap();
    let contacts = client.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 2);

    assert_eq!(contacts[0].name(), "Alice");
    assert_eq!(contacts[0].phone(), Some("123"));
    assert_eq!(contacts[0].company(), Some("Acme"));

    assert_eq!(contacts[1].name(), "Bob");
    assert_eq!(contacts[1].phone(), None);
    assert_eq!(contacts[1].company(), None);
}

#[tokio::test]
async fn test_create_and_delete_contact() {
    let backend = Backend::new();
    let client = APIClient::new(&backend.spawn().await).unwrap();

    let input = ContactInputBuilder::new()
        .with_name("Carol")
        .with_email("carol@globex.com")
        .with_phone("+44 20 7946 0958")
        .build()
        .unwrap();

    client.create_contact(&input).await.unwrap();
    assert_eq!(backend.len(), 1);

    let contacts = client.list_contacts().await.unwrap();
    let created = contacts.iter().find(|c| c.matches(&input)).unwrap();

    client.delete_contact(created.id()).await.unwrap();
    assert_eq!(backend.len(), 0);

    let result = client.delete_contact(created.id()).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_server_errors() {
    let url = backend::spawn_broken(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = APIClient::new(&url).unwrap();

    let input = ContactInputBuilder::new()
        .with_name("Dave")
        .with_email("dave@acme.com")
        .build()
        .unwrap();

    assert!(matches!(client.list_contacts().await, Err(Error::Transport(_))));
    assert!(matches!(client.create_contact(&input).await, Err(Error::Transport(_))));
    assert!(matches!(client.delete_contact(1).await, Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_malformed_body() {
    let url = backend::spawn_broken(StatusCode::OK).await;
    let client = APIClient::new(&url).unwrap();

    let result = client.list_contacts().await;
    assert!(matches!(result, Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_unreachable_backend() {
    let client = APIClient::new(&backend::dead_url().await).unwrap();
    let result = client.list_contacts().await;
    assert!(matches!(result, Err(Error::Transport(_))));
    assert!(result.unwrap_err().is_transport());
}

use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::core::{
    config::Config,
    Error,
    Result,
};

use super::{
    contact::{Contact, ContactId, ContactInput},
    transport::Transport,
};

const CONTACTS_PATH: &str = "contacts";

pub struct APIClient {
    base_url    : Url,
    client      : Client,
}

impl APIClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|e| {
            Error::Argument(format!("Invalid base url {}: {e}", base_url))
        })?;
        Self::with_url(url, None)
    }

    pub fn from_config(cfg: &dyn Config) -> Result<Self> {
        Self::with_url(cfg.base_url().clone(), cfg.timeout())
    }

    fn with_url(mut base_url: Url, timeout: Option<Duration>) -> Result<Self> {
        if base_url.cannot_be_a_base() {
            return Err(Error::Argument(format!("Url {} cannot be a base address", base_url)));
        }

        // keep any path prefix of the base address when joining.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            Error::Argument(format!("Http error: building http client error {e}"))
        })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn contacts_url(&self) -> Result<Url> {
        Ok(self.base_url.join(CONTACTS_PATH)?)
    }

    fn contact_url(&self, id: ContactId) -> Result<Url> {
        Ok(self.base_url.join(&format!("{}/{}", CONTACTS_PATH, id))?)
    }
}

#[async_trait]
impl Transport for APIClient {
    async fn list_contacts(&self) -> Result<Vec<Contact>> {
        let url = self.contacts_url()?;
        debug!("GET {}", url);

        let rsp = self.client.get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Transport(format!("Http error: sending http request error {e}"))
        })?;

        let rsp = match rsp.error_for_status() {
            Ok(_res) => _res,
            Err(e) => {
                return Err(Error::Transport(format!("Http error: invalid http response {e}")));
            }
        };

        rsp.json::<Vec<Contact>>().await.map_err(|e| {
            Error::Transport(format!("Http error: deserialize json error {e}"))
        })
    }

    async fn create_contact(&self, input: &ContactInput) -> Result<()> {
        let url = self.contacts_url()?;
        debug!("POST {}", url);

        let rsp = self.client.post(url)
            .json(input)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Transport(format!("Http error: sending http request error {e}"))
        })?;

        match rsp.error_for_status() {
            Ok(_) => Ok(()),
            Err(e) => Err(Error::Transport(format!("Http error: invalid http response {e}"))),
        }
    }

    async fn delete_contact(&self, id: ContactId) -> Result<()> {
        let url = self.contact_url(id)?;
        debug!("DELETE {}", url);

        let rsp = self.client.delete(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Transport(format!("Http error: sending http request error {e}"))
        })?;

        if rsp.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(format!("Contact {} not found", id)));
        }

        match rsp.error_for_status() {
            Ok(_) => Ok(()),
            Err(e) => Err(Error::Transport(format!("Http error: invalid http response {e}"))),
        }
    }
}

//! Async catalog surface: one method per filter intent plus text and cover
//! resolution.
//!
//! # Design
//! `Catalog` pairs a [`CatalogClient`] with a [`Transport`]. Every method is a
//! single unit of work with no state shared between calls, so a `Catalog` can
//! be used from many tasks at once without locking.

use tracing::{instrument, warn};

use crate::client::CatalogClient;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::Query;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::Work;

#[derive(Debug, Clone)]
pub struct Catalog<T = ReqwestTransport> {
    client: CatalogClient,
    transport: T,
}

impl Catalog<ReqwestTransport> {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_transport(CatalogClient::new(&config.base_url), transport))
    }
}

impl<T: Transport> Catalog<T> {
    pub fn with_transport(client: CatalogClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = request.url.clone();
        self.transport
            .execute(request)
            .await
            .inspect_err(|err| warn!(%err, %url, "request failed"))
    }

    /// Works matching `query`, in the order the service returned them.
    #[instrument(skip(self))]
    pub async fn list_works(&self, query: &Query) -> Result<Vec<Work>> {
        let response = self.fetch(self.client.build_list_works(query)).await?;
        self.client
            .parse_list_works(response)
            .inspect_err(|err| warn!(%err, "listing works failed"))
    }

    pub async fn all_works(&self) -> Result<Vec<Work>> {
        self.list_works(&Query::All).await
    }

    pub async fn public_domain_works(&self) -> Result<Vec<Work>> {
        self.list_works(&Query::public_domain()).await
    }

    pub async fn copyrighted_works(&self) -> Result<Vec<Work>> {
        self.list_works(&Query::copyrighted()).await
    }

    pub async fn works_by_ids(&self, ids: &[u64]) -> Result<Vec<Work>> {
        self.list_works(&Query::Ids(ids.to_vec())).await
    }

    pub async fn works_by_languages(&self, languages: &[&str]) -> Result<Vec<Work>> {
        let languages = languages.iter().map(|l| l.to_string()).collect();
        self.list_works(&Query::Languages(languages)).await
    }

    pub async fn search_works(&self, text: &str) -> Result<Vec<Work>> {
        self.list_works(&Query::Search(text.to_string())).await
    }

    pub async fn works_by_mime_type(&self, mime_type: &str) -> Result<Vec<Work>> {
        self.list_works(&Query::MimeType(mime_type.to_string())).await
    }

    pub async fn works_ascending(&self) -> Result<Vec<Work>> {
        self.list_works(&Query::Ascending).await
    }

    pub async fn oldest_works(&self) -> Result<Vec<Work>> {
        self.list_works(&Query::Oldest).await
    }

    pub async fn latest_works(&self, topic: Option<&str>) -> Result<Vec<Work>> {
        self.list_works(&Query::latest(topic)).await
    }

    #[instrument(skip(self))]
    pub async fn get_work(&self, id: u64) -> Result<Work> {
        let response = self.fetch(self.client.build_get_work(id)).await?;
        self.client
            .parse_get_work(response)
            .inspect_err(|err| warn!(%err, "fetching work failed"))
    }

    /// Plain text of work `id`, downloaded from its text format URL.
    #[instrument(skip(self))]
    pub async fn work_text(&self, id: u64) -> Result<String> {
        let work = self.get_work(id).await?;
        let request = self
            .client
            .build_text_request(&work)
            .inspect_err(|err| warn!(%err, "no text format"))?;
        let response = self.fetch(request).await?;
        self.client
            .parse_text(response)
            .inspect_err(|err| warn!(%err, "fetching text failed"))
    }

    /// Cover image URL of work `id`. The image itself is not downloaded.
    #[instrument(skip(self))]
    pub async fn work_cover(&self, id: u64) -> Result<String> {
        let work = self.get_work(id).await?;
        self.client
            .cover_url(&work)
            .map(str::to_string)
            .inspect_err(|err| warn!(%err, "no cover format"))
    }
}

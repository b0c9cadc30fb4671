use super::session::Credential;
use crate::errors::{check, GetError};
use crate::schema::{decode, decode_many, Context, Record};
use crate::types::BaseUrl;
use crate::urls::join_urls;
use reqwest::header::COOKIE;
use reqwest::Method;
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde_json::Value;

/// MINERVA API client.
///
/// Each client is one session: the credential obtained by
/// [MinervaClient::log_in] is kept by this value and attached to every request
/// it sends. Several clients can be logged in as different users at once.
#[derive(Debug, Clone)]
pub struct MinervaClient {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) url: BaseUrl,
    pub(crate) credential: Option<Credential>,
}

pub struct MinervaClientBuilder {
    url: BaseUrl,
    builder: reqwest_middleware::ClientBuilder,
}

impl MinervaClientBuilder {
    pub(crate) fn new(url: BaseUrl) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new().build()?;
        let builder = reqwest_middleware::ClientBuilder::new(client);
        Ok(Self { url, builder })
    }

    /// Add middleware to the HTTP client.
    pub fn with<M: reqwest_middleware::Middleware>(self, middleware: M) -> Self {
        Self {
            url: self.url,
            builder: self.builder.with(middleware),
        }
    }

    /// Create a client which is not logged in.
    pub fn build(self) -> MinervaClient {
        MinervaClient {
            client: self.builder.build(),
            url: self.url,
            credential: None,
        }
    }
}

impl MinervaClient {
    /// Create a client builder for the MINERVA API at the given base URL.
    pub fn configure(url: BaseUrl) -> Result<MinervaClientBuilder, reqwest::Error> {
        MinervaClientBuilder::new(url)
    }

    /// Create a client without middleware.
    pub fn new(url: BaseUrl) -> Result<Self, reqwest::Error> {
        Ok(Self::configure(url)?.build())
    }

    /// Get the MINERVA API URL.
    pub fn url(&self) -> &BaseUrl {
        &self.url
    }

    /// URL of an endpoint under the base URL.
    pub(crate) fn endpoint<S: AsRef<str>>(&self, segments: &[S]) -> String {
        let mut all = Vec::with_capacity(segments.len() + 1);
        all.push(self.url.as_str());
        all.extend(segments.iter().map(|s| s.as_ref()));
        join_urls(&all)
    }

    /// Start a request with the session credential (if any) attached.
    ///
    /// Sending it does not look at the response, follow up with
    /// [crate::errors::check] before reading it.
    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        let req = self.client.request(method, url);
        match &self.credential {
            Some(credential) => req.header(COOKIE, credential.header().clone()),
            None => req,
        }
    }

    /// Send a request and get its checked JSON body.
    pub(crate) async fn fetch_json(&self, req: RequestBuilder) -> Result<Value, GetError> {
        let res = req.send().await?;
        let value = check(res).await?.json().await?;
        Ok(value)
    }

    /// Send a request and decode its body into one record.
    pub(crate) async fn fetch_one<T: Record>(
        &self,
        req: RequestBuilder,
        context: &Context,
    ) -> Result<T, GetError> {
        let payload = self.fetch_json(req).await?;
        Ok(decode(payload, context)?)
    }

    /// Send a request and decode its body into a list of records.
    pub(crate) async fn fetch_many<T: Record>(
        &self,
        req: RequestBuilder,
        context: &Context,
    ) -> Result<Vec<T>, GetError> {
        let payload = self.fetch_json(req).await?;
        Ok(decode_many(payload, context)?)
    }

    /// GET one record.
    pub(crate) async fn get_one<T: Record>(
        &self,
        url: &str,
        context: &Context,
    ) -> Result<T, GetError> {
        self.fetch_one(self.request(Method::GET, url), context).await
    }

    /// GET a list of records.
    pub(crate) async fn get_many<T: Record>(
        &self,
        url: &str,
        context: &Context,
    ) -> Result<Vec<T>, GetError> {
        self.fetch_many(self.request(Method::GET, url), context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let client = MinervaClient::new(BaseUrl::try_from("http://localhost/minerva/api").unwrap())
            .unwrap();
        assert_eq!(
            client.endpoint(&["projects/", "pd", "models/"]),
            "http://localhost/minerva/api/projects/pd/models/"
        );
        let nothing: [&str; 0] = [];
        assert_eq!(client.endpoint(&nothing), "http://localhost/minerva/api");
    }
}

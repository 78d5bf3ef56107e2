use super::{issue::Issue, response::SearchIssuesResponse};
use crate::http::{Error, Headers, HttpClient};

const GITHUB_API_URL: &str = "https://api.github.com";

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
    token: String,
}

impl GithubClient {
    pub fn new(token: impl Into<String>) -> GithubClient {
        GithubClient::with_api_url(GITHUB_API_URL, token)
    }

    pub fn with_api_url(api_url: impl Into<String>, token: impl Into<String>) -> GithubClient {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// One paginated search request. Anything but a 200 is an error for the
    /// caller to recover from.
    pub async fn search_issues(&self, query: &str, per_page: u8) -> Result<Vec<Issue>, Error> {
        let url = format!("{}/search/issues", self.api_url);

        let response = self
            .http
            .get(&url)
            .query(&[("q", query.to_owned()), ("per_page", per_page.to_string())])
            .github_headers(&self.token)
            .send()
            .await
            .map_err(|cause| Error::SendRequestError { cause })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(Error::UnexpectedStatusError { status });
        }

        let text = response
            .text()
            .await
            .map_err(|cause| Error::ReadResponseTextError { cause })?;

        let response = serde_json::from_str::<SearchIssuesResponse>(&text)
            .map_err(|cause| Error::ParseResponseError { cause })?;

        Ok(response.items)
    }
}

pub mod github_client;
pub mod issue;
mod response;

use self::{github_client::GithubClient, issue::Issue};
use crate::{config::SearchConfig, query::FilterPair};

/// Runs one search per filter pair, strictly in cross-product order. A failed
/// query contributes zero records and never aborts the run. The aggregate is
/// truncated only after every pair has been queried, never mid-loop.
pub async fn fetch_issues(client: &GithubClient, search: &SearchConfig) -> Vec<Issue> {
    let mut issues: Vec<Issue> = Vec::new();

    for pair in FilterPair::cross_product(&search.labels, &search.languages) {
        let query = pair.to_query(search);
        log::debug!("searching issues with query: {}", query);

        match client.search_issues(&query, search.per_page).await {
            Ok(items) => {
                log::info!(
                    "{} issues found for label '{}' and language '{}'",
                    items.len(),
                    pair.label,
                    pair.language
                );
                issues.extend(items);
            }
            Err(err) => {
                log::error!(
                    "Failed to fetch issues for label '{}' and language '{}': {}",
                    pair.label,
                    pair.language,
                    err
                );
            }
        }
    }

    issues.truncate(search.max_issues);
    issues
}

use crate::config::SearchConfig;

/// One (label, language) combination of the configured cross-product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPair {
    pub label: String,
    pub language: String,
}

impl FilterPair {
    /// Labels outer loop, languages inner loop. The order decides which
    /// queries win slots in the final truncated collection.
    pub fn cross_product(labels: &[String], languages: &[String]) -> Vec<FilterPair> {
        let mut pairs = Vec::new();

        for label in labels {
            for language in languages {
                pairs.push(FilterPair {
                    label: label.to_owned(),
                    language: language.to_owned(),
                });
            }
        }

        pairs
    }

    /// Values are embedded verbatim, no spelling validation. A malformed
    /// label or language simply matches nothing upstream.
    pub fn to_query(&self, search: &SearchConfig) -> String {
        format!(
            "label:{} language:{} is:issue is:open created:>={} stars:>{} forks:>{}",
            self.label, self.language, search.created_after, search.min_stars, search.min_forks
        )
    }
}

use crate::github::issue::Issue;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchIssuesResponse {
    #[serde(default)]
    pub items: Vec<Issue>,
}

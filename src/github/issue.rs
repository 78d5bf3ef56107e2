use serde::Deserialize;

/// One item of the search response. Only the fields the report consumes are
/// kept; every one of them may be missing upstream.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub title: Option<String>,
    pub html_url: Option<String>,
    pub repository_url: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    pub name: String,
}

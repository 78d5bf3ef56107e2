mod search_issues_response;

pub use search_issues_response::SearchIssuesResponse;

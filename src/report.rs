use crate::github::issue::Issue;
use chrono::{DateTime, Local};
use itertools::Itertools;

/// Timestamp format shared by the report header and the report filename.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

const REPOSITORY_API_PREFIX: &str = "https://api.github.com/repos/";
const DESCRIPTION_MAX_CHARS: usize = 200;

const NO_TITLE: &str = "No Title";
const NO_URL: &str = "No URL";
const NO_REPOSITORY: &str = "No Repository";
const NO_DESCRIPTION: &str = "No description provided.";

/// Renders the whole document. Pure, one block per issue in slice order.
pub fn render(issues: &[Issue], generated_at: DateTime<Local>) -> String {
    let mut document = format!(
        "# GitHub Issues for {}\n\n",
        generated_at.format(TIMESTAMP_FORMAT)
    );

    for issue in issues {
        document.push_str(&render_issue(issue));
    }

    document
}

fn render_issue(issue: &Issue) -> String {
    let title = issue.title.as_deref().unwrap_or(NO_TITLE);
    let url = issue.html_url.as_deref().unwrap_or(NO_URL);
    let repository = issue
        .repository_url
        .as_deref()
        .unwrap_or(NO_REPOSITORY)
        .replace(REPOSITORY_API_PREFIX, "");
    let labels = issue
        .labels
        .iter()
        .map(|label| label.name.as_str())
        .join(", ");

    format!(
        "## [{}]({})\nRepository: [{}](https://github.com/{})\n\nLabels: {}\n\nDescription: {}...\n\n---\n\n",
        title,
        url,
        repository,
        repository,
        labels,
        description(issue.body.as_deref())
    )
}

fn description(body: Option<&str>) -> String {
    match body {
        Some(body) if !body.is_empty() => body.chars().take(DESCRIPTION_MAX_CHARS).collect(),
        _ => NO_DESCRIPTION.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::issue::Label;
    use chrono::TimeZone;

    fn generated_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 10, 1, 13, 37, 42).unwrap()
    }

    fn issue(title: &str, repository_url: &str, body: Option<&str>) -> Issue {
        Issue {
            title: Some(title.to_owned()),
            html_url: Some(format!("{repository_url}/issues/1")),
            repository_url: Some(repository_url.to_owned()),
            labels: vec![
                Label {
                    name: "bug".to_owned(),
                },
                Label {
                    name: "help wanted".to_owned(),
                },
            ],
            body: body.map(ToOwned::to_owned),
        }
    }

    fn empty_issue() -> Issue {
        Issue {
            title: None,
            html_url: None,
            repository_url: None,
            labels: vec![],
            body: None,
        }
    }

    #[test]
    fn should_render_only_the_header_without_issues() {
        let document = render(&[], generated_at());

        assert_eq!(document, "# GitHub Issues for 2024-10-01_13-37-42\n\n");
    }

    #[test]
    fn should_render_one_block_per_issue() {
        let issues = vec![
            issue(
                "Fix the docs",
                "https://api.github.com/repos/octocat/Hello-World",
                Some("The docs are wrong."),
            ),
            empty_issue(),
        ];

        let document = render(&issues, generated_at());

        assert_eq!(document.matches("## ").count(), 2);
        assert_eq!(document.matches("---\n\n").count(), 2);
        let first = document.find("Fix the docs").unwrap();
        let second = document.find(NO_TITLE).unwrap();
        assert!(first < second);
    }

    #[test]
    fn should_strip_api_prefix_from_repository_url() {
        let issues = [issue(
            "Fix the docs",
            "https://api.github.com/repos/octocat/Hello-World",
            None,
        )];

        let document = render(&issues, generated_at());

        assert!(document.contains(
            "Repository: [octocat/Hello-World](https://github.com/octocat/Hello-World)\n"
        ));
    }

    #[test]
    fn should_join_label_names_with_commas() {
        let issues = [issue(
            "Fix the docs",
            "https://api.github.com/repos/octocat/Hello-World",
            None,
        )];

        let document = render(&issues, generated_at());

        assert!(document.contains("Labels: bug, help wanted\n"));
    }

    #[test]
    fn should_use_placeholders_for_missing_fields() {
        let document = render(&[empty_issue()], generated_at());

        assert!(document.contains("## [No Title](No URL)\n"));
        assert!(document.contains("Repository: [No Repository](https://github.com/No Repository)\n"));
        assert!(document.contains("Labels: \n"));
        assert!(document.contains("Description: No description provided....\n"));
    }

    #[test]
    fn should_default_description_for_empty_body() {
        let issues = [issue(
            "Fix the docs",
            "https://api.github.com/repos/octocat/Hello-World",
            Some(""),
        )];

        let document = render(&issues, generated_at());

        assert!(document.contains("Description: No description provided....\n"));
    }

    #[test]
    fn should_truncate_long_descriptions_to_two_hundred_chars() {
        let body = "x".repeat(250);
        let issues = [issue(
            "Fix the docs",
            "https://api.github.com/repos/octocat/Hello-World",
            Some(&body),
        )];

        let document = render(&issues, generated_at());

        let expected = format!("Description: {}...\n", "x".repeat(200));
        assert!(document.contains(&expected));
        assert!(!document.contains(&"x".repeat(201)));
    }

    #[test]
    fn should_keep_short_descriptions_whole() {
        let issues = [issue(
            "Fix the docs",
            "https://api.github.com/repos/octocat/Hello-World",
            Some("Short and sweet."),
        )];

        let document = render(&issues, generated_at());

        assert!(document.contains("Description: Short and sweet....\n"));
    }
}

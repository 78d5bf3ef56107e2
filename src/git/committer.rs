use crate::config::CommitterConfig;

#[derive(Debug, Clone)]
pub struct Committer {
    pub name: String,
    pub email: String,
}

impl Default for Committer {
    fn default() -> Self {
        Committer {
            name: "github-actions[bot]".to_string(),
            email: "github-actions[bot]@users.noreply.github.com".to_string(),
        }
    }
}

impl From<&CommitterConfig> for Committer {
    fn from(value: &CommitterConfig) -> Self {
        Committer {
            name: value.name.to_owned(),
            email: value.email.to_owned(),
        }
    }
}

use serde::{Deserialize, Serialize};

// The GitHub API sends far more fields than these; serde drops the rest on
// the floor so the structs only spell out what callers actually read.

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
	pub id: i64,
	pub name: String,
	pub full_name: Option<String>,
	pub owner: Option<User>,
	pub private: Option<bool>,
	pub html_url: String,
	pub description: Option<String>,
	pub fork: Option<bool>,
	pub default_branch: Option<String>,
	pub open_issues_count: Option<i64>,
	pub stargazers_count: Option<i64>,
	pub forks_count: Option<i64>,
	pub created_at: Option<chrono::DateTime<chrono::Utc>>,
	pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
	pub id: i64,
	pub number: i64,
	pub html_url: String,
	pub title: Option<String>,
	// User might be missing when it has been deleted
	pub user: Option<User>,
	pub body: Option<String>,
	pub state: Option<String>,
	#[serde(default)]
	pub labels: Vec<Label>,
	pub assignee: Option<User>,
	#[serde(default)]
	pub assignees: Vec<User>,
	pub milestone: Option<Milestone>,
	pub comments: Option<i64>,
	pub created_at: Option<chrono::DateTime<chrono::Utc>>,
	pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
	pub closed_at: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
	pub login: String,
	pub id: Option<i64>,
	pub html_url: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
	pub id: Option<i64>,
	pub name: String,
	pub description: Option<String>,
	pub color: Option<String>,
	pub default: Option<bool>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
	pub id: Option<i64>,
	pub number: Option<i64>,
	pub title: Option<String>,
	pub state: Option<String>,
}

/// Request body for issue creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueRequest {
	pub title: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub body: Option<String>,
}

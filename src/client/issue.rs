use crate::{github, Result};

use super::GithubClient;

impl GithubClient {
	/// Returns the issues of a repository, as the API lists them.
	pub async fn issues(
		&self,
		owner: &str,
		repo_name: &str,
	) -> Result<Vec<github::Issue>> {
		let url = format!(
			"{base_url}/repos/{owner}/{repo_name}/issues",
			base_url = self.github_api_url,
			owner = owner,
			repo_name = repo_name
		);
		log::debug!("GET {}", url);
		self.client.get(url).await
	}

	/// Opens an issue and returns it as the API echoes it back.
	pub async fn create_issue(
		&self,
		owner: &str,
		repo_name: &str,
		title: &str,
		body: Option<&str>,
	) -> Result<github::Issue> {
		let url = format!(
			"{base_url}/repos/{owner}/{repo_name}/issues",
			base_url = self.github_api_url,
			owner = owner,
			repo_name = repo_name
		);
		log::debug!("POST {}", url);
		self.client
			.post(
				url,
				&github::IssueRequest {
					title: title.to_string(),
					body: body.map(str::to_string),
				},
			)
			.await
	}
}

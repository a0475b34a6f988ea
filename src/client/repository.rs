use crate::{github, Result};

use super::GithubClient;

impl GithubClient {
	/// Returns the metadata of a repository.
	pub async fn repository(
		&self,
		owner: &str,
		repo_name: &str,
	) -> Result<github::Repository> {
		let url = format!(
			"{base_url}/repos/{owner}/{repo_name}",
			base_url = self.github_api_url,
			owner = owner,
			repo_name = repo_name
		);
		log::debug!("GET {}", url);
		self.client.get(url).await
	}
}

#[cfg(test)]
mod tests {
	use crate::config::MainConfig;

	use super::*;

	#[ignore]
	#[test]
	fn test_repository() {
		dotenv::dotenv().ok();

		let config = MainConfig::from_env();
		let repo_full_name =
			dotenv::var("GITHUB_REPOSITORY").expect("GITHUB_REPOSITORY");
		let (owner, repo_name) =
			repo_full_name.split_once('/').expect("owner/repo");

		let rt = tokio::runtime::Runtime::new().expect("runtime");
		rt.block_on(async {
			let client = GithubClient::new(&config);
			let repo = client
				.repository(owner, repo_name)
				.await
				.expect("repository");
			assert_eq!(repo.name, repo_name);
		});
	}
}

const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct MainConfig {
	pub github_api_url: String,
	pub github_token: String,
}

impl MainConfig {
	pub fn from_env() -> Self {
		dotenv::dotenv().ok();

		let github_token = dotenv::var("GITHUB_TOKEN").expect("GITHUB_TOKEN");
		let github_api_url = dotenv::var("GITHUB_API_URL")
			.unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string());

		Self {
			github_api_url,
			github_token,
		}
	}
}

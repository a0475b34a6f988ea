use github_issues_client::{client::GithubClient, config::MainConfig};

#[tokio::main]
async fn main() {
	if let Err(error) = run().await {
		panic!("{}", error)
	}
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
	let config = MainConfig::from_env();
	env_logger::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();

	let client = GithubClient::new(&config);
	let args = std::env::args().skip(1).collect::<Vec<String>>();

	match args
		.iter()
		.map(String::as_str)
		.collect::<Vec<&str>>()
		.as_slice()
	{
		["repo", owner, repo_name] => {
			log::info!("Fetching repository {}/{}", owner, repo_name);
			let repo = client.repository(owner, repo_name).await?;
			print_json(&repo)?;
		}
		["issues", owner, repo_name] => {
			log::info!("Listing issues of {}/{}", owner, repo_name);
			let issues = client.issues(owner, repo_name).await?;
			print_json(&issues)?;
		}
		["create-issue", owner, repo_name, title] => {
			log::info!("Opening issue in {}/{}", owner, repo_name);
			let issue =
				client.create_issue(owner, repo_name, title, None).await?;
			print_json(&issue)?;
		}
		["create-issue", owner, repo_name, title, body] => {
			log::info!("Opening issue in {}/{}", owner, repo_name);
			let issue = client
				.create_issue(owner, repo_name, title, Some(*body))
				.await?;
			print_json(&issue)?;
		}
		_ => {
			eprintln!(
				"Usage: github-issues-client <repo|issues> OWNER REPO\n       github-issues-client create-issue OWNER REPO TITLE [BODY]"
			);
			std::process::exit(1);
		}
	}

	Ok(())
}

fn print_json<T: serde::Serialize>(
	value: &T,
) -> Result<(), Box<dyn std::error::Error>> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

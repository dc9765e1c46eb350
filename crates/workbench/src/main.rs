use config::WorkbenchConfig;
use tracing::{error, info};
use workbench_util::{load_env, LoadedEnv};

mod config;
mod demo;

#[tokio::main]
async fn main() {
	let config_res = match load_env::<WorkbenchConfig>() {
		Ok(x) => x,

		#[expect(clippy::print_stdout)]
		Err(err) => {
			println!("Error while loading .env: {err}");
			std::process::exit(1);
		}
	};

	let config = config_res.get_config().clone();

	tracing_subscriber::fmt()
		.with_env_filter(config.workbench_loglevel.get_config())
		.without_time()
		.with_ansi(true)
		.init();

	// Do this now, logging wasn't available earlier
	match config_res {
		LoadedEnv::FoundFile { config, path } => {
			info!(message = "Loaded config from .env", ?path, ?config);
		}
		LoadedEnv::OnlyVars(config) => {
			info!(
				message = "No `.env` found, loaded config from environment",
				?config
			);
		}
	};

	let worksheet = demo::worksheet(&config);
	info!(
		message = "Running worksheet",
		n_groups = worksheet.groups().len()
	);

	match worksheet.run().await {
		Ok(()) => info!(message = "Worksheet finished"),
		Err(error) => {
			error!(message = "Worksheet failed", ?error);
			std::process::exit(1);
		}
	}
}

//! Life Coach CLI entry point

use std::process::ExitCode;

use clap::Parser;

use life_coach::cli::{
    app::{init_tracing, load_merged_config, run_advice, run_music, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    session::run_session,
};
use life_coach::domain::config::AppConfig;
use life_coach::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // API key comes from env/file only
    let cli_config = AppConfig {
        model: cli.model.clone(),
        ..AppConfig::empty()
    };

    match cli.command {
        Some(Commands::Config { action }) => {
            let presenter = Presenter::new();
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Advice(args)) => {
            let config = load_merged_config(cli_config).await;
            run_advice(args, &config).await
        }
        Some(Commands::Music { mood }) => {
            let config = load_merged_config(cli_config).await;
            run_music(mood.into(), &config).await
        }
        None => {
            let config = load_merged_config(cli_config).await;
            run_session(&config).await
        }
    }
}

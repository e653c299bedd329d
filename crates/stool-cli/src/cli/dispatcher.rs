use crate::cli::command_handlers::{
    BioHandler, CompareHandler, ConfigHandler, ListingHandler, ResizeHandler, ResumeHandler,
};
use crate::cli::main_types::Commands;
use std::path::PathBuf;
use stool_core::core::services::config_service::ConfigService;
use stool_core::error::AppError;
use stool_core::storage::config::Config;
use stool_core::utils::logging::print_verbose;

pub struct Dispatcher {
    config: Config,
    verbose: bool,
    config_path: Option<PathBuf>,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(config: Config, verbose: bool, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            verbose,
            config_path,
        }
    }

    // Helper method to create ConfigService with current configuration
    fn create_config_service(&self) -> ConfigService {
        ConfigService::new(self.config.clone())
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Bio(args) => {
                let handler = BioHandler::new();
                handler
                    .handle(args, &self.create_config_service(), self.verbose)
                    .await
            }
            Commands::Templates => {
                self.log_verbose("Listing bio templates");
                ListingHandler::new().templates(&self.config)
            }
            Commands::Resize(args) => {
                let handler = ResizeHandler::new();
                handler
                    .handle(args, &self.create_config_service(), self.verbose)
                    .await
            }
            Commands::Presets => {
                self.log_verbose("Listing size presets");
                ListingHandler::new().presets()
            }
            Commands::Compare(args) => {
                let handler = CompareHandler::new();
                handler.handle(args, self.verbose).await
            }
            Commands::Resume { command } => {
                let handler = ResumeHandler::new();
                handler.handle(command, self.verbose).await
            }
            Commands::Config { command } => {
                let handler = ConfigHandler::new();
                let mut config_service = self.create_config_service();
                handler
                    .handle(
                        command,
                        &mut config_service,
                        self.config_path.clone(),
                        self.verbose,
                    )
                    .await
            }
        }
    }
}

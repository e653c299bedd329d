use crate::cli::main_types::{BioArgs, CompareArgs, ConfigCommands, ResizeArgs, ResumeCommands};
use std::path::{Path, PathBuf};
use stool_core::bio::BioField;
use stool_core::clipboard::SystemClipboard;
use stool_core::core::services::bio_service::BioService;
use stool_core::core::services::compare_service::CompareService;
use stool_core::core::services::config_service::ConfigService;
use stool_core::core::services::resize_service::{ResizeRequest, ResizeService};
use stool_core::core::services::resume_service::ResumeService;
use stool_core::display::TableDisplay;
use stool_core::error::{AppError, CliError, StorageError};
use stool_core::raster::{Comparator, Orientation, presets};
use stool_core::storage::config::Config;
use stool_core::utils::logging::print_verbose;
use stool_core::utils::validation::{
    OutputFormat, parse_output_format, validate_frame_size,
};

#[derive(Default)]
pub struct BioHandler;

impl BioHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        args: BioArgs,
        config_service: &ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        let format = parse_output_format(&args.format)?;
        let template_id = config_service.bio_template(args.template.as_deref());
        print_verbose(verbose, &format!("Rendering bio with template '{}'", template_id));

        let values: Vec<(BioField, String)> = [
            (BioField::Name, args.name),
            (BioField::Role, args.role),
            (BioField::Interests, args.interests),
            (BioField::Achievements, args.achievements),
            (BioField::Location, args.location),
            (BioField::Contact, args.contact),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect();

        let service = BioService::new(config_service.config());
        let session = service.compose(&template_id, values)?;
        let view = session.view();

        match format {
            OutputFormat::Json => match serde_json::to_string_pretty(view) {
                Ok(json_output) => println!("{}", json_output),
                Err(e) => {
                    return Err(AppError::Cli(CliError::InvalidArguments(format!(
                        "Failed to serialize result to JSON: {}",
                        e
                    ))));
                }
            },
            OutputFormat::Text => {
                println!("{}", view.bio);
                println!();
                println!("Characters: {}", view.report.length);
                println!(
                    "{}",
                    TableDisplay::new().render_character_report(&view.report)
                );
            }
        }

        if args.copy {
            let mut clipboard = SystemClipboard;
            if SystemClipboard::holds_selection() {
                eprintln!("📋 Holding the bio on the clipboard until another program takes it over...");
            }
            if service.copy(&session, &mut clipboard) {
                eprintln!("✅ Copied to clipboard");
            } else {
                eprintln!("⚠️ Could not copy to clipboard");
            }
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct ListingHandler;

impl ListingHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn templates(&self, config: &Config) -> Result<(), AppError> {
        let service = BioService::new(config);
        let display = TableDisplay::new();
        println!("{}", display.render_templates(service.templates()));
        println!();
        println!("Fields:");
        println!("{}", display.render_fields(&BioField::ALL));
        Ok(())
    }

    pub fn presets(&self) -> Result<(), AppError> {
        println!("{}", TableDisplay::new().render_presets(presets()));
        Ok(())
    }
}

#[derive(Default)]
pub struct ResizeHandler;

impl ResizeHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        args: ResizeArgs,
        config_service: &ConfigService,
        verbose: bool,
    ) -> Result<(), AppError> {
        let request = ResizeRequest {
            width: args.width,
            height: args.height,
            preset: args.preset,
            aspect_lock: config_service.aspect_lock() && !args.no_aspect_lock,
        };
        print_verbose(
            verbose,
            &format!(
                "Resizing {} - Width: {:?}, Height: {:?}, Preset: {:?}, Aspect lock: {}",
                args.input.display(),
                request.width,
                request.height,
                request.preset,
                request.aspect_lock
            ),
        );

        let service = ResizeService::default();
        match service
            .resize_file(&args.input, &request, args.output)
            .await?
        {
            Some(outcome) => {
                let (w0, h0) = outcome.original;
                println!(
                    "✅ Resized {}x{} -> {}x{}: {}",
                    w0,
                    h0,
                    outcome.width,
                    outcome.height,
                    outcome.output.display()
                );
            }
            None => {
                println!("Nothing written: the input is not an image or the target size is empty.");
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct CompareHandler;

impl CompareHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, args: CompareArgs, verbose: bool) -> Result<(), AppError> {
        let orientation: Orientation = args.orientation.parse()?;
        let frame = validate_frame_size(args.width, args.height)?;
        let comparator = Comparator::new(args.position, orientation);
        print_verbose(
            verbose,
            &format!(
                "Comparing {} and {} at {}% ({})",
                args.before.display(),
                args.after.display(),
                comparator.position(),
                comparator.orientation()
            ),
        );

        let outcome = CompareService::default()
            .compare_files(&args.before, &args.after, comparator, frame, &args.output)
            .await?;
        println!(
            "✅ Wrote {}x{} comparison at {}% ({}): {}",
            outcome.width,
            outcome.height,
            outcome.comparator.position(),
            outcome.comparator.orientation(),
            outcome.output.display()
        );
        Ok(())
    }
}

#[derive(Default)]
pub struct ResumeHandler;

impl ResumeHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(&self, command: ResumeCommands, verbose: bool) -> Result<(), AppError> {
        let service = ResumeService::new();
        match command {
            ResumeCommands::Preview { file, template } => {
                print_verbose(verbose, &format!("Previewing resume {}", file.display()));
                let form = service.load_form(&file).await?;
                print!("{}", service.preview(&form, template.as_deref())?);
                Ok(())
            }
            ResumeCommands::Pdf {
                file,
                template,
                output,
            } => {
                print_verbose(verbose, &format!("Exporting resume {}", file.display()));
                let form = service.load_form(&file).await?;
                let bytes = service.export_pdf(&form, template.as_deref())?;
                let output = output.unwrap_or_else(|| file.with_extension("pdf"));
                write_output(&output, &bytes).await?;
                println!("✅ Wrote {}", output.display());
                Ok(())
            }
            ResumeCommands::Init => {
                print!("{}", service.blank_document()?);
                Ok(())
            }
        }
    }
}

async fn write_output(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    tokio::fs::write(path, bytes)
        .await
        .map_err(|source| StorageError::FileIo {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
    Ok(())
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: Option<PathBuf>,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command using ConfigService");

                let config = config_service.config();
                println!("Current Configuration:");
                println!("=====================");

                let file = match config_path.clone() {
                    Some(path) => Ok(path),
                    None => Config::config_file_path(),
                };
                match file {
                    Ok(path) => println!("File: {}", path.display()),
                    Err(_) => println!("File: (no home directory)"),
                }

                println!("\nBio:");
                println!("  Template: {}", config_service.bio_template(None));
                match &config.bio.default_template {
                    Some(id) => println!("  Configured default: {}", id),
                    None => println!("  Configured default: (not set)"),
                }
                if config.bio.templates.is_empty() {
                    println!("  Custom templates: none");
                } else {
                    println!("  Custom templates:");
                    for template in &config.bio.templates {
                        println!("    [{}] {}", template.id, template.name);
                    }
                }

                println!("\nResize:");
                println!(
                    "  Aspect lock: {}",
                    if config_service.aspect_lock() { "on" } else { "off" }
                );

                Ok(())
            }
            ConfigCommands::Set {
                bio_template,
                aspect_lock,
            } => {
                print_verbose(
                    verbose,
                    &format!(
                        "Attempting config set using ConfigService - bio_template: {:?}, aspect_lock: {:?}",
                        bio_template, aspect_lock
                    ),
                );

                let mut updated_fields = Vec::new();

                if let Some(id) = bio_template {
                    config_service.set_bio_template(&id)?;
                    updated_fields.push(format!("bio template to: {}", id));
                }

                if let Some(enabled) = aspect_lock {
                    config_service.set_aspect_lock(enabled);
                    updated_fields.push(format!("aspect lock to: {}", enabled));
                }

                if updated_fields.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. Use --bio-template and/or --aspect-lock"
                            .to_string(),
                    )));
                }

                println!("✅ Set {}", updated_fields.join(", "));
                config_service.save_config(config_path)?;
                println!("Configuration saved successfully.");
                Ok(())
            }
        }
    }
}

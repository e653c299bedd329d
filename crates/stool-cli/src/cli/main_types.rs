use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stool")]
#[command(about = "Everyday utilities for students: bios, image resizing, comparisons and resumes")]
#[command(version)]
#[command(after_help = "Examples:
  stool bio --name Ada --role Engineer             # Professional bio
  stool bio --template minimal --name Ada --copy   # Copy a minimal bio
  stool templates                                  # List bio templates
  stool resize photo.png --width 400               # Keep the aspect ratio
  stool resize photo.png --preset instagram-post   # Use a size preset
  stool compare before.png after.png -o cmp.png    # Before/after image
  stool resume init > resume.toml                  # Start a resume form
  stool resume preview resume.toml                 # Preview it

Environment Variables:
  STOOL_BIO_TEMPLATE   Default bio template id
  RUST_LOG             Log filter (e.g. debug)")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a social media bio from a template
    Bio(BioArgs),
    /// List the available bio templates
    Templates,
    /// Resize an image to exact dimensions
    Resize(ResizeArgs),
    /// List the image size presets
    Presets,
    /// Render a before/after comparison of two images
    Compare(CompareArgs),
    /// Resume builder (preview, pdf, init)
    Resume {
        #[command(subcommand)]
        command: ResumeCommands,
    },
    /// Configuration management (show, set)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Bio fields and output options
#[derive(Args, Debug)]
#[command(after_help = "Examples:
  stool bio --name Ada --role Engineer --location London
  stool bio --template student --name Ada --interests \"Maths, Poetry\"
  stool bio --name Ada --format json")]
pub struct BioArgs {
    /// Template id (see 'stool templates')
    #[arg(short, long)]
    pub template: Option<String>,

    /// Your name
    #[arg(long, help_heading = "Fields")]
    pub name: Option<String>,

    /// Role or title
    #[arg(long, help_heading = "Fields")]
    pub role: Option<String>,

    /// Interests
    #[arg(long, help_heading = "Fields")]
    pub interests: Option<String>,

    /// Achievements
    #[arg(long, help_heading = "Fields")]
    pub achievements: Option<String>,

    /// Location
    #[arg(long, help_heading = "Fields")]
    pub location: Option<String>,

    /// Contact details
    #[arg(long, help_heading = "Fields")]
    pub contact: Option<String>,

    /// Copy the bio to the clipboard
    #[arg(long, help_heading = "Output Options")]
    pub copy: bool,

    /// Output format: text or json
    #[arg(short, long, default_value = "text", help_heading = "Output Options")]
    pub format: String,
}

/// Resize arguments
#[derive(Args, Debug)]
#[command(after_help = "Examples:
  stool resize photo.png --width 400            # Height follows the ratio
  stool resize photo.png --width 400 --height 100
  stool resize photo.png --height 300 --no-aspect-lock
  stool resize photo.png --preset \"Twitter Post\" -o banner.png")]
pub struct ResizeArgs {
    /// Image to resize
    pub input: PathBuf,

    /// Target width in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i32>,

    /// Target height in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i32>,

    /// Size preset name or slug (see 'stool presets')
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Do not keep the aspect ratio when only one side is given
    #[arg(long)]
    pub no_aspect_lock: bool,

    /// Output file (default: resized-<name> next to the input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Comparison arguments
#[derive(Args, Debug)]
#[command(after_help = "Examples:
  stool compare before.png after.png -o cmp.png
  stool compare before.png after.png --position 25 --orientation vertical -o cmp.png
  stool compare before.png after.png --width 800 --height 600 -o cmp.png")]
pub struct CompareArgs {
    /// The "before" image, drawn on top
    pub before: PathBuf,

    /// The "after" image, drawn underneath
    pub after: PathBuf,

    /// Slider position from 0 (all after) to 100 (all before)
    #[arg(long, default_value_t = 50, allow_negative_numbers = true)]
    pub position: i32,

    /// Slider orientation: horizontal or vertical
    #[arg(long, default_value = "horizontal")]
    pub orientation: String,

    /// Frame width (default: width of the before image)
    #[arg(long)]
    pub width: Option<u32>,

    /// Frame height (default: height of the before image)
    #[arg(long)]
    pub height: Option<u32>,

    /// Output PNG file
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ResumeCommands {
    /// Print a plain-text preview of a resume form
    #[command(after_help = "Examples:
  stool resume preview resume.toml
  stool resume preview resume.toml --template classic")]
    Preview {
        /// Resume form (TOML)
        file: PathBuf,
        /// Template: modern, classic, minimal or professional
        #[arg(short, long)]
        template: Option<String>,
    },
    /// Export a resume form as PDF
    Pdf {
        /// Resume form (TOML)
        file: PathBuf,
        /// Template: modern, classic, minimal or professional
        #[arg(short, long)]
        template: Option<String>,
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print an empty resume form to fill in
    Init,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  stool config set --bio-template minimal
  stool config set --aspect-lock false")]
    Set {
        /// Default bio template id
        #[arg(long)]
        bio_template: Option<String>,
        /// Keep the aspect ratio when resizing (true or false)
        #[arg(long)]
        aspect_lock: Option<bool>,
    },
}

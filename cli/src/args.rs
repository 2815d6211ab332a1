//! CLI argument parsing with clap derive macros.

use clap::{ArgAction, ArgGroup, Parser};
use xcolorpick_core::{OutputFormat, Template};

/// Pick the color of any pixel on the screen.
///
/// Click anywhere on the display; the color of the pixel under the pointer
/// is printed to standard output. Hold extra buttons as you like: the first
/// press is the one sampled, once every button is released.
#[derive(Debug, Parser)]
#[command(
    name = "xcolorpick",
    version,
    disable_version_flag = true,
    group(
        ArgGroup::new("output")
            .args(["rgb", "qhex", "raw", "format"])
            .multiple(false)
    ),
    after_help = "\
Template directives:
  %d  next channel as decimal (red, then green, then blue)
  %x  next channel as two lowercase hex digits
  %X  next channel as two uppercase hex digits
  %%  a literal percent sign

Examples:
  xcolorpick                   # #12B8DE
  xcolorpick -q                # 12B8DE
  xcolorpick --rgb             # rgb(18, 184, 222)
  xcolorpick -f '%d %d %d'     # 18 184 222"
)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Print the color as rgb(R, G, B)
    #[arg(long)]
    pub rgb: bool,

    /// Print the color as hex without the leading '#'
    #[arg(short = 'q', long)]
    pub qhex: bool,

    /// Print full-precision channels packed into one decimal integer
    #[arg(short = 'r', long)]
    pub raw: bool,

    /// Print the color using a custom template
    #[arg(short = 'f', long = "format", value_name = "TEMPLATE", allow_hyphen_values = true)]
    pub format: Option<Template>,
}

impl Cli {
    /// The output format selected by the flags (hex by default).
    pub fn output_format(&self) -> OutputFormat {
        if let Some(template) = &self.format {
            OutputFormat::Custom(template.clone())
        } else if self.rgb {
            OutputFormat::CssRgb
        } else if self.qhex {
            OutputFormat::HexNoHash
        } else if self.raw {
            OutputFormat::Raw
        } else {
            OutputFormat::Hex
        }
    }
}

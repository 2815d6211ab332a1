//! Output formats for a picked color.
//!
//! Every format renders to a single line without the trailing newline;
//! [`OutputFormat::write_line`] adds it.

use crate::{Color, CoreError, CoreResult};
use std::io;
use std::str::FromStr;
use tracing::debug;

/// Maximum number of channel placeholders a template may use.
const CHANNEL_COUNT: usize = 3;

/// Output format selected on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `#RRGGBB`, uppercase.
    #[default]
    Hex,
    /// `RRGGBB`, uppercase.
    HexNoHash,
    /// `rgb(R, G, B)`.
    CssRgb,
    /// Native 16-bit channels packed into one decimal integer.
    Raw,
    /// User template with positional channel placeholders.
    Custom(Template),
}

impl OutputFormat {
    /// Render the color as a single line (without newline).
    pub fn render(&self, color: &Color) -> String {
        match self {
            OutputFormat::Hex => color.to_hex(),
            OutputFormat::HexNoHash => {
                format!("{:02X}{:02X}{:02X}", color.r(), color.g(), color.b())
            }
            OutputFormat::CssRgb => format!("rgb({}, {}, {})", color.r(), color.g(), color.b()),
            OutputFormat::Raw => color.to_raw().to_string(),
            OutputFormat::Custom(template) => template.render(color.rgb8()),
        }
    }

    /// Write the rendered color followed by a newline.
    pub fn write_line<W: io::Write>(&self, out: &mut W, color: &Color) -> io::Result<()> {
        let line = self.render(color);
        debug!(format = self.name(), %line, "writing color");
        writeln!(out, "{line}")?;
        out.flush()
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Hex => "hex",
            OutputFormat::HexNoHash => "hex-no-hash",
            OutputFormat::CssRgb => "css-rgb",
            OutputFormat::Raw => "raw",
            OutputFormat::Custom(_) => "custom",
        }
    }
}

/// How a template placeholder renders its channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelStyle {
    /// `%d`
    Decimal,
    /// `%x`, two digits.
    LowerHex,
    /// `%X`, two digits.
    UpperHex,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Channel(ChannelStyle),
}

/// A parsed custom output template.
///
/// Supported directives: `%d`, `%x`, `%X` (next channel in red, green, blue
/// order) and `%%` (a literal percent sign). Everything else is copied as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> CoreResult<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut placeholders = 0usize;
        let mut chars = source.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let style = match chars.next() {
                None => return Err(CoreError::TrailingPercent),
                Some('%') => {
                    literal.push('%');
                    continue;
                }
                Some('d') => ChannelStyle::Decimal,
                Some('x') => ChannelStyle::LowerHex,
                Some('X') => ChannelStyle::UpperHex,
                Some(other) => return Err(CoreError::UnknownDirective(other)),
            };

            placeholders += 1;
            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Channel(style));
        }

        if placeholders > CHANNEL_COUNT {
            return Err(CoreError::TooManyPlaceholders(placeholders));
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Number of channel placeholders in the template.
    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Channel(_)))
            .count()
    }

    /// Substitute the channels positionally.
    pub fn render(&self, channels: [u8; 3]) -> String {
        let mut out = String::new();
        let mut next = channels.iter();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Channel(style) => {
                    // parse() caps placeholders at three
                    let Some(value) = next.next() else { break };
                    out.push_str(&match style {
                        ChannelStyle::Decimal => value.to_string(),
                        ChannelStyle::LowerHex => format!("{value:02x}"),
                        ChannelStyle::UpperHex => format!("{value:02X}"),
                    });
                }
            }
        }

        out
    }
}

impl FromStr for Template {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Color {
        Color::new(4626, 47288, 57054)
    }

    #[test]
    fn test_builtin_formats() {
        let color = sample();
        assert_eq!(OutputFormat::Hex.render(&color), "#12B8DE");
        assert_eq!(OutputFormat::HexNoHash.render(&color), "12B8DE");
        assert_eq!(OutputFormat::CssRgb.render(&color), "rgb(18, 184, 222)");
        assert_eq!(
            OutputFormat::Raw.render(&color),
            ((4626u64 << 32) | (47288u64 << 16) | 57054).to_string()
        );
    }

    #[test]
    fn test_default_is_hex() {
        assert_eq!(OutputFormat::default(), OutputFormat::Hex);
    }

    #[test]
    fn test_hex_without_hash_matches_hex() {
        for color in [
            Color::new(0, 0, 0),
            Color::new(65535, 65535, 65535),
            Color::new(0x0100, 0xABCD, 0xFF00),
            sample(),
        ] {
            let hex = OutputFormat::Hex.render(&color);
            let bare = OutputFormat::HexNoHash.render(&color);
            assert_eq!(hex.strip_prefix('#'), Some(bare.as_str()));
        }
    }

    #[test]
    fn test_render_is_stable() {
        let color = sample();
        let formats = [
            OutputFormat::Hex,
            OutputFormat::HexNoHash,
            OutputFormat::CssRgb,
            OutputFormat::Raw,
            OutputFormat::Custom(Template::parse("%d/%x/%X").unwrap()),
        ];
        for format in &formats {
            assert_eq!(format.render(&color), format.render(&color));
        }
    }

    #[test]
    fn test_write_line_appends_newline() {
        let mut out = Vec::new();
        OutputFormat::CssRgb.write_line(&mut out, &sample()).unwrap();
        assert_eq!(out, b"rgb(18, 184, 222)\n");
    }

    #[test]
    fn test_template_substitution() {
        let template = Template::parse("%d %d %d").unwrap();
        assert_eq!(template.placeholder_count(), 3);
        assert_eq!(template.render([18, 184, 222]), "18 184 222");

        let template: Template = "0x%x%x%x".parse().unwrap();
        assert_eq!(template.render([18, 184, 222]), "0x12b8de");

        let template = Template::parse("R=%X, G=%X, B=%X").unwrap();
        assert_eq!(template.render([18, 184, 0]), "R=12, G=B8, B=00");

        let template = Template::parse("%x.%d").unwrap();
        assert_eq!(template.render([5, 7, 0]), "05.7");
    }

    #[test]
    fn test_template_fewer_placeholders() {
        let template = Template::parse("red is %d").unwrap();
        assert_eq!(template.placeholder_count(), 1);
        assert_eq!(template.render([18, 184, 222]), "red is 18");

        let template = Template::parse("no channels").unwrap();
        assert_eq!(template.render([1, 2, 3]), "no channels");
    }

    #[test]
    fn test_template_percent_escape() {
        let template = Template::parse("%d%% %%d").unwrap();
        assert_eq!(template.placeholder_count(), 1);
        assert_eq!(template.render([50, 0, 0]), "50% %d");
    }

    #[test]
    fn test_template_errors() {
        assert_eq!(Template::parse("%d %d %d %d"), Err(CoreError::TooManyPlaceholders(4)));
        assert_eq!(Template::parse("%s"), Err(CoreError::UnknownDirective('s')));
        assert_eq!(Template::parse("100%"), Err(CoreError::TrailingPercent));
    }

    #[test]
    fn test_custom_uses_scaled_channels() {
        let format = OutputFormat::Custom(Template::parse("%d,%d,%d").unwrap());
        assert_eq!(format.render(&Color::new(65535, 0, 256)), "255,0,1");
    }
}

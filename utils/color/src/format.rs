use alloc::{format, string::String};

use colorup_core::{ColorFormat, Config, Rgb, util::round_to};

use crate::{hex_to_name, rgb_to_hex, rgb_to_hsl};

/// Renders `color` as text in `config.default_format`.
///
/// Alpha is written only when the color carries one and `config.alpha_support`
/// is on; it is rounded to `config.precision` decimal places. Hex output is
/// always the six-digit form. Named output falls back to hex when no name
/// matches, and HSV output falls back to hex because no HSV conversion exists.
#[must_use]
pub fn format_color(color: &Rgb, config: &Config) -> String {
    let Rgb { r, g, b, a } = *color;
    let alpha = a
        .filter(|_| config.alpha_support)
        .map(|alpha| round_to(alpha, config.precision));

    match config.default_format {
        ColorFormat::Hex | ColorFormat::Hsv => rgb_to_hex(r, g, b),
        ColorFormat::Named => {
            let hex = rgb_to_hex(r, g, b);
            hex_to_name(&hex).map_or(hex, |name| name.into())
        }
        ColorFormat::Rgb | ColorFormat::Css => match alpha {
            Some(alpha) => format!("rgba({r}, {g}, {b}, {alpha})"),
            None => format!("rgb({r}, {g}, {b})"),
        },
        ColorFormat::Hsl => {
            let hsl = rgb_to_hsl(r, g, b);
            let (h, s, l) = (hsl.h, hsl.s, hsl.l);
            match alpha {
                Some(alpha) => format!("hsla({h}, {s}%, {l}%, {alpha})"),
                None => format!("hsl({h}, {s}%, {l}%)"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(default_format: ColorFormat) -> Config {
        Config {
            default_format,
            ..Config::default()
        }
    }

    #[test]
    fn default_config_renders_hex() {
        assert_eq!(format_color(&Rgb::new(255, 0, 0), &Config::default()), "#ff0000");
        assert_eq!(
            format_color(&Rgb::rgba(255, 0, 0, 0.5), &Config::default()),
            "#ff0000"
        );
    }

    #[test]
    fn functional_notations() {
        let rgb = config(ColorFormat::Rgb);
        assert_eq!(format_color(&Rgb::new(1, 2, 3), &rgb), "rgb(1, 2, 3)");
        assert_eq!(
            format_color(&Rgb::rgba(1, 2, 3, 0.123_456), &rgb),
            "rgba(1, 2, 3, 0.123)"
        );

        let hsl = config(ColorFormat::Hsl);
        assert_eq!(format_color(&Rgb::new(255, 0, 0), &hsl), "hsl(0, 100%, 50%)");
        assert_eq!(
            format_color(&Rgb::rgba(102, 51, 153, 0.5), &hsl),
            "hsla(270, 50%, 40%, 0.5)"
        );
    }

    #[test]
    fn oversized_precision_keeps_alpha_finite() {
        let config = Config {
            default_format: ColorFormat::Rgb,
            precision: 400,
            ..Config::default()
        };
        assert_eq!(format_color(&Rgb::rgba(1, 2, 3, 0.5), &config), "rgba(1, 2, 3, 0.5)");
    }

    #[test]
    fn alpha_is_dropped_when_unsupported() {
        let config = Config {
            default_format: ColorFormat::Css,
            alpha_support: false,
            ..Config::default()
        };
        assert_eq!(format_color(&Rgb::rgba(1, 2, 3, 0.5), &config), "rgb(1, 2, 3)");
    }

    #[test]
    fn named_falls_back_to_hex() {
        let named = config(ColorFormat::Named);
        assert_eq!(format_color(&Rgb::new(102, 51, 153), &named), "rebeccapurple");
        assert_eq!(format_color(&Rgb::new(1, 2, 3), &named), "#010203");
        assert_eq!(format_color(&Rgb::new(1, 2, 3), &config(ColorFormat::Hsv)), "#010203");
    }
}

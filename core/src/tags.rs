//! Closed tag sets.
//!
//! Every tag enum carries the same surface: an `ALL` slice in declaration
//! order, [`as_str`](ColorFormat::as_str) returning the wire tag, and
//! `Display`/`FromStr`/serde impls that agree with it.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string is not one of a tag enum's tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} tag")]
pub struct ParseTagError {
    kind: &'static str,
}

macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $tag)]
                $variant,
            )+
        }

        impl $name {
            /// Every tag, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire tag of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $tag,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseTagError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|tag| tag.as_str().eq_ignore_ascii_case(s))
                    .ok_or(ParseTagError { kind: $kind })
            }
        }
    };
}

tag_enum!(
    /// The textual or structural shape a color input arrived in.
    ///
    /// Declaration order is the detection priority order.
    ColorFormat, "color format" {
        /// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
        Hex => "hex",
        /// An `{r, g, b}` record.
        Rgb => "rgb",
        /// An `{h, s, l}` record.
        Hsl => "hsl",
        /// An `{h, s, v}` record.
        Hsv => "hsv",
        /// A CSS color keyword such as `rebeccapurple`.
        Named => "named",
        /// A functional CSS notation such as `rgb(1, 2, 3)`.
        Css => "css",
    }
);

tag_enum!(
    /// Target formats for exported color tokens.
    ExportFormat, "export format" {
        /// JSON document.
        Json => "json",
        /// CSS custom properties.
        Css => "css",
        /// SCSS variables.
        Scss => "scss",
        /// LESS variables.
        Less => "less",
        /// JavaScript module.
        Js => "js",
        /// TypeScript module.
        Ts => "ts",
    }
);

tag_enum!(
    /// CSS compositing blend modes.
    BlendMode, "blend mode" {
        /// `normal`
        Normal => "normal",
        /// `multiply`
        Multiply => "multiply",
        /// `screen`
        Screen => "screen",
        /// `overlay`
        Overlay => "overlay",
        /// `soft-light`
        SoftLight => "soft-light",
        /// `hard-light`
        HardLight => "hard-light",
        /// `color-dodge`
        ColorDodge => "color-dodge",
        /// `color-burn`
        ColorBurn => "color-burn",
        /// `darken`
        Darken => "darken",
        /// `lighten`
        Lighten => "lighten",
        /// `difference`
        Difference => "difference",
        /// `exclusion`
        Exclusion => "exclusion",
    }
);

tag_enum!(
    /// Color harmony schemes.
    HarmonyType, "harmony" {
        /// Opposite hue.
        Complementary => "complementary",
        /// Neighbouring hues.
        Analogous => "analogous",
        /// Three hues 120 degrees apart.
        Triadic => "triadic",
        /// Four hues 90 degrees apart.
        Tetradic => "tetradic",
        /// The two neighbours of the complement.
        SplitComplementary => "split-complementary",
        /// One hue at varying lightness.
        Monochromatic => "monochromatic",
    }
);

tag_enum!(
    /// WCAG conformance level.
    WcagLevel, "WCAG level" {
        /// Level AA.
        Aa => "AA",
        /// Level AAA.
        Aaa => "AAA",
    }
);

tag_enum!(
    /// Text size category used by the WCAG contrast thresholds.
    TextSize, "text size" {
        /// Body text.
        Normal => "normal",
        /// Large or bold text.
        Large => "large",
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn detection_order_is_declaration_order() {
        assert_eq!(
            ColorFormat::ALL,
            &[
                ColorFormat::Hex,
                ColorFormat::Rgb,
                ColorFormat::Hsl,
                ColorFormat::Hsv,
                ColorFormat::Named,
                ColorFormat::Css,
            ]
        );
    }

    #[test]
    fn tags_parse_case_insensitively() {
        assert_eq!("HEX".parse::<ColorFormat>(), Ok(ColorFormat::Hex));
        assert_eq!("soft-light".parse::<BlendMode>(), Ok(BlendMode::SoftLight));
        assert_eq!("aaa".parse::<WcagLevel>(), Ok(WcagLevel::Aaa));
        assert!("lab".parse::<ColorFormat>().is_err());
    }

    #[test]
    fn unknown_tag_error_names_the_set() {
        let error = "sepia".parse::<BlendMode>().unwrap_err();
        assert_eq!(error.to_string(), "unknown blend mode tag");
    }

    #[test]
    fn serde_uses_wire_tags() {
        assert_eq!(
            serde_json::to_string(&BlendMode::ColorDodge).unwrap(),
            "\"color-dodge\""
        );
        let parsed: HarmonyType = serde_json::from_str("\"split-complementary\"").unwrap();
        assert_eq!(parsed, HarmonyType::SplitComplementary);
        assert_eq!(ExportFormat::Scss.to_string(), "scss");
    }
}

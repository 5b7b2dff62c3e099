//! RGBA color type used by tints and the feedback palette.
//!
//! Colors are plain byte quadruplets. The config file stores them as
//! `r,g,b` triples (alpha is always 255), parsed by [`Color::parse_rgb`].

/// An RGBA color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new color with the specified RGBA values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB bytes.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse a `r,g,b` byte triple as written in the config file.
    ///
    /// Returns `None` if the string does not contain exactly three valid
    /// byte values.
    pub fn parse_rgb(s: &str) -> Option<Self> {
        let mut parts = s.split(',').map(|p| p.trim().parse::<u8>());
        let r = parts.next()?.ok()?;
        let g = parts.next()?.ok()?;
        let b = parts.next()?.ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::rgb(r, g, b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let c = Color::new(10, 20, 30, 40);
        assert_eq!(c.r, 10);
        assert_eq!(c.g, 20);
        assert_eq!(c.b, 30);
        assert_eq!(c.a, 40);
    }

    #[test]
    fn test_rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).a, 255);
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(Color::default(), Color::WHITE);
    }

    #[test]
    fn test_parse_rgb_valid() {
        let c = Color::parse_rgb("200, 100, 50").unwrap();
        assert_eq!(c, Color::rgb(200, 100, 50));
    }

    #[test]
    fn test_parse_rgb_rejects_bad_input() {
        assert!(Color::parse_rgb("").is_none());
        assert!(Color::parse_rgb("1,2").is_none());
        assert!(Color::parse_rgb("1,2,3,4").is_none());
        assert!(Color::parse_rgb("256,0,0").is_none());
        assert!(Color::parse_rgb("red,green,blue").is_none());
    }
}

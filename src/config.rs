use thiserror::Error;

pub const DEFAULT_TOTAL_POINTS: usize = 100;
pub const DEFAULT_NUM_SQUARES: usize = 200;
pub const DEFAULT_FRAME_DELAY_MS: i32 = 25;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no seed given")]
    MissingSeed,
    #[error("seed {0:?} is not an integer")]
    InvalidSeed(String),
    #[error("{0} must be at least 1")]
    ZeroCount(&'static str),
}

/// Where the background colour comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSource {
    /// Picked from the built-in palette by the seed.
    Table,
    /// Supplied by the page as a CSS colour.
    External(String),
}

/// Behaviour switches distinguishing the two page variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub background: ColorSource,
    /// Recompute the path from the stored ratios on resize. Without it the
    /// path keeps the geometry of the first layout.
    pub rebuild_path_on_resize: bool,
    /// Multiply the grid cell size by the viewport scale.
    pub scale_grid_with_viewport: bool,
}

impl Profile {
    /// Palette background, geometry fixed at startup.
    pub fn inline() -> Self {
        Self {
            background: ColorSource::Table,
            rebuild_path_on_resize: false,
            scale_grid_with_viewport: false,
        }
    }

    /// Page-supplied background, geometry follows the viewport.
    pub fn external(color: impl Into<String>) -> Self {
        Self {
            background: ColorSource::External(color.into()),
            rebuild_path_on_resize: true,
            scale_grid_with_viewport: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// `None` when the page seed could not be read. Such a sketch keeps
    /// running but only ever paints its background.
    pub seed: Option<i64>,
    pub profile: Profile,
    pub total_points: usize,
    pub num_squares: usize,
    pub frame_delay_ms: i32,
}

impl SketchConfig {
    pub fn new(seed: i64, profile: Profile) -> Self {
        Self::with_seed(Some(seed), profile)
    }

    fn with_seed(seed: Option<i64>, profile: Profile) -> Self {
        Self {
            seed,
            profile,
            total_points: DEFAULT_TOTAL_POINTS,
            num_squares: DEFAULT_NUM_SQUARES,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
        }
    }

    /// Builds a config from the page's `data-seed` and `data-color`
    /// attributes. A non-empty colour selects the external profile.
    ///
    /// A missing or unreadable seed is not fatal: it is logged and the
    /// sketch is left unseeded.
    pub fn from_dataset(seed: Option<&str>, color: Option<&str>) -> Self {
        let seed = match seed.ok_or(ConfigError::MissingSeed).and_then(parse_seed) {
            Ok(seed) => Some(seed),
            Err(err) => {
                log::warn!("{err}; drawing background only");
                None
            }
        };
        let profile = match color.map(str::trim) {
            Some(c) if !c.is_empty() => Profile::external(c),
            _ => Profile::inline(),
        };
        Self::with_seed(seed, profile)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_points == 0 {
            return Err(ConfigError::ZeroCount("total_points"));
        }
        if self.num_squares == 0 {
            return Err(ConfigError::ZeroCount("num_squares"));
        }
        Ok(())
    }
}

/// Reads a base-10 integer prefix: leading whitespace, an optional sign,
/// then digits. Anything after the digits is ignored.
pub fn parse_seed(raw: &str) -> Result<i64, ConfigError> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(ConfigError::InvalidSeed(raw.to_owned()));
    }
    let value: i64 = rest[..digits]
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(raw.to_owned()))?;
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_prefix_parsing() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed("  7"), Ok(7));
        assert_eq!(parse_seed("-12"), Ok(-12));
        assert_eq!(parse_seed("+3"), Ok(3));
        assert_eq!(parse_seed("123abc"), Ok(123));
        assert_eq!(parse_seed("9.75"), Ok(9));
    }

    #[test]
    fn bad_seeds() {
        for raw in ["", "abc", "-", " + 1", "99999999999999999999999"] {
            assert_eq!(
                parse_seed(raw),
                Err(ConfigError::InvalidSeed(raw.to_owned())),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn dataset_selects_profile() {
        let c = SketchConfig::from_dataset(Some("1"), None);
        assert_eq!(c.seed, Some(1));
        assert_eq!(c.profile, Profile::inline());
        assert_eq!(c.total_points, 100);
        assert_eq!(c.num_squares, 200);
        assert_eq!(c.frame_delay_ms, 25);

        let c = SketchConfig::from_dataset(Some("1"), Some(" "));
        assert_eq!(c.profile, Profile::inline());

        let c = SketchConfig::from_dataset(Some("1"), Some("#102030"));
        assert_eq!(c.profile.background, ColorSource::External("#102030".into()));
        assert!(c.profile.rebuild_path_on_resize);
        assert!(c.profile.scale_grid_with_viewport);
    }

    #[test]
    fn unreadable_seed_leaves_sketch_unseeded() {
        let c = SketchConfig::from_dataset(None, Some("red"));
        assert_eq!(c.seed, None);
        assert_eq!(c.profile, Profile::external("red"));

        let c = SketchConfig::from_dataset(Some("abc"), None);
        assert_eq!(c.seed, None);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_counts_rejected() {
        let mut c = SketchConfig::new(1, Profile::inline());
        assert!(c.validate().is_ok());
        c.num_squares = 0;
        assert_eq!(c.validate(), Err(ConfigError::ZeroCount("num_squares")));
        c.total_points = 0;
        assert_eq!(c.validate(), Err(ConfigError::ZeroCount("total_points")));
    }
}

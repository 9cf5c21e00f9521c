//! Interpolation kernels a table can be built with.
use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Interpolation kernel kind.
///
/// Only [`Interpolation::Nearest`] has a kernel; the other kinds are
/// reserved and rejected when a table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Value at whichever bracketing point is closer to the query
    #[default]
    Nearest,
    /// Reserved
    Linear,
    /// Reserved
    Cubic,
}

impl Interpolation {
    /// Number of bracket-adjacent points the kernel draws on.
    pub const fn bracket_width(self) -> usize {
        match self {
            Interpolation::Nearest => 1,
            Interpolation::Linear => 2,
            Interpolation::Cubic => 4,
        }
    }

    /// Whether a table can be built with this kind.
    pub const fn is_supported(self) -> bool {
        match self {
            Interpolation::Nearest => true,
            Interpolation::Linear | Interpolation::Cubic => false,
        }
    }

    /// Name used by [`Display`](fmt::Display) and [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Interpolation::Nearest => "nearest",
            Interpolation::Linear => "linear",
            Interpolation::Cubic => "cubic",
        }
    }

    /// Fail if this kind has no kernel.
    pub(crate) fn check_supported(self) -> Result<Self, Error> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(Error::UnsupportedInterpolation(self))
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = Error;

    /// Parse a kind by name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        [
            Interpolation::Nearest,
            Interpolation::Linear,
            Interpolation::Cubic,
        ]
        .into_iter()
        .find(|kind| kind.name().eq_ignore_ascii_case(s))
        .ok_or(Error::UnknownInterpolation)
    }
}

#[cfg(test)]
mod test {
    use super::Interpolation;
    use crate::error::Error;

    #[test]
    fn test_bracket_width() {
        assert_eq!(Interpolation::Nearest.bracket_width(), 1);
        assert_eq!(Interpolation::Linear.bracket_width(), 2);
        assert_eq!(Interpolation::Cubic.bracket_width(), 4);
    }

    #[test]
    fn test_supported() {
        assert_eq!(Interpolation::default(), Interpolation::Nearest);
        assert_eq!(
            Interpolation::Nearest.check_supported(),
            Ok(Interpolation::Nearest)
        );
        assert_eq!(
            Interpolation::Linear.check_supported(),
            Err(Error::UnsupportedInterpolation(Interpolation::Linear))
        );
        assert!(!Interpolation::Cubic.is_supported());
    }

    #[test]
    fn test_parse() {
        assert_eq!("nearest".parse::<Interpolation>(), Ok(Interpolation::Nearest));
        assert_eq!(" Linear ".parse::<Interpolation>(), Ok(Interpolation::Linear));
        assert_eq!("CUBIC".parse::<Interpolation>(), Ok(Interpolation::Cubic));
        assert_eq!(
            "spline".parse::<Interpolation>(),
            Err(Error::UnknownInterpolation)
        );
    }
}

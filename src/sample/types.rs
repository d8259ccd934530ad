//! Constants, enumerations and macro replacements.

use super::error::SampleError;

/// Upper bound on buffer sizes used by sample callers.
pub const MAX_SIZE: i32 = 256;

/// Library version string.
pub const VERSION: &str = "1.0.0";

/// Number of [`Color`] values. A count marker, never a color.
pub const COLOR_COUNT: i32 = 3;

/// Size of [`Person::name`](super::Person), terminator included.
pub const PERSON_NAME_CAPACITY: usize = 64;

/// `SQUARE(x)`, wrapping on overflow.
#[inline]
pub const fn square(x: i32) -> i32 {
    x.wrapping_mul(x)
}

/// `MIN(a, b)`. Returns `b` when the two compare equal.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

/// Primary colors.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Color {
    /// Number of colors.
    pub const COUNT: usize = COLOR_COUNT as usize;

    /// Every color in discriminant order.
    pub const ALL: [Color; COLOR_COUNT as usize] = [Color::Red, Color::Green, Color::Blue];

    /// Get the string name of this color.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

impl TryFrom<i32> for Color {
    type Error = SampleError;

    fn try_from(value: i32) -> Result<Self, SampleError> {
        match value {
            0 => Ok(Color::Red),
            1 => Ok(Color::Green),
            2 => Ok(Color::Blue),
            other => Err(SampleError::UnknownColor(other)),
        }
    }
}

/// Status codes. Declared for binding generators; no operation returns one.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok = 0,
    Error = -1,
    NotFound = -2,
}

impl Status {
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl TryFrom<i32> for Status {
    type Error = SampleError;

    fn try_from(value: i32) -> Result<Self, SampleError> {
        match value {
            0 => Ok(Status::Ok),
            -1 => Ok(Status::Error),
            -2 => Ok(Status::NotFound),
            other => Err(SampleError::UnknownStatus(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(MAX_SIZE, 256);
        assert_eq!(VERSION, "1.0.0");
        assert_eq!(Color::COUNT, 3);
        assert_eq!(Color::ALL.len(), Color::COUNT);
    }

    #[test]
    fn test_macro_replacements() {
        assert_eq!(square(7), 49);
        assert_eq!(square(-3), 9);
        assert_eq!(min(2, 5), 2);
        assert_eq!(min(5, 2), 2);
        assert_eq!(min(1.5, -0.5), -0.5);
        const AREA: i32 = square(16);
        assert_eq!(AREA, MAX_SIZE);
    }

    #[test]
    fn test_color_discriminants() {
        assert_eq!(Color::Red as i32, 0);
        assert_eq!(Color::Green as i32, 1);
        assert_eq!(Color::Blue as i32, 2);
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(Color::try_from(i as i32), Ok(*color));
        }
        assert_eq!(Color::Blue.name(), "blue");
    }

    #[test]
    fn test_color_count_is_not_a_color() {
        assert_eq!(Color::try_from(COLOR_COUNT), Err(SampleError::UnknownColor(3)));
        assert_eq!(Color::try_from(-1), Err(SampleError::UnknownColor(-1)));
    }

    #[test]
    fn test_status_discriminants() {
        assert_eq!(Status::Ok as i32, 0);
        assert_eq!(Status::Error as i32, -1);
        assert_eq!(Status::NotFound as i32, -2);
        assert_eq!(Status::try_from(-2), Ok(Status::NotFound));
        assert!(Status::Ok.is_ok());
        assert!(!Status::Error.is_ok());

        let err = Status::try_from(1).unwrap_err();
        assert_eq!(err.to_string(), "unknown status discriminant: 1");
    }
}

//! Grid element trait for generic cell values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a grid cell.
///
/// Bounds the types usable as cell values, ensuring they support the
/// numeric operations the analyzers need.
pub trait GridElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Minimum value representable by this type
    fn min_value() -> Self;

    /// Maximum value representable by this type
    fn max_value() -> Self;

    /// Whether this type is a floating point type
    fn is_float() -> bool;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_grid_element_int {
    ($t:ty) => {
        impl GridElement for $t {
            fn min_value() -> Self {
                <$t>::MIN
            }

            fn max_value() -> Self {
                <$t>::MAX
            }

            fn is_float() -> bool {
                false
            }
        }
    };
}

macro_rules! impl_grid_element_float {
    ($t:ty) => {
        impl GridElement for $t {
            fn min_value() -> Self {
                <$t>::MIN
            }

            fn max_value() -> Self {
                <$t>::MAX
            }

            fn is_float() -> bool {
                true
            }
        }
    };
}

impl_grid_element_int!(u8);
impl_grid_element_int!(u16);
impl_grid_element_int!(u32);
impl_grid_element_int!(u64);
impl_grid_element_int!(i32);
impl_grid_element_int!(i64);
impl_grid_element_float!(f32);
impl_grid_element_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_element() {
        assert_eq!(<u8 as GridElement>::max_value(), 255);
        assert!(!<u8 as GridElement>::is_float());
        assert_eq!(200u8.to_f64(), Some(200.0));
    }

    #[test]
    fn test_float_element() {
        assert!(<f64 as GridElement>::is_float());
        assert_eq!(1.5f64.to_f64(), Some(1.5));
    }
}

//! Numeric element types accepted by the statistics functions.

use std::ops::Add;

/// A numeric array element.
///
/// Sums are taken in `Wide` so that long integer ranges cannot overflow
/// before the division by the element count.
pub trait Element: Copy + PartialOrd {
    type Wide: Copy + Default + Add<Output = Self::Wide>;

    fn widen(self) -> Self::Wide;

    fn wide_to_f64(wide: Self::Wide) -> f64;

    fn to_f64(self) -> f64;
}

macro_rules! impl_element {
    ($wide:ty => $($t:ty),+) => {
        $(
            impl Element for $t {
                type Wide = $wide;

                #[inline]
                fn widen(self) -> $wide {
                    self as $wide
                }

                #[inline]
                fn wide_to_f64(wide: $wide) -> f64 {
                    wide as f64
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

impl_element!(i128 => i8, i16, i32, i64, isize);
impl_element!(u128 => u8, u16, u32, u64, usize);
impl_element!(f64 => f32, f64);

//! Edge value types stored in an adjacency matrix.

use num_traits::{One, Zero};

/// An element type that can be stored in an [`AdjacencyStore`](super::AdjacencyStore).
///
/// `Default::default()` is the "no edge" value. [`EdgeValue::PRESENCE_ONLY`]
/// distinguishes pure presence indicators (`bool`) from weighted values,
/// which the neighbourhood explorer declines to interpret.
pub trait EdgeValue: Copy + PartialEq + Default {
    /// `true` when the value only records presence or absence of an edge.
    const PRESENCE_ONLY: bool;

    /// The value written for an unweighted edge.
    fn present() -> Self;

    /// Whether this value marks an edge.
    fn is_present(&self) -> bool;
}

impl EdgeValue for bool {
    const PRESENCE_ONLY: bool = true;

    #[inline(always)]
    fn present() -> Self {
        true
    }

    #[inline(always)]
    fn is_present(&self) -> bool {
        *self
    }
}

macro_rules! impl_weighted_edge_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl EdgeValue for $t {
                const PRESENCE_ONLY: bool = false;

                #[inline(always)]
                fn present() -> Self {
                    <$t as One>::one()
                }

                #[inline(always)]
                fn is_present(&self) -> bool {
                    !<$t as Zero>::is_zero(self)
                }
            }
        )*
    };
}

impl_weighted_edge_value!(u8, u16, u32, u64, usize, i8, i16, i32, i64, f32, f64);

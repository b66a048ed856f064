//! The concrete fixed-width integer types [`U1`] through [`U64`] and [`I1`]
//! through [`I64`].

use paste::paste;
use seq_macro::seq;

use crate::Xint;

macro_rules! define_xint_aliases {
    ($bits:literal) => {
        paste! {
            #[doc = concat!("The ", stringify!($bits), "-bit unsigned integer type.")]
            pub type [<U $bits>] = Xint<$bits, false>;

            #[doc = concat!(
                "The ", stringify!($bits), "-bit signed integer type, in two's complement.",
            )]
            pub type [<I $bits>] = Xint<$bits, true>;
        }
    };
}

seq!(N in 1..=64 { define_xint_aliases!(N); });

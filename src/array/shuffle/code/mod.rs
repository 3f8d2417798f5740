//! Shuffle implementations.

mod fisher_yates;
mod original;

pub use fisher_yates::shuffle_fisher_yates;
pub use original::shuffle_index_swap;

use crate::utils::VariantInfo;
use rand::rngs::StdRng;

/// Signature shared by the registered variants.
pub type ShuffleFn = fn(&mut [i64], &mut StdRng);

pub fn available_variants() -> Vec<VariantInfo<ShuffleFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Swap each index with a random index of the whole range",
            function: shuffle_index_swap::<i64, StdRng>,
        },
        VariantInfo {
            name: "fisher-yates",
            description: "rand's uniform Fisher-Yates shuffle",
            function: shuffle_fisher_yates::<i64, StdRng>,
        },
    ]
}

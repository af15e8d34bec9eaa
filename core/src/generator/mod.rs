use ndarray::Array2;

use crate::*;
pub use rejection::*;
pub use shuffle::*;

mod rejection;
mod shuffle;

pub trait MinefieldGenerator {
    fn generate(self, config: FieldConfig) -> Minefield;
}

/// How mines get distributed over the field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Draw random positions until enough distinct ones were hit.
    #[default]
    Rejection,
    /// Partially shuffle all positions, bounded time at any density.
    Shuffle,
}

impl Placement {
    pub fn generate(self, seed: u64, config: FieldConfig) -> Minefield {
        match self {
            Placement::Rejection => RejectionSamplingGenerator::new(seed).generate(config),
            Placement::Shuffle => ShuffleGenerator::new(seed).generate(config),
        }
    }
}

/// Shortcut for fields with no free cell left, nothing to sample.
fn full_field(config: FieldConfig) -> Minefield {
    let total_cells = config.total_cells();
    if config.mines > total_cells {
        log::warn!(
            "Minefield already full, generated anyway, requested {} but only fits {}",
            config.mines,
            total_cells
        );
    }
    Minefield::label(
        &Array2::from_elem(config.size.to_nd_index(), true),
        config.size,
    )
}

fn label_field(mines: &Array2<bool>, config: FieldConfig) -> Minefield {
    let field = Minefield::label(mines, config.size);
    if field.mine_count() != config.mines {
        log::warn!(
            "Generated minefield count mismatch, actual: {}, requested: {}",
            field.mine_count(),
            config.mines
        );
    }
    field
}

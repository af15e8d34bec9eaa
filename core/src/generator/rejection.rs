use super::*;

/// Places each mine at a uniformly random position, retrying positions that already hold one.
///
/// Expected draws stay close to the mine count on sparse fields but grow quickly as the field fills
/// up, see [`ShuffleGenerator`] for a bounded alternative.
#[derive(Clone, Debug, PartialEq)]
pub struct RejectionSamplingGenerator {
    seed: u64,
}

impl RejectionSamplingGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RejectionSamplingGenerator {
    fn generate(self, config: FieldConfig) -> Minefield {
        use rand::prelude::*;

        // also guarantees termination of the loop below
        if config.is_full() {
            return full_field(config);
        }

        let (width, height) = config.size;
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut draws: u64 = 0;

        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..width), rng.random_range(0..height));
            draws += 1;

            let tile = &mut mines[coords.to_nd_index()];
            if !*tile {
                *tile = true;
                mines_placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} in {} draws",
            mines_placed,
            width,
            height,
            draws
        );
        label_field(&mines, config)
    }
}

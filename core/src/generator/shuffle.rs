use alloc::collections::BTreeMap;

use super::*;

/// Partial Fisher-Yates shuffle over every position, exactly one draw per mine.
///
/// Only swapped positions are remembered, so memory follows the mine count rather than the area.
#[derive(Clone, Debug, PartialEq)]
pub struct ShuffleGenerator {
    seed: u64,
}

impl ShuffleGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for ShuffleGenerator {
    fn generate(self, config: FieldConfig) -> Minefield {
        use rand::prelude::*;

        if config.is_full() {
            return full_field(config);
        }

        let total_cells = config.total_cells();
        let height = CellCount::from(config.size.1);
        // positions missing from the map still hold their own index
        let mut swapped: BTreeMap<CellCount, CellCount> = BTreeMap::new();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());

        for i in 0..config.mines {
            let pick = rng.random_range(i..total_cells);
            let position = swapped.get(&pick).copied().unwrap_or(pick);
            let displaced = swapped.get(&i).copied().unwrap_or(i);
            swapped.insert(pick, displaced);

            // flat positions follow the [x, y] standard layout, x < width fits Coord
            let coords = ((position / height) as Coord, (position % height) as Coord);
            mines[coords.to_nd_index()] = true;
        }

        log::debug!(
            "Shuffled {} mines into {}x{}",
            config.mines,
            config.size.0,
            config.size.1
        );
        label_field(&mines, config)
    }
}

use ndarray::Array2;

/// Single coordinate axis used for field width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Size of a 2D array as `(x, y)`, `None` when an axis does not fit the coordinate type.
pub fn array_size<T>(array: &Array2<T>) -> Option<Coord2> {
    let (x, y) = array.dim();
    Some((Coord::try_from(x).ok()?, Coord::try_from(y).ok()?))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: Coord2) -> Neighbors;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: Coord2) -> Neighbors {
        let (x, y) = self.dim();
        // axes past the coordinate range are unreachable through a Coord2 anyway
        let bounds = (
            Coord::try_from(x).unwrap_or(Coord::MAX),
            Coord::try_from(y).unwrap_or(Coord::MAX),
        );
        Neighbors::new(center, bounds)
    }
}

const DISPLACEMENTS: [(i16, i16); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterator over the up to 8 cells surrounding `center`, clipped to `bounds`.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    next: usize,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            next: 0,
        }
    }

    fn shifted(&self, (dx, dy): (i16, i16)) -> Option<Coord2> {
        let (x, y) = self.center;
        let (max_x, max_y) = self.bounds;

        let x = x.checked_add_signed(dx).filter(|&x| x < max_x)?;
        let y = y.checked_add_signed(dy).filter(|&y| y < max_y)?;
        Some((x, y))
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(self.next) {
            self.next += 1;
            if let Some(coords) = self.shifted(delta) {
                return Some(coords);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len().saturating_sub(self.next)))
    }
}

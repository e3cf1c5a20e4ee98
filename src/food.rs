use rand::Rng;

use crate::grid::{OccupancyMap, Pos};

/// Picks a uniformly random unoccupied cell, or `None` on a full board.
pub fn random_free_cell<R: Rng + ?Sized>(occupancy: &OccupancyMap, rng: &mut R) -> Option<Pos> {
    if occupancy.free_count() == 0 {
        return None;
    }

    let side = occupancy.side();
    loop {
        let pos = Pos {
            x: rng.gen_range(0..side),
            y: rng.gen_range(0..side),
        };

        if !occupancy.is_occupied(pos) {
            return Some(pos);
        }
    }
}

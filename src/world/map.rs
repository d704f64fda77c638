//! Tile map data model
//!
//! Plain data structs (serde-serializable) plus cell queries. Tile ids are
//! indices into the tileset strip; 0 means empty. All coordinates are cell
//! coordinates unless a name says pixels.

use serde::{Deserialize, Serialize};

/// Side length of a tile in world pixels
pub const TILE_SIZE: f32 = 16.0;

/// A single tile layer: row-major cell grid, 0 = empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    pub cells: Vec<u16>,
}

impl TileLayer {
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            cells: vec![0; (width * height) as usize],
        }
    }
}

/// A complete level grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    pub width: u32,
    pub height: u32,
    /// Solid terrain layer
    pub ground: TileLayer,
    /// Coin layer; a non-zero cell is an uncollected coin
    pub coins: TileLayer,
    /// Player spawn cell
    pub spawn: (u32, u32),
}

impl TileMap {
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as u32 * self.width + x as u32) as usize)
    }

    /// Tile id in the ground layer, 0 for empty or out-of-bounds cells
    pub fn ground_at(&self, x: i32, y: i32) -> u16 {
        self.index(x, y).map_or(0, |i| self.ground.cells[i])
    }

    /// Is the cell solid terrain? Cells outside the grid are not solid, so
    /// a level with no floor lets the player fall out of the world.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.ground_at(x, y) != 0
    }

    /// Tile id in the coin layer, 0 for empty or out-of-bounds cells
    pub fn coin_at(&self, x: i32, y: i32) -> u16 {
        self.index(x, y).map_or(0, |i| self.coins.cells[i])
    }

    /// All non-empty coin cells, for seeding the ledger at load time
    pub fn coin_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.coins.cells.iter().enumerate().filter_map(|(i, &id)| {
            if id == 0 {
                return None;
            }
            Some((i as u32 % self.width, i as u32 / self.width))
        })
    }

    /// Remove a coin from the rendered layer. Returns false when the cell
    /// is already empty or out of bounds, true when a coin was cleared.
    pub fn clear_coin(&mut self, x: u32, y: u32) -> bool {
        match self.index(x as i32, y as i32) {
            Some(i) if self.coins.cells[i] != 0 => {
                self.coins.cells[i] = 0;
                true
            }
            _ => false,
        }
    }

    pub fn width_px(&self) -> f32 {
        self.width as f32 * TILE_SIZE
    }

    pub fn height_px(&self) -> f32 {
        self.height as f32 * TILE_SIZE
    }

    /// Spawn position in world pixels (top-left corner of the spawn cell)
    pub fn spawn_px(&self) -> (f32, f32) {
        (
            self.spawn.0 as f32 * TILE_SIZE,
            self.spawn.1 as f32 * TILE_SIZE,
        )
    }

    /// Small built-in level used as a fallback when no level file can be
    /// loaded, and by tests that need real terrain.
    pub fn sample() -> Self {
        let width = 40;
        let height = 15;
        let mut ground = TileLayer::empty(width, height);
        let mut coins = TileLayer::empty(width, height);

        // Floor along the bottom row
        for x in 0..width {
            ground.cells[((height - 1) * width + x) as usize] = 1;
        }
        // A few floating platforms
        for x in 8..12 {
            ground.cells[(10 * width + x) as usize] = 2;
        }
        for x in 16..21 {
            ground.cells[(8 * width + x) as usize] = 2;
        }
        // Coins above the platforms and along the floor
        for x in [9, 10, 17, 18, 19] {
            coins.cells[(7 * width + x) as usize] = 1;
        }
        for x in [25, 27, 29] {
            coins.cells[(13 * width + x) as usize] = 1;
        }

        Self {
            width,
            height,
            ground,
            coins,
            spawn: (2, 12),
        }
    }
}

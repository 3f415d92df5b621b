//! Tile world for the exploration screen: colliding tiles plus named map objects.
//!
//! Art layers belong to the engine. What gameplay needs from a map is which
//! tiles block movement and where the named points (the spawn point) are, so
//! that is all a world file carries.
//!
//! Movement uses **axis-separable move-and-slide**: resolve X against the
//! grid first, then Y from the corrected X. Bodies slide along walls instead
//! of sticking to them and cannot tunnel through corners.

use glam::Vec2;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

pub const SPAWN_POINT: &str = "Spawn Point";

/// Inset applied to box edges so a box resting on a tile face does not
/// count as overlapping that tile.
const SKIN: f32 = 0.001;
/// Shortfall beyond which a move counts as blocked.
const BLOCK_EPS: f32 = 0.0001;

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorldFile {
    pub version: String,
    pub world_id: String,
    pub tile_size: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub solids: Vec<TileCell>,
    #[serde(default)]
    pub objects: Vec<WorldObject>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCell {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorldObject {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// Axis-aligned box in world pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center_x: f32,
    pub center_y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Aabb {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x, self.center_y)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    pub aabb: Aabb,
    pub blocked_left: bool,
    pub blocked_right: bool,
    pub blocked_up: bool,
    pub blocked_down: bool,
}

#[derive(Debug, Clone)]
pub struct TileWorld {
    pub world_id: String,
    pub tile_size: i32,
    pub width: i32,
    pub height: i32,
    solids: HashSet<TileCell>,
    objects: HashMap<String, Vec2>,
}

impl TileWorld {
    pub fn from_file(file: WorldFile) -> Self {
        let objects = file
            .objects
            .into_iter()
            .map(|o| (o.name, Vec2::new(o.x, o.y)))
            .collect();
        Self {
            world_id: file.world_id,
            tile_size: file.tile_size,
            width: file.width,
            height: file.height,
            solids: file.solids.into_iter().collect(),
            objects,
        }
    }

    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return false;
        }
        self.solids.contains(&TileCell { x, y })
    }

    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }

    pub fn find_object(&self, name: &str) -> Option<Vec2> {
        self.objects.get(name).copied()
    }

    /// Where every explorer starts. A map without one cannot host the scene.
    pub fn spawn_point(&self) -> Result<Vec2, String> {
        self.find_object(SPAWN_POINT).ok_or_else(|| {
            format!(
                "World '{}' has no '{}' object",
                self.world_id, SPAWN_POINT
            )
        })
    }

    pub fn size_px(&self) -> Vec2 {
        Vec2::new(
            (self.width * self.tile_size) as f32,
            (self.height * self.tile_size) as f32,
        )
    }

    pub fn move_and_collide(&self, aabb: Aabb, dx: f32, dy: f32) -> MoveResult {
        let mut moved = aabb;
        moved.center_x = self.resolve_axis(moved, dx, Axis::X);
        moved.center_y = self.resolve_axis(moved, dy, Axis::Y);

        let short_x = (moved.center_x - (aabb.center_x + dx)).abs() > BLOCK_EPS;
        let short_y = (moved.center_y - (aabb.center_y + dy)).abs() > BLOCK_EPS;
        MoveResult {
            aabb: moved,
            blocked_left: short_x && dx < 0.0,
            blocked_right: short_x && dx > 0.0,
            blocked_up: short_y && dy < 0.0,
            blocked_down: short_y && dy > 0.0,
        }
    }

    /// New center along `axis` after trying to move `delta`. The box's leading
    /// edge is tested against the tile row (or column) it would enter; a hit
    /// parks the box flush with that tile's face, never behind where it began.
    fn resolve_axis(&self, aabb: Aabb, delta: f32, axis: Axis) -> f32 {
        let (start, half, cross, cross_half) = match axis {
            Axis::X => (aabb.center_x, aabb.half_w, aabb.center_y, aabb.half_h),
            Axis::Y => (aabb.center_y, aabb.half_h, aabb.center_x, aabb.half_w),
        };
        if delta == 0.0 {
            return start;
        }

        let target = start + delta;
        let leading = if delta > 0.0 {
            self.to_tile(target + half - SKIN)
        } else {
            self.to_tile(target - half + SKIN)
        };
        let first = self.to_tile(cross - cross_half + SKIN);
        let last = self.to_tile(cross + cross_half - SKIN);
        let hit = (first..=last).any(|t| match axis {
            Axis::X => self.is_solid(leading, t),
            Axis::Y => self.is_solid(t, leading),
        });

        match (hit, delta > 0.0) {
            (false, _) => target,
            (true, true) => (self.tile_min(leading) - half).max(start),
            (true, false) => (self.tile_max(leading) + half).min(start),
        }
    }

    fn to_tile(&self, world: f32) -> i32 {
        (world / self.tile_size as f32).floor() as i32
    }

    fn tile_min(&self, tile: i32) -> f32 {
        (tile * self.tile_size) as f32
    }

    fn tile_max(&self, tile: i32) -> f32 {
        ((tile + 1) * self.tile_size) as f32
    }
}

pub fn load_world_from_path(path: &Path) -> Result<TileWorld, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let file: WorldFile = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse world JSON {}: {e}", path.display()))?;
    validate_world_file(&file)?;
    Ok(TileWorld::from_file(file))
}

fn validate_world_file(file: &WorldFile) -> Result<(), String> {
    if file.version != "0.1" {
        return Err(format!(
            "World validation failed: unsupported version '{}'",
            file.version
        ));
    }
    if file.tile_size <= 0 {
        return Err("World validation failed: tile_size must be > 0".to_string());
    }
    if file.width <= 0 || file.height <= 0 {
        return Err("World validation failed: width and height must be > 0".to_string());
    }

    let mut seen = HashSet::new();
    for cell in &file.solids {
        if cell.x < 0 || cell.x >= file.width || cell.y < 0 || cell.y >= file.height {
            return Err(format!(
                "World validation failed: solid tile out of bounds ({}, {})",
                cell.x, cell.y
            ));
        }
        if !seen.insert(*cell) {
            return Err(format!(
                "World validation failed: duplicate solid tile ({}, {})",
                cell.x, cell.y
            ));
        }
    }

    let mut names = HashSet::new();
    for object in &file.objects {
        if !names.insert(object.name.as_str()) {
            return Err(format!(
                "World validation failed: duplicate object name '{}'",
                object.name
            ));
        }
    }
    Ok(())
}

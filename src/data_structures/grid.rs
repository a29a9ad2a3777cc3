//! Regular lattice of surface samples.
//!
//! A `HeightGrid` covers the square `[-half_width, half_width]` in x and z with
//! `resolution` points per side. Point `(i, j)` sits at
//! `x = lattice(i), z = lattice(j)`; only its elevation (and, for water, a
//! small jitter) is up to the generator that fills it.

use crate::math::Vec3;

/// N x N samples of one surface, stored row-major by `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    resolution: usize,
    half_width: f32,
    points: Vec<Vec3>,
}

/// The four corners of one lattice cell.
///
/// `tl = (i, j)`, `bl = (i + 1, j)`, `br = (i + 1, j + 1)`, `tr = (i, j + 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub i: usize,
    pub j: usize,
    pub tl: Vec3,
    pub bl: Vec3,
    pub br: Vec3,
    pub tr: Vec3,
}

impl Cell {
    pub fn average_elevation(&self) -> f32 {
        (self.tl.y + self.bl.y + self.br.y + self.tr.y) / 4.0
    }
}

impl HeightGrid {
    /// Build a grid by evaluating `sample(i, j, x, z)` at every lattice point.
    ///
    /// `resolution` must be at least 2; configuration validation guarantees it.
    pub fn from_fn(
        resolution: usize,
        half_width: f32,
        mut sample: impl FnMut(usize, usize, f32, f32) -> Vec3,
    ) -> Self {
        let mut points = Vec::with_capacity(resolution * resolution);
        for i in 0..resolution {
            let x = lattice_coordinate(i, resolution, half_width);
            for j in 0..resolution {
                let z = lattice_coordinate(j, resolution, half_width);
                points.push(sample(i, j, x, z));
            }
        }
        Self {
            resolution,
            half_width,
            points,
        }
    }

    /// A grid whose every point has elevation `y`.
    pub fn flat(resolution: usize, half_width: f32, y: f32) -> Self {
        Self::from_fn(resolution, half_width, |_, _, x, z| Vec3::new(x, y, z))
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    pub fn get(&self, i: usize, j: usize) -> Vec3 {
        self.points[i * self.resolution + j]
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// True for points on the domain boundary.
    pub fn is_edge(&self, i: usize, j: usize) -> bool {
        is_edge_index(i, j, self.resolution)
    }

    pub fn cell(&self, i: usize, j: usize) -> Cell {
        Cell {
            i,
            j,
            tl: self.get(i, j),
            bl: self.get(i + 1, j),
            br: self.get(i + 1, j + 1),
            tr: self.get(i, j + 1),
        }
    }

    /// Every cell, `i` outer and `j` inner.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cells_per_side = self.resolution.saturating_sub(1);
        (0..cells_per_side)
            .flat_map(move |i| (0..cells_per_side).map(move |j| (i, j)))
            .map(|(i, j)| self.cell(i, j))
    }

    pub fn cell_count(&self) -> usize {
        let side = self.resolution.saturating_sub(1);
        side * side
    }

    /// Nearest lattice index for a world coordinate, clamped into the grid.
    pub fn nearest_index(&self, coordinate: f32) -> usize {
        let last = self.resolution - 1;
        let t = (coordinate + self.half_width) / (2.0 * self.half_width);
        let index = (t * last as f32).round();
        if index.is_nan() || index <= 0.0 {
            0
        } else {
            (index as usize).min(last)
        }
    }

    /// Elevation of the lattice point nearest to `(x, z)`.
    pub fn elevation_near(&self, x: f32, z: f32) -> f32 {
        self.get(self.nearest_index(x), self.nearest_index(z)).y
    }
}

/// World coordinate of lattice index `index` on a side of `resolution` points.
pub fn lattice_coordinate(index: usize, resolution: usize, half_width: f32) -> f32 {
    let last = resolution.saturating_sub(1).max(1) as f32;
    -half_width + 2.0 * half_width * index as f32 / last
}

/// True when `(i, j)` lies on the boundary of a lattice with `resolution`
/// points per side.
pub fn is_edge_index(i: usize, j: usize, resolution: usize) -> bool {
    let last = resolution.saturating_sub(1);
    i == 0 || j == 0 || i == last || j == last
}

//! Placed scene objects.
//!
//! The placement engine decides *where* something grows and hands out a
//! `MeshInstance` per object; the mesh builders turn each one into triangles
//! exactly once. Instances are rebuilt on every placement pass.

use std::f32::consts::TAU;

use rand::Rng;

use crate::math::Vec3;

/// Upper bound (exclusive) of the random scale offset.
pub const MAX_SCALE_OFFSET: f32 = 0.2;

/// Kind of object a placement produces; the mesh builder dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Tree,
    Rock,
    Grass,
    House,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [MeshKind::Tree, MeshKind::Rock, MeshKind::Grass, MeshKind::House];
}

/// One object to build: kind, yaw, size tweak and ground position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshInstance {
    pub kind: MeshKind,
    /// Yaw offset in radians, `[0, 2π)`.
    pub rotation: f32,
    /// Added to the kind's base size, `[0, MAX_SCALE_OFFSET)`.
    pub scale_offset: f32,
    pub origin: Vec3,
}

impl MeshInstance {
    pub fn new(kind: MeshKind, rotation: f32, scale_offset: f32, origin: Vec3) -> Self {
        Self {
            kind,
            rotation,
            scale_offset,
            origin,
        }
    }

    /// An instance at `origin` with uniformly random rotation and scale offset.
    pub fn random<R: Rng + ?Sized>(kind: MeshKind, origin: Vec3, rng: &mut R) -> Self {
        Self {
            kind,
            rotation: rng.gen_range(0.0..TAU),
            scale_offset: rng.gen_range(0.0..MAX_SCALE_OFFSET),
            origin,
        }
    }
}

//! Neighbourhood policies and middle-bin iteration.
//!
//! For every non-empty middle bin the [`BinnedGroupIterator`] yields the
//! sets of bins that may hold bottom and top duplet partners. The two
//! neighbourhoods are separate policies so that detector topologies can
//! restrict them independently of each other.

use super::{BinCoord, SpacePointGrid};

/// Policy selecting the candidate bins around a middle bin.
pub trait BinFinder: Send + Sync {
    /// Collect the candidate bins around `center`.
    ///
    /// The returned order must be deterministic; it fixes the partner
    /// iteration order of the duplet search.
    fn neighbors(&self, grid: &SpacePointGrid, center: BinCoord) -> Vec<BinCoord>;
}

/// The 3×3 (φ, z) neighbourhood.
///
/// φ wraps around the full turn; z clamps at the detector ends. Bins
/// are returned in ascending (z, φ offset) loop order, the centre bin
/// included.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentBinFinder;

impl BinFinder for AdjacentBinFinder {
    fn neighbors(&self, grid: &SpacePointGrid, center: BinCoord) -> Vec<BinCoord> {
        let n_phi = grid.n_phi_bins() as isize;
        let n_z = grid.n_z_bins() as isize;
        let mut bins = Vec::with_capacity(9);

        for dz in -1isize..=1 {
            let z = center.z as isize + dz;
            if z < 0 || z >= n_z {
                continue;
            }
            for dphi in -1isize..=1 {
                let phi = (center.phi as isize + dphi).rem_euclid(n_phi) as usize;
                let coord = BinCoord { phi, z: z as usize };
                // fewer than three φ bins would visit a bin twice
                if !bins.contains(&coord) {
                    bins.push(coord);
                }
            }
        }
        bins
    }
}

/// One middle bin together with its bottom and top neighbourhoods.
#[derive(Debug, Clone)]
pub struct BinGroup {
    bottom: Vec<BinCoord>,
    middle: BinCoord,
    top: Vec<BinCoord>,
}

impl BinGroup {
    /// Bins that may hold bottom partners.
    #[inline]
    pub fn bottom(&self) -> &[BinCoord] {
        &self.bottom
    }

    /// The middle bin itself.
    #[inline]
    pub fn middle(&self) -> BinCoord {
        self.middle
    }

    /// Bins that may hold top partners.
    #[inline]
    pub fn top(&self) -> &[BinCoord] {
        &self.top
    }
}

/// Lazy iteration over the non-empty middle bins of a grid.
///
/// Middles are emitted in ascending (z, φ) bin order; this ordering is
/// the sole source of global determinism in the seed output.
pub struct BinnedGroupIterator<'a> {
    grid: &'a SpacePointGrid,
    bottom_finder: &'a dyn BinFinder,
    top_finder: &'a dyn BinFinder,
    cursor: usize,
}

impl<'a> BinnedGroupIterator<'a> {
    /// Create an iterator over `grid` with the given neighbourhood
    /// policies.
    pub fn new(
        grid: &'a SpacePointGrid,
        bottom_finder: &'a dyn BinFinder,
        top_finder: &'a dyn BinFinder,
    ) -> Self {
        Self {
            grid,
            bottom_finder,
            top_finder,
            cursor: 0,
        }
    }
}

impl Iterator for BinnedGroupIterator<'_> {
    type Item = BinGroup;

    fn next(&mut self) -> Option<BinGroup> {
        let n_phi = self.grid.n_phi_bins();
        let total = n_phi * self.grid.n_z_bins();

        while self.cursor < total {
            let coord = BinCoord {
                phi: self.cursor % n_phi,
                z: self.cursor / n_phi,
            };
            self.cursor += 1;

            if self.grid.bin(coord).is_empty() {
                continue;
            }
            return Some(BinGroup {
                bottom: self.bottom_finder.neighbors(self.grid, coord),
                middle: coord,
                top: self.top_finder.neighbors(self.grid, coord),
            });
        }
        None
    }
}

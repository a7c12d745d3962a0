use crate::error::{Error, Result};
use crate::union_find::UnionFind;

/// An `n`x`n` grid of sites, 1-indexed, row 1 on top.
///
/// Sites are linked in a [`UnionFind`] of `n² + 2` elements; the last two are the virtual top and
/// bottom. Open top-row sites are linked to the virtual top. No site is ever linked to the virtual
/// bottom: each component instead remembers whether it holds an open bottom-row site, and the two
/// sentinels are joined only once such a component is reached from the top. A bottom site that is
/// open but not full therefore never looks full after the grid percolates.
#[derive(Clone, Debug)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    sites: UnionFind,
    /// Indexed by root; `true` if the component holds an open bottom-row site.
    drains: Vec<bool>,
}

impl Percolation {
    /// O(n²)
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize);
        }
        let cells = n.checked_mul(n).ok_or(Error::InvalidSize)?;

        Ok(Self {
            n,
            open: vec![false; cells],
            open_count: 0,
            sites: UnionFind::new(cells + 2),
            drains: vec![false; cells + 2],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    #[inline]
    fn virtual_top(&self) -> usize {
        self.n * self.n
    }

    #[inline]
    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if (1..=self.n).contains(&row) && (1..=self.n).contains(&col) {
            Ok((row - 1) * self.n + (col - 1))
        } else {
            Err(Error::OutOfBounds {
                row,
                col,
                n: self.n,
            })
        }
    }

    fn join(&mut self, i: usize, j: usize) -> Result<()> {
        let a = self.sites.find(i)?;
        let b = self.sites.find(j)?;
        if self.sites.union(a, b)? {
            let root = self.sites.find(a)?;
            self.drains[root] = self.drains[a] || self.drains[b];
        }
        Ok(())
    }

    /// Amortized O(log n)
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.index(row, col)?;
        if self.open[site] {
            return Ok(());
        }

        self.open[site] = true;
        self.open_count += 1;
        if row == self.n {
            // `site` is still a singleton, so it is its own root.
            self.drains[site] = true;
        }
        if row == 1 {
            self.join(site, self.virtual_top())?;
        }

        let neighbors = [
            (row - 1, col),
            (row + 1, col),
            (row, col - 1),
            (row, col + 1),
        ];
        for &(r, c) in neighbors.iter() {
            if let Ok(other) = self.index(r, c) {
                if self.open[other] {
                    self.join(site, other)?;
                }
            }
        }

        let root = self.sites.find(site)?;
        let top = self.virtual_top();
        if self.drains[root] && self.sites.connected(root, top)? {
            let bottom = self.virtual_bottom();
            if self.sites.union(top, bottom)? {
                log::trace!(
                    "{}x{} grid percolates after opening ({}, {})",
                    self.n,
                    self.n,
                    row,
                    col,
                );
            }
        }

        Ok(())
    }

    /// O(1)
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        Ok(self.open[self.index(row, col)?])
    }

    /// Amortized O(log n)
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;
        let top = self.virtual_top();
        Ok(self.open[site] && self.sites.connected(site, top)?)
    }

    /// Amortized O(log n)
    pub fn percolates(&mut self) -> bool {
        let top = self.virtual_top();
        let bottom = self.virtual_bottom();
        // Both sentinels are always in range.
        self.sites.connected(top, bottom).unwrap_or(false)
    }
}

use crate::error::{Error, Result};

/// Disjoint sets over `0..len` with union-by-size and path compression.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parents: Vec<usize>,
    sizes: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// O(n)
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            parents: (0..size).collect(),
            sizes: vec![1; size],
            count: size,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of disjoint components.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    fn check(&self, i: usize) -> Result<()> {
        if i < self.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: i,
                len: self.len(),
            })
        }
    }

    /// Amortized O(log n)
    pub fn find(&mut self, mut i: usize) -> Result<usize> {
        self.check(i)?;

        let mut root = i;
        while self.parents[root] != root {
            root = self.parents[root];
        }

        while i != root {
            let parent = self.parents[i];
            self.parents[i] = root;
            i = parent;
        }

        Ok(root)
    }

    /// Returns `true` if two components were merged.
    ///
    /// Amortized O(log n)
    pub fn union(&mut self, i: usize, j: usize) -> Result<bool> {
        let i = self.find(i)?;
        let j = self.find(j)?;

        if i == j {
            Ok(false)
        } else {
            if self.sizes[i] < self.sizes[j] {
                self.parents[i] = j;
                self.sizes[j] += self.sizes[i];
            } else {
                self.parents[j] = i;
                self.sizes[i] += self.sizes[j];
            }
            self.count -= 1;

            Ok(true)
        }
    }

    /// Amortized O(log n)
    #[inline]
    pub fn connected(&mut self, i: usize, j: usize) -> Result<bool> {
        Ok(self.find(i)? == self.find(j)?)
    }

    #[inline]
    pub fn is_root(&self, root: usize) -> bool {
        root < self.len() && root == self.parents[root]
    }

    /// Size of the component containing `i`.
    #[inline]
    pub fn size_of(&mut self, i: usize) -> Result<usize> {
        let root = self.find(i)?;
        Ok(self.sizes[root])
    }
}

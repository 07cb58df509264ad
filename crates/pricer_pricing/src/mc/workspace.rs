//! Pre-allocated workspace buffers for antithetic path simulation.
//!
//! # Memory Layout
//!
//! Both buffers are row-major and contiguous:
//! - `randoms`: n_paths × n_steps (normal draws of the base paths)
//! - `paths`: 2·n_paths × (n_steps + 1); row `p` and row `p + n_paths`
//!   form an antithetic pair, column 0 holds the spot

/// Reusable simulation buffers.
///
/// Rows are laid out with the stride of the current grid, so capacity is
/// tracked in cells rather than per dimension. A buffer grows to exactly the
/// cells the requested grid needs, only when it holds fewer, and never
/// shrinks.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PathWorkspace;
///
/// let mut workspace = PathWorkspace::new(1000, 252);
/// assert_eq!(workspace.n_rows(), 2000);
/// assert_eq!(workspace.row_len(), 253);
///
/// workspace.ensure_capacity(10, 5);
/// assert_eq!(workspace.paths().len(), 20 * 6);
/// ```
pub struct PathWorkspace {
    randoms: Vec<f64>,
    paths: Vec<f64>,
    size_paths: usize,
    size_steps: usize,
}

impl PathWorkspace {
    /// Creates a workspace for `n_paths` base paths of `n_steps` steps.
    pub fn new(n_paths: usize, n_steps: usize) -> Self {
        Self {
            randoms: vec![0.0; n_paths * n_steps],
            paths: vec![0.0; 2 * n_paths * (n_steps + 1)],
            size_paths: n_paths,
            size_steps: n_steps,
        }
    }

    /// Resizes the logical grid, growing a buffer only if it is too small
    /// for the new grid.
    pub fn ensure_capacity(&mut self, n_paths: usize, n_steps: usize) {
        grow_to(&mut self.randoms, n_paths * n_steps);
        grow_to(&mut self.paths, 2 * n_paths * (n_steps + 1));

        self.size_paths = n_paths;
        self.size_steps = n_steps;
    }

    /// Bytes held by both buffers.
    #[inline]
    pub fn memory_usage(&self) -> usize {
        (self.randoms.capacity() + self.paths.capacity()) * std::mem::size_of::<f64>()
    }

    /// Normal-draw cells available without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.randoms.len()
    }

    /// Logical number of base paths.
    #[inline]
    pub fn size_paths(&self) -> usize {
        self.size_paths
    }

    /// Logical number of steps.
    #[inline]
    pub fn size_steps(&self) -> usize {
        self.size_steps
    }

    /// Simulated rows, antithetic partners included.
    #[inline]
    pub fn n_rows(&self) -> usize {
        2 * self.size_paths
    }

    /// Length of one path row (`n_steps + 1`).
    #[inline]
    pub fn row_len(&self) -> usize {
        self.size_steps + 1
    }

    /// Mutable normal draws, `n_paths × n_steps`.
    #[inline]
    pub fn randoms_mut(&mut self) -> &mut [f64] {
        let len = self.size_paths * self.size_steps;
        &mut self.randoms[..len]
    }

    /// Normal draws, `n_paths × n_steps`.
    #[inline]
    pub fn randoms(&self) -> &[f64] {
        let len = self.size_paths * self.size_steps;
        &self.randoms[..len]
    }

    /// All path rows, `2·n_paths × (n_steps + 1)`.
    #[inline]
    pub fn paths(&self) -> &[f64] {
        let len = self.n_rows() * self.row_len();
        &self.paths[..len]
    }

    /// One simulated path.
    ///
    /// # Panics
    ///
    /// Panics if `row >= n_rows()`.
    #[inline]
    pub fn path(&self, row: usize) -> &[f64] {
        let start = row * self.row_len();
        &self.paths()[start..start + self.row_len()]
    }

    /// Mutable paths together with the draws they are built from.
    #[inline]
    pub fn paths_mut_and_randoms(&mut self) -> (&mut [f64], &[f64]) {
        let randoms_len = self.size_paths * self.size_steps;
        let paths_len = self.n_rows() * self.row_len();
        (&mut self.paths[..paths_len], &self.randoms[..randoms_len])
    }
}

fn grow_to(buffer: &mut Vec<f64>, cells: usize) {
    if cells > buffer.len() {
        buffer.reserve_exact(cells - buffer.len());
        buffer.resize(cells, 0.0);
    }
}

impl Default for PathWorkspace {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

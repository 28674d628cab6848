//! Horizontal plot coordinates, one per history slot

/// `N` x positions evenly spaced across clip space, -1 to 1
pub struct PositionTable<const N: usize> {
    xs: [f32; N],
}

impl<const N: usize> PositionTable<N> {
    pub fn new() -> Self {
        const { assert!(N >= 2, "need at least two points to span [-1, 1]") };

        let mut xs = [0.0; N];
        for (i, x) in xs.iter_mut().enumerate() {
            let t = i as f32 / (N - 1) as f32;
            *x = -1.0 + 2.0 * t;
        }
        Self { xs }
    }

    pub fn position(&self, i: usize) -> f32 {
        self.xs[i]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.xs
    }

    /// Distance between neighbouring points
    pub fn spacing(&self) -> f32 {
        2.0 / (N - 1) as f32
    }
}

impl<const N: usize> Default for PositionTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

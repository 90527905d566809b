use crate::core::Colour;
use indicatif::{ProgressBar, ProgressStyle};
use smallvec::SmallVec;

/// How out-of-bounds reads are remapped into a plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EdgeMode {
    /// mirror about the border pixels, without repeating them
    Reflect,
    /// clamp to the nearest border pixel
    Replicate,
}

impl EdgeMode {
    fn remap(self, index: i64, bound: usize) -> usize {
        let bound = bound as i64;

        match self {
            EdgeMode::Replicate => index.clamp(0, bound - 1) as usize,
            EdgeMode::Reflect => {
                // a 1-wide plane reflects everything onto its only row/column
                if bound == 1 {
                    return 0;
                }

                let mut index = index;
                while index < 0 || index >= bound {
                    index = index.abs();
                    index -= bound - 1;
                    index = -index.abs();
                    index += bound - 1;
                }
                index as usize
            }
        }
    }
}

/// A single row-major channel of a [`Frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    height: usize,
    width: usize,
    edge_mode: EdgeMode,
    values: Vec<f64>,
}

impl Plane {
    fn new(height: usize, width: usize) -> Self {
        Plane {
            height,
            width,
            edge_mode: EdgeMode::Reflect,
            values: vec![0.0; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// # Panics
    /// Panics if `y` or `x` are out of bounds; use a [`View`] for remapped reads
    pub fn at(&self, y: usize, x: usize) -> f64 {
        assert!(y < self.height && x < self.width, "out of bounds read");

        self.values[y * self.width + x]
    }

    /// # Panics
    /// Panics if `y` or `x` are out of bounds
    pub fn set(&mut self, y: usize, x: usize, value: f64) {
        assert!(y < self.height && x < self.width, "out of bounds write");

        self.values[y * self.width + x] = value;
    }

    pub fn set_edge_mode(&mut self, edge_mode: EdgeMode) {
        self.edge_mode = edge_mode;
    }

    /// A bordered read-view centred on `(y, x)`, which may itself be out of bounds.
    pub fn view(&self, y: i64, x: i64) -> View {
        View {
            plane: self,
            y_offset: y,
            x_offset: x,
        }
    }
}

/// A read-only window into a [`Plane`] with its own origin; reads outside the plane are remapped
/// by the plane's [`EdgeMode`], so convolution kernels need no edge cases.
#[derive(Copy, Clone, Debug)]
pub struct View<'plane> {
    plane: &'plane Plane,
    y_offset: i64,
    x_offset: i64,
}

impl View<'_> {
    pub fn at(&self, dy: i64, dx: i64) -> f64 {
        let y = self.plane.edge_mode.remap(self.y_offset + dy, self.plane.height);
        let x = self.plane.edge_mode.remap(self.x_offset + dx, self.plane.width);

        self.plane.at(y, x)
    }
}

/// A planar floating-point image.
pub struct Frame {
    height: usize,
    width: usize,
    planes: SmallVec<[Plane; 3]>,
}

impl Frame {
    pub fn new(height: usize, width: usize, plane_count: usize) -> Self {
        Frame {
            height,
            width,
            planes: (0..plane_count).map(|_| Plane::new(height, width)).collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    pub fn plane(&self, index: usize) -> &Plane {
        &self.planes[index]
    }

    pub fn plane_mut(&mut self, index: usize) -> &mut Plane {
        &mut self.planes[index]
    }

    /// # Panics
    /// Panics if the frame has fewer than 3 planes
    pub fn pixel(&self, y: usize, x: usize) -> Colour {
        Colour::new(
            self.planes[0].at(y, x),
            self.planes[1].at(y, x),
            self.planes[2].at(y, x),
        )
    }

    /// # Panics
    /// Panics if the frame has fewer than 3 planes
    pub fn set_pixel(&mut self, y: usize, x: usize, colour: Colour) {
        self.planes[0].set(y, x, colour.red());
        self.planes[1].set(y, x, colour.green());
        self.planes[2].set(y, x, colour.blue());
    }

    /// Fills the frame by evaluating `pixel` at every coordinate, rendering rows in parallel.
    ///
    /// # Parameters
    /// `show_progress`: set to `true` when using e.g. `cargo run` for real-time progress updates;
    ///                  set to `false` when running benchmarks, otherwise it'll cripple
    ///                  performance due to stdout locking
    pub fn draw<F>(&mut self, show_progress: bool, pixel: F)
    where
        F: Fn(usize, usize) -> Colour,
        F: Sync + Send,
    {
        use indicatif::ParallelProgressIterator;
        use rayon::prelude::*;

        let progress_bar = if show_progress {
            ProgressBar::new(self.height as u64)
                .with_style(ProgressStyle::default_bar().template("Rendering: {percent}%"))
        } else {
            ProgressBar::hidden()
        };

        let width = self.width;
        let rows: Vec<Vec<Colour>> = (0..self.height)
            .into_par_iter()
            .progress_with(progress_bar)
            .map(|y| (0..width).map(|x| pixel(x, y)).collect())
            .collect();

        for (y, row) in rows.into_iter().enumerate() {
            for (x, colour) in row.into_iter().enumerate() {
                self.set_pixel(y, x, colour);
            }
        }
    }
}

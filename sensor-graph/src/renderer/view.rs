//! Strided float view - how one vertex attribute reads a byte buffer
//!
//! Describes `count` f32 values starting `offset` bytes into `base`, each
//! `stride` bytes apart. Bounds are checked once here so backends can hand
//! stride and offset straight to the GPU.

use bytemuck::Pod;
use std::fmt;
use std::mem::size_of;

const COMPONENT: usize = size_of::<f32>();

/// Why a strided view could not be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    StrideTooSmall(usize),
    Misaligned { stride: usize, offset: usize },
    OutOfBounds { needed: usize, available: usize },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::StrideTooSmall(stride) => write!(f, "stride {} is smaller than one float", stride),
            ViewError::Misaligned { stride, offset } => {
                write!(f, "stride {} / offset {} not float-aligned", stride, offset)
            }
            ViewError::OutOfBounds { needed, available } => {
                write!(f, "view needs {} bytes, buffer has {}", needed, available)
            }
        }
    }
}

impl std::error::Error for ViewError {}

/// Validated (base, stride, offset, count) view of scalar floats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StridedView<'a> {
    base: &'a [u8],
    stride: usize,
    offset: usize,
    count: usize,
}

impl<'a> StridedView<'a> {
    pub fn new(base: &'a [u8], stride: usize, offset: usize, count: usize) -> Result<Self, ViewError> {
        if stride < COMPONENT {
            return Err(ViewError::StrideTooSmall(stride));
        }
        if stride % COMPONENT != 0 || offset % COMPONENT != 0 {
            return Err(ViewError::Misaligned { stride, offset });
        }

        let needed = match count {
            0 => 0,
            n => offset + (n - 1) * stride + COMPONENT,
        };
        if needed > base.len() {
            return Err(ViewError::OutOfBounds { needed, available: base.len() });
        }

        Ok(Self { base, stride, offset, count })
    }

    /// One f32 field of every element in `items`
    pub fn field<T: Pod>(items: &'a [T], field_offset: usize) -> Result<Self, ViewError> {
        Self::new(bytemuck::cast_slice(items), size_of::<T>(), field_offset, items.len())
    }

    /// Tightly packed floats
    pub fn packed(values: &'a [f32]) -> Self {
        Self {
            base: bytemuck::cast_slice(values),
            stride: COMPONENT,
            offset: 0,
            count: values.len(),
        }
    }

    /// Whole underlying buffer, for upload
    pub fn base(&self) -> &'a [u8] {
        self.base
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn get(&self, i: usize) -> Option<f32> {
        if i >= self.count {
            return None;
        }
        let at = self.offset + i * self.stride;
        Some(bytemuck::pod_read_unaligned(&self.base[at..at + COMPONENT]))
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }
}

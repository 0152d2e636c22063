use crate::error::DemaskError;

/// Sprite cell size. Both dimensions are validated to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    width: u32,
    height: u32,
}

impl CellSize {
    pub const DEFAULT_WIDTH: u32 = 30;
    pub const DEFAULT_HEIGHT: u32 = 22;

    /// Validate a cell size given as signed integers, as they arrive from the
    /// command line or a config file.
    pub fn new(width: i64, height: i64) -> Result<Self, DemaskError> {
        let invalid = || DemaskError::InvalidCellSize { width, height };
        let w = u32::try_from(width).map_err(|_e| invalid())?;
        let h = u32::try_from(height).map_err(|_e| invalid())?;
        if w == 0 || h == 0 {
            return Err(invalid());
        }
        Ok(Self {
            width: w,
            height: h,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
        }
    }
}

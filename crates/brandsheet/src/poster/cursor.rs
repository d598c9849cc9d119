/// Running vertical offset marking where the next section starts.
///
/// The cursor only moves down: negative advances are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCursor {
    y: f32,
}

impl LayoutCursor {
    pub fn new(start: f32) -> Self {
        Self { y: start }
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Moves the cursor down by `extent` pixels.
    pub fn advance(&mut self, extent: f32) {
        self.y += extent.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut cursor = LayoutCursor::new(120.0);
        cursor.advance(200.0);
        cursor.advance(368.0);
        assert_approx_eq!(f32, cursor.y(), 688.0);
    }

    #[test]
    fn test_cursor_never_moves_back() {
        let mut cursor = LayoutCursor::new(120.0);
        cursor.advance(-50.0);
        assert_approx_eq!(f32, cursor.y(), 120.0);
    }
}

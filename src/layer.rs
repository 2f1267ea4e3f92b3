//! Writable frame buffer addressed by key-matrix coordinates

use tracing::debug;

use crate::models::Color;

/// One frame worth of per-key colors
///
/// The host composites layers and commits them to the device; effects only
/// write into them.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    width: usize,
    height: usize,
    background_color: Color,
    data: Vec<Color>,
}

impl Layer {
    pub fn new(width: usize, height: usize) -> Self {
        let background_color = Color::new(0, 0, 0);

        Self {
            width,
            height,
            background_color,
            data: vec![background_color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Write a color at the given matrix position
    ///
    /// Writes outside the matrix are dropped.
    pub fn put(&mut self, row: usize, col: usize, color: Color) {
        if row >= self.height || col >= self.width {
            debug!(row, col, "put outside layer bounds");
            return;
        }

        self.data[row * self.width + col] = color;
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.height || col >= self.width {
            return None;
        }

        Some(self.data[row * self.width + col])
    }

    /// Reset every key to the background color
    pub fn clear(&mut self) {
        let background_color = self.background_color;

        for color in &mut self.data {
            *color = background_color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get() {
        let mut layer = Layer::new(22, 6);
        let color = Color::new(255, 0, 0);

        layer.put(2, 3, color);

        assert_eq!(layer.get(2, 3), Some(color));
        assert_eq!(layer.get(0, 0), Some(Color::new(0, 0, 0)));
    }

    #[test]
    fn out_of_bounds_writes_dropped() {
        let mut layer = Layer::new(22, 6);
        let before = layer.clone();

        layer.put(6, 0, Color::new(255, 0, 0));
        layer.put(0, 22, Color::new(255, 0, 0));

        assert_eq!(layer, before);
        assert_eq!(layer.get(6, 0), None);
    }

    #[test]
    fn clear_restores_background() {
        let mut layer = Layer::new(4, 4);
        layer.set_background_color(Color::new(0, 0, 64));
        layer.put(1, 1, Color::new(255, 255, 255));

        layer.clear();

        assert_eq!(layer.get(1, 1), Some(Color::new(0, 0, 64)));
    }
}

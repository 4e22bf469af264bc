/// Preview frame sizing for the drag-to-resize handle

pub const MIN_WIDTH: i32 = 600;
pub const MIN_HEIGHT: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: i32,
    pub height: i32,
}

impl FrameSize {
    pub fn new(width: i32, height: i32) -> FrameSize {
        FrameSize { width, height }.clamped()
    }

    /// Each axis floored independently
    pub fn clamped(self) -> FrameSize {
        FrameSize {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
        }
    }

    pub fn css(&self) -> String {
        format!("width: {}px; height: {}px;", self.width, self.height)
    }
}

impl Default for FrameSize {
    fn default() -> Self {
        FrameSize {
            width: 1200,
            height: 700,
        }
    }
}

/// Pointer position and frame size captured when a drag starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStart {
    pub pointer_x: i32,
    pub pointer_y: i32,
    pub size: FrameSize,
}

impl DragStart {
    pub fn new(pointer_x: i32, pointer_y: i32, size: FrameSize) -> DragStart {
        DragStart {
            pointer_x,
            pointer_y,
            size,
        }
    }

    /// Size for the current pointer position, relative to the snapshot
    pub fn resize(&self, pointer_x: i32, pointer_y: i32) -> FrameSize {
        FrameSize {
            width: self.size.width + (pointer_x - self.pointer_x),
            height: self.size.height + (pointer_y - self.pointer_y),
        }
        .clamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size() {
        assert_eq!(FrameSize::default(), FrameSize { width: 1200, height: 700 });
    }

    #[test]
    fn test_resize_applies_delta() {
        let start = DragStart::new(500, 400, FrameSize::default());

        let size = start.resize(450, 410);

        assert_eq!(size, FrameSize { width: 1150, height: 710 });
    }

    #[test]
    fn test_resize_clamps_each_axis() {
        let start = DragStart::new(500, 400, FrameSize::default());

        // Only width falls under the floor
        assert_eq!(start.resize(-300, 420), FrameSize { width: 600, height: 720 });
        // Only height falls under the floor
        assert_eq!(start.resize(520, -100), FrameSize { width: 1220, height: 300 });
        // Both
        assert_eq!(start.resize(-2000, -2000), FrameSize { width: 600, height: 300 });
    }

    #[test]
    fn test_resize_is_relative_to_snapshot() {
        let start = DragStart::new(100, 100, FrameSize::new(800, 400));

        // Intermediate moves do not accumulate
        let _ = start.resize(150, 150);
        assert_eq!(start.resize(110, 90), FrameSize { width: 810, height: 390 });
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(FrameSize::new(10, 10), FrameSize { width: MIN_WIDTH, height: MIN_HEIGHT });
    }

    #[test]
    fn test_css() {
        assert_eq!(FrameSize::new(640, 480).css(), "width: 640px; height: 480px;");
    }
}

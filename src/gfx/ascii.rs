//! ASCII 合成器
//!
//! 把 headless surface 按堆叠顺序画到字符网格上，用于演示和调试。
//! 每个字符格对应一个像素。旋转不参与绘制。

use std::fmt;

use super::headless::{HeadlessSurface, SurfaceState};

/// 按不透明度从低到高排列的字符
const SHADES: [char; 5] = [' ', '.', ':', '+', '#'];

/// 字符画布
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// 创建空白画布
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// 读取一个字符格，越界返回 `None`
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// 清空画布
    pub fn clear(&mut self) {
        self.cells.fill(' ');
    }

    /// 按堆叠顺序合成一组 surface
    ///
    /// 堆叠值小的先画，相同堆叠值按传入顺序。
    /// 从未写入过几何属性的 surface 会被跳过。
    pub fn compose(&mut self, surfaces: &[&HeadlessSurface]) {
        self.clear();

        let mut ordered: Vec<&SurfaceState> = surfaces.iter().map(|s| s.state()).collect();
        // sort_by_key 是稳定排序
        ordered.sort_by_key(|state| state.z_index.unwrap_or(0));

        for state in ordered {
            self.paint(state);
        }
    }

    fn paint(&mut self, state: &SurfaceState) {
        let (Some(left), Some(top), Some(width), Some(height)) =
            (state.left, state.top, state.width, state.height)
        else {
            return;
        };

        let glyph = shade(state.opacity.unwrap_or(1.0));
        if glyph == ' ' {
            return;
        }

        let x0 = left.max(0) as i64;
        let y0 = top.max(0) as i64;
        let x1 = (left as i64 + width as i64).min(self.width as i64);
        let y1 = (top as i64 + height as i64).min(self.height as i64);

        for y in y0..y1 {
            for x in x0..x1 {
                self.cells[y as usize * self.width + x as usize] = glyph;
            }
        }
    }
}

/// 不透明度映射到字符，越界值先截断到 0.0 - 1.0
fn shade(opacity: f32) -> char {
    let clamped = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
    let idx = (clamped * (SHADES.len() - 1) as f32).round() as usize;
    SHADES[idx]
}

impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{DrawingContext, HeadlessContext, Surface};

    fn rect(ctx: &mut HeadlessContext, x: i32, y: i32, w: i32, h: i32, z: i32) -> HeadlessSurface {
        let mut surface = ctx.create_surface();
        surface.set_left(x);
        surface.set_top(y);
        surface.set_width(w);
        surface.set_height(h);
        surface.set_z_index(z);
        surface
    }

    #[test]
    fn test_shade() {
        assert_eq!(shade(0.0), ' ');
        assert_eq!(shade(1.0), '#');
        assert_eq!(shade(0.5), ':');
        assert_eq!(shade(7.0), '#');
        assert_eq!(shade(-1.0), ' ');
    }

    #[test]
    fn test_compose_respects_stacking_order() {
        let mut ctx = HeadlessContext::new();
        let mut top = rect(&mut ctx, 0, 0, 2, 2, 5);
        top.set_opacity(0.5);
        let bottom = rect(&mut ctx, 1, 1, 2, 2, 1);

        let mut canvas = AsciiCanvas::new(4, 4);
        // 传入顺序与堆叠顺序相反
        canvas.compose(&[&top, &bottom]);

        assert_eq!(canvas.get(0, 0), Some(':'));
        assert_eq!(canvas.get(1, 1), Some(':'));
        assert_eq!(canvas.get(2, 2), Some('#'));
        assert_eq!(canvas.get(3, 3), Some(' '));
    }

    #[test]
    fn test_compose_clips_to_canvas() {
        let mut ctx = HeadlessContext::new();
        let surface = rect(&mut ctx, -2, 2, 10, 10, 0);

        let mut canvas = AsciiCanvas::new(3, 3);
        canvas.compose(&[&surface]);

        assert_eq!(canvas.get(0, 2), Some('#'));
        assert_eq!(canvas.get(2, 2), Some('#'));
        assert_eq!(canvas.get(0, 1), Some(' '));
        assert_eq!(canvas.get(3, 2), None);
    }

    #[test]
    fn test_unrendered_surface_is_skipped() {
        let mut ctx = HeadlessContext::new();
        let blank = ctx.create_surface();

        let mut canvas = AsciiCanvas::new(2, 2);
        canvas.compose(&[&blank]);

        assert_eq!(canvas.to_string(), "\n\n");
    }
}

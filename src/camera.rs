use crate::grid::Grid;
use crate::Coord;

/// Hex values of braille dots
///
/// ```text
///      1   8
///      2  10
///      4  20
///     40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A terminal viewport onto the world.
///
/// Each terminal character packs a 2x4 block of pixels as braille dots, and
/// each pixel is exactly one world cell. Panning moves the `(x, y)` offset,
/// which is the world coordinate of the top-left pixel.
pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the framebuffer
    w: usize,

    /// Height of the framebuffer
    h: usize,

    /// `x` offset from origin
    x: Coord,

    /// `y` offset from origin
    y: Coord,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        let cb = vec![false; w * h];

        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // Let `w` and `h` refer to width and height of the cell buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        // (that is, not accounting for the trailing newlines expected at the end of each line).

        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // Each braille character is 3 bytes, and newlines one byte. Since we need `bh` newlines,
        // this gives us a framebuffer of length `3 * (bw * bh) + bh`.

        let mut fb = String::with_capacity(3 * (bw * bh) + bh);

        // Update the frame buffer
        for (i, &c) in cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                fb.push('\n');
            }

            fb.push(::std::char::from_u32(c).unwrap());
        }
        fb.push('\n');

        Self {
            cb,
            fb,
            cp,
            w,
            h,
            x: 0,
            y: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn offset_x(&mut self, offset: Coord) {
        self.x += offset;
    }

    pub fn offset_y(&mut self, offset: Coord) {
        self.y += offset;
    }

    /// Map a terminal character position to the world coordinate of its
    /// top-left pixel. The inverse of drawing, at character resolution.
    pub fn screen_to_world(&self, col: u16, row: u16) -> (Coord, Coord) {
        (2 * col as Coord + self.x, 4 * row as Coord + self.y)
    }

    /// Rasterize every live cell of `grid` that falls inside the viewport.
    pub fn draw_grid<G: Grid>(&mut self, grid: &G) {
        for py in 0..self.h {
            for px in 0..self.w {
                let wx = px as Coord + self.x;
                let wy = py as Coord + self.y;

                if grid.read(wx, wy).unwrap_or(0) > 0 {
                    self.draw_pixel(px, py);
                }
            }
        }
    }

    /// Trace the border of `grid`'s addressable space, one pixel outside it,
    /// clipped to the viewport.
    pub fn draw_grid_outline<G: Grid>(&mut self, grid: &G) {
        let (min_x, min_y, max_x, max_y) = grid.bounds();

        for wx in min_x - 1..=max_x + 1 {
            self.draw_world_pixel(wx, min_y - 1);
            self.draw_world_pixel(wx, max_y + 1);
        }

        for wy in min_y - 1..=max_y + 1 {
            self.draw_world_pixel(min_x - 1, wy);
            self.draw_world_pixel(max_x + 1, wy);
        }
    }

    /// Turns on the pixel showing world coordinate `(wx, wy)`, if visible
    fn draw_world_pixel(&mut self, wx: Coord, wy: Coord) {
        let px = wx - self.x;
        let py = wy - self.y;

        if (0..self.w as Coord).contains(&px) && (0..self.h as Coord).contains(&py) {
            self.draw_pixel(px as usize, py as usize);
        }
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?". This is how the live cells end up as braille dots.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = self.xy_to(n);
            let hex = Self::get_hex_value(x, y);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += hex;
            }
        }

        // update framebuffer
        self.fb.clear();

        // Update the frame buffer
        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(::std::char::from_u32(c).unwrap());
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_to_world_tracks_the_offset() {
        let mut cam = Camera::new(16, 8);

        assert_eq!(cam.screen_to_world(0, 0), (0, 0));
        assert_eq!(cam.screen_to_world(3, 1), (6, 4));

        cam.offset_x(-2);
        cam.offset_y(5);

        assert_eq!(cam.screen_to_world(0, 0), (-2, 5));
        assert_eq!(cam.screen_to_world(3, 1), (4, 9));
    }
}

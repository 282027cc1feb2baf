pub const FG: u8 = 255;

/// Blank (all-background) raster.
pub fn blank(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![0u8; width * height]
}

/// Fill a `bw × bh` rectangle with foreground.
pub fn paint_rect(data: &mut [u8], width: usize, x0: usize, y0: usize, bw: usize, bh: usize) {
    for y in y0..y0 + bh {
        for x in x0..x0 + bw {
            data[y * width + x] = FG;
        }
    }
}

/// Filled disc of the given radius centred on pixel `(cx, cy)`.
pub fn paint_disc(data: &mut [u8], width: usize, cx: usize, cy: usize, radius: usize) {
    let r2 = (radius * radius) as i64;
    for y in cy - radius..=cy + radius {
        for x in cx - radius..=cx + radius {
            let dx = x as i64 - cx as i64;
            let dy = y as i64 - cy as i64;
            if dx * dx + dy * dy <= r2 {
                data[y * width + x] = FG;
            }
        }
    }
}

/// Paint an ASCII sprite (`#` = foreground) with its top-left corner at `(x0, y0)`.
pub fn paint_sprite(data: &mut [u8], width: usize, x0: usize, y0: usize, sprite: &[&str]) {
    for (dy, row) in sprite.iter().enumerate() {
        for (dx, b) in row.bytes().enumerate() {
            if b == b'#' {
                data[(y0 + dy) * width + x0 + dx] = FG;
            }
        }
    }
}

/// Rotate an ASCII sprite by 90° clockwise.
pub fn rotate_sprite_cw(sprite: &[&str]) -> Vec<String> {
    let rows: Vec<&[u8]> = sprite.iter().map(|r| r.as_bytes()).collect();
    let h = rows.len();
    let w = rows[0].len();
    (0..w)
        .map(|x| {
            (0..h)
                .rev()
                .map(|y| rows[y][x] as char)
                .collect::<String>()
        })
        .collect()
}

/// Deterministic speckle pattern with roughly `density_pct` percent foreground.
pub fn speckle(width: usize, height: usize, density_pct: u32, seed: u64) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..width * height)
        .map(|_| {
            // xorshift64
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            if (state % 100) < density_pct as u64 {
                FG
            } else {
                0
            }
        })
        .collect()
}

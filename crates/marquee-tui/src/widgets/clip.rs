use ratatui::{buffer::Buffer, layout::Rect};

/// Render into an off-screen buffer of `width` x `height` placed at signed
/// screen coordinates `(x, y)`, then copy only the cells inside `clip`.
///
/// Lets widgets be partly scrolled out of view on either axis.
pub fn render_clipped<F>(buf: &mut Buffer, clip: Rect, x: i32, y: i32, width: u16, height: u16, draw: F)
where
    F: FnOnce(Rect, &mut Buffer),
{
    if width == 0 || height == 0 {
        return;
    }

    let local = Rect::new(0, 0, width, height);
    let mut scratch = Buffer::empty(local);
    draw(local, &mut scratch);

    for row in 0..height {
        let screen_y = y + i32::from(row);
        if screen_y < i32::from(clip.top()) || screen_y >= i32::from(clip.bottom()) {
            continue;
        }
        for col in 0..width {
            let screen_x = x + i32::from(col);
            if screen_x < i32::from(clip.left()) || screen_x >= i32::from(clip.right()) {
                continue;
            }
            if let (Some(src), Some(dst)) = (
                scratch.cell((col, row)),
                buf.cell_mut((screen_x as u16, screen_y as u16)),
            ) {
                *dst = src.clone();
            }
        }
    }
}

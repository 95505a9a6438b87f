use bandfx::Gradient;

/// Renders a `width` by `height` grid, row by row, with one line per row.
/// Non-positive sizes produce no rows or no columns.
pub fn render(gradient: &Gradient, width: i32, height: i32) -> String {
    let mut output = String::new();
    for y in 0..height {
        for x in 0..width {
            output.push_str(gradient.get_band(x, y));
        }
        output.push('\n');
    }
    output
}

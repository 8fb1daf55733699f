/// Background colours picked by the second random draw.
pub const BACKGROUNDS: [&str; 6] = [
    "#8A63D2", "#BAB3CD", "#3F1E94", "#8A63D2", "#261356", "#524D61",
];

pub fn background(index: usize) -> &'static str {
    BACKGROUNDS[index % BACKGROUNDS.len()]
}

/// Hue of square `i`: two degrees per square, wrapping at 360.
pub fn hue(i: usize) -> usize {
    (i * (360 / 180)) % 360
}

pub fn square_color(i: usize) -> String {
    format!("hsl({}, 100%, 50%)", hue(i))
}

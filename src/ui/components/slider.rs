//! Text slider track, e.g. `━━━━━━●──────`

const FILLED: char = '━';
const EMPTY: char = '─';
const KNOB: char = '●';

/// Render `value` within `min..=max` as a track `width` cells wide
pub fn track(value: u32, min: u32, max: u32, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let span = max.saturating_sub(min).max(1) as usize;
    let offset = value.clamp(min, max).saturating_sub(min) as usize;
    let knob = offset * (width - 1) / span;

    (0..width)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => FILLED,
            std::cmp::Ordering::Equal => KNOB,
            std::cmp::Ordering::Greater => EMPTY,
        })
        .collect()
}

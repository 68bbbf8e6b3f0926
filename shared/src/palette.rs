/// Fixed sector palette, cycled by index. Adjacent sectors always get
/// different colors for any wheel of up to `SEGMENT_COLORS.len()` options.
pub const SEGMENT_COLORS: [&str; 12] = [
    "#f97316", // orange
    "#06b6d4", // cyan
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#22c55e", // green
    "#eab308", // yellow
    "#3b82f6", // blue
    "#ef4444", // red
    "#14b8a6", // teal
    "#f59e0b", // amber
    "#a855f7", // purple
    "#64748b", // slate
];

/// Color for the sector at `index`. Pure and independent of the registry;
/// the wheel canvas and the option list rows both call it so their colors
/// stay in sync.
pub fn color_for_index(index: usize) -> &'static str {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_cycles() {
        assert_eq!(color_for_index(0), SEGMENT_COLORS[0]);
        assert_eq!(color_for_index(12), SEGMENT_COLORS[0]);
        assert_eq!(color_for_index(13), SEGMENT_COLORS[1]);
    }

    #[test]
    fn test_adjacent_indices_differ() {
        for i in 0..40 {
            assert_ne!(color_for_index(i), color_for_index(i + 1));
        }
    }
}

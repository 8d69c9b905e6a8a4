/// Chevauchement de deux intervalles demi-ouverts `[start, end)`.
pub(crate) fn overlaps(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}

/// Premier couloir libre à `start`, sinon `None`.
pub(super) fn first_free_lane(lane_end: &[u32], start: u32) -> Option<usize> {
    lane_end.iter().position(|&end| start >= end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_intervals_do_not_overlap() {
        assert!(!overlaps(540, 600, 600, 660));
        assert!(overlaps(540, 600, 599, 660));
    }

    #[test]
    fn picks_lowest_free_lane() {
        assert_eq!(first_free_lane(&[600, 570, 560], 565), Some(2));
        assert_eq!(first_free_lane(&[600, 570], 565), None);
        assert_eq!(first_free_lane(&[], 0), None);
    }
}

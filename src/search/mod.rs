//! Algorithms for the Maximum Weight Independent Set problem.

use std::cmp::Ordering;

/// simple path validation and exact dynamic programming on paths
pub mod path;

/// GWMIN greedy (adds high weight / low degree vertices)
pub mod gwmin;

/// GWMAX greedy (deletes low weight / high degree vertices)
pub mod gwmax;

/// lower bound on the optimal weight
pub mod alpha;


/** exact comparison of two non-negative fractions a_num/a_den and b_num/b_den (den > 0) */
pub(crate) fn cmp_ratio(a_num:u128, a_den:u128, b_num:u128, b_den:u128) -> Ordering {
    (a_num * b_den).cmp(&(b_num * a_den))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_ratio() {
        assert_eq!(cmp_ratio(1, 2, 2, 4), Ordering::Equal);
        assert_eq!(cmp_ratio(1, 3, 1, 2), Ordering::Less);
        assert_eq!(cmp_ratio(30, 4, 11, 3), Ordering::Greater);
    }
}

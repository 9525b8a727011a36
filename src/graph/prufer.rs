//! Prüfer sequence decoding
//!
//! A Prüfer code of length `n - 2` over labels `0..n` identifies exactly one
//! labelled tree on `n` nodes. See
//! <https://en.wikipedia.org/wiki/Pr%C3%BCfer_sequence>.

use rand::Rng;

/// Decode a Prüfer code into the `n - 1` edges of its tree, `n = code.len() + 2`.
///
/// Each step pairs the code value with the smallest current leaf. The leaf
/// pointer only moves forward, so decoding is linear in `n`.
///
/// Each value must be in `0..n`; out-of-range values panic.
///
/// # Examples
///
/// ```
/// use cpviz::graph::decode;
///
/// assert_eq!(decode(&[]), vec![(0, 1)]);
/// assert_eq!(decode(&[3, 3, 3, 4]), vec![(3, 0), (3, 1), (3, 2), (4, 3), (4, 5)]);
/// ```
pub fn decode(code: &[usize]) -> Vec<(usize, usize)> {
    let n = code.len() + 2;
    let mut degree = vec![1usize; n];
    for &x in code {
        degree[x] += 1;
    }

    let mut edges = Vec::with_capacity(n - 1);
    // A code of length n - 2 leaves at least two labels unused, so a leaf exists
    let mut ptr = degree.iter().position(|&d| d == 1).unwrap_or(0);
    let mut leaf = ptr;
    for &x in code {
        edges.push((x, leaf));
        degree[leaf] -= 1;
        degree[x] -= 1;
        if degree[x] == 1 && x < ptr {
            leaf = x;
        } else {
            ptr += 1;
            while degree[ptr] != 1 {
                ptr += 1;
            }
            leaf = ptr;
        }
    }

    let first = degree.iter().position(|&d| d == 1);
    let last = degree.iter().rposition(|&d| d == 1);
    if let (Some(u), Some(v)) = (first, last) {
        edges.push((u, v));
    }

    edges
}

/// Check that every value of `code` is a node label of its tree.
pub fn validate_code(code: &[usize]) -> crate::Result<()> {
    let max = code.len() + 1;
    match code.iter().enumerate().find(|&(_, &value)| value > max) {
        Some((index, &value)) => Err(crate::Error::InvalidPruferValue { index, value, max }),
        None => Ok(()),
    }
}

/// Draw a uniformly random Prüfer code for a labelled tree on `nodes` nodes.
///
/// Every labelled tree is equally likely once decoded, since codes and trees
/// are in bijection.
pub fn random_code<R: Rng + ?Sized>(nodes: usize, rng: &mut R) -> crate::Result<Vec<usize>> {
    if nodes < 2 {
        return Err(crate::Error::TooFewNodes { nodes });
    }
    Ok((0..nodes - 2).map(|_| rng.random_range(0..nodes)).collect())
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_decode_known_codes() {
        assert_eq!(decode(&[]), vec![(0, 1)]);
        assert_eq!(decode(&[0]), vec![(0, 1), (0, 2)]);
        assert_eq!(decode(&[1]), vec![(1, 0), (1, 2)]);
        assert_eq!(decode(&[2]), vec![(2, 0), (1, 2)]);
        assert_eq!(
            decode(&[3, 3, 3, 4]),
            vec![(3, 0), (3, 1), (3, 2), (4, 3), (4, 5)]
        );
    }

    #[test]
    fn test_decode_reuses_freed_smaller_leaf() {
        // Node 1 becomes a leaf below the pointer after its only occurrence
        assert_eq!(
            decode(&[4, 1, 4]),
            vec![(4, 0), (1, 2), (4, 1), (3, 4)]
        );
    }

    #[test]
    fn test_decode_long_path_is_linear_in_size() {
        // Path 0 - 1 - ... - n-1 has code [1, 2, ..., n-2]
        let n = 200_000;
        let code: Vec<usize> = (1..n - 1).collect();
        let edges = decode(&code);
        assert_eq!(edges.len(), n - 1);
        assert_eq!(edges[0], (1, 0));
        assert_eq!(edges[n - 3], (n - 2, n - 3));
        assert_eq!(edges[n - 2], (n - 2, n - 1));
    }

    #[test]
    fn test_validate_code() {
        assert!(validate_code(&[]).is_ok());
        assert!(validate_code(&[3, 3, 3, 5]).is_ok());
        assert!(matches!(
            validate_code(&[0, 4]),
            Err(crate::Error::InvalidPruferValue {
                index: 1,
                value: 4,
                max: 3
            })
        ));
    }

    #[test]
    fn test_random_code_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let code = random_code(7, &mut rng).unwrap();
        assert_eq!(code.len(), 5);
        assert!(validate_code(&code).is_ok());
        assert_eq!(random_code(2, &mut rng).unwrap(), Vec::<usize>::new());
        assert!(random_code(1, &mut rng).is_err());
    }

    #[test]
    fn test_random_code_is_reproducible() {
        let mut rng1 = StdRng::seed_from_u64(12345);
        let mut rng2 = StdRng::seed_from_u64(12345);
        assert_eq!(
            random_code(10, &mut rng1).unwrap(),
            random_code(10, &mut rng2).unwrap()
        );
    }
}

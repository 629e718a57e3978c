/*!
# Selection & Statistics Primitives

Quickselect (Floyd-Rivest variant), quantiles built on top of it, and the
small distance/zip/min-max helpers the rest of the pipeline shares.
*/

use crate::core::types::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Rounds `value` to the nearest 1e-10, used for stable edge-weight
/// comparisons.
pub fn round_1e10(value: f64) -> f64 {
    (value * 1e10).round() / 1e10
}

/// Per-axis (min, max) over `points`; panics on an empty slice (callers
/// always hold validated, non-empty input by this point).
pub fn bounds(points: &[Point]) -> ((f64, f64), (f64, f64)) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    ((min_x, max_x), (min_y, max_y))
}

/// Floyd-Rivest quickselect: partially sorts `arr` in place so that
/// `arr[k]` holds the value that would occupy index `k` in the fully
/// sorted array, with everything to its left `<=` it and everything to
/// its right `>=` it. Mutates `arr`.
pub fn quickselect(arr: &mut [f64], k: usize) {
    let n = arr.len();
    if n <= 1 {
        return;
    }
    select(arr, 0, (n - 1) as isize, k as isize);
}

/// Indices are signed internally: the Floyd-Rivest recursion and the Hoare
/// partition both produce intermediate bounds that can dip to -1 at the
/// edges of the range, which `usize` can't represent.
fn select(arr: &mut [f64], mut left: isize, mut right: isize, k: isize) {
    while right > left {
        if right - left > 600 {
            // Recurse on a sample-sized sub-range first to narrow down the
            // region containing the k-th element, reducing the expected
            // number of comparisons on the full range.
            let n = (right - left + 1) as f64;
            let i = (k - left + 1) as f64;
            let z = n.ln();
            let s = 0.5 * (2.0 * z / 3.0).exp();
            let sd = 0.5 * (z * s * (n - s) / n).sqrt() * (i - n / 2.0).signum();
            let new_left = (left as f64).max(k as f64 - i * s / n + sd).floor() as isize;
            let new_right = (right as f64).min(k as f64 + (n - i) * s / n + sd).ceil() as isize;
            select(arr, new_left.max(left), new_right.min(right), k);
        }

        let pivot = arr[k as usize];
        let mut i = left;
        let mut j = right;
        arr.swap(left as usize, k as usize);
        if arr[right as usize] > pivot {
            arr.swap(left as usize, right as usize);
        }
        while i < j {
            arr.swap(i as usize, j as usize);
            i += 1;
            j -= 1;
            while arr[i as usize] < pivot {
                i += 1;
            }
            while arr[j as usize] > pivot {
                j -= 1;
            }
        }
        if arr[left as usize] == pivot {
            arr.swap(left as usize, j as usize);
        } else {
            j += 1;
            arr.swap(j as usize, right as usize);
        }

        if j <= k {
            left = j + 1;
        }
        if k <= j {
            right = j - 1;
        }
    }
}

/// The `p`-quantile (`p` in `[0, 1]`) of `data`: `p = 0` gives the
/// minimum, `p = 1` the maximum, and an exact half-integer index on an
/// even-length array averages its two straddling elements. Does not
/// mutate `data`.
pub fn quantile(data: &[f64], p: f64) -> f64 {
    let n = data.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return data[0];
    }
    let mut work = data.to_vec();
    if p <= 0.0 {
        let min_idx = 0;
        quickselect(&mut work, min_idx);
        return work[min_idx];
    }
    if p >= 1.0 {
        let max_idx = n - 1;
        quickselect(&mut work, max_idx);
        return work[max_idx];
    }

    let idx = n as f64 * p;
    if idx.fract() == 0.0 && n % 2 == 0 {
        let lo = idx as usize - 1;
        let hi = idx as usize;
        quickselect(&mut work, lo);
        let lo_val = work[lo];
        quickselect(&mut work, hi);
        let hi_val = work[hi];
        (lo_val + hi_val) / 2.0
    } else {
        let target = (idx.ceil() as usize).saturating_sub(1).min(n - 1);
        quickselect(&mut work, target);
        work[target]
    }
}

/// Computes several quantiles of `data` in one pass, quickselecting each
/// target index against the working copy in ascending order of the index
/// so each selection narrows the remaining search range instead of
/// restarting from scratch.
pub fn quantiles(data: &[f64], ps: &[f64]) -> Vec<f64> {
    if data.is_empty() {
        return vec![0.0; ps.len()];
    }
    let mut order: Vec<usize> = (0..ps.len()).collect();
    order.sort_by(|&a, &b| ps[a].partial_cmp(&ps[b]).unwrap());

    let mut work = data.to_vec();
    let n = work.len();
    let mut out = vec![0.0; ps.len()];
    for idx in order {
        let p = ps[idx];
        out[idx] = if n == 1 {
            work[0]
        } else if p <= 0.0 {
            quickselect(&mut work, 0);
            work[0]
        } else if p >= 1.0 {
            quickselect(&mut work, n - 1);
            work[n - 1]
        } else {
            let fidx = n as f64 * p;
            if fidx.fract() == 0.0 && n % 2 == 0 {
                let lo = fidx as usize - 1;
                let hi = fidx as usize;
                quickselect(&mut work, lo);
                let lo_val = work[lo];
                quickselect(&mut work, hi);
                let hi_val = work[hi];
                (lo_val + hi_val) / 2.0
            } else {
                let target = (fidx.ceil() as usize).saturating_sub(1).min(n - 1);
                quickselect(&mut work, target);
                work[target]
            }
        };
    }
    out
}

//! Tour construction and local search.
//!
//! Greedy nearest-neighbor builds the initial visiting order; 2-opt segment
//! reversal improves it until no single swap shortens the route. Heuristic
//! only: the result is a local optimum, not a guaranteed shortest tour.

/// Total length of a route as an open path (no closing edge back to start).
pub fn route_cost(route: &[usize], matrix: &[Vec<f64>]) -> f64 {
    route
        .windows(2)
        .map(|pair| matrix[pair[0]][pair[1]])
        .sum()
}

/// Greedy nearest-neighbor tour over the distance matrix.
///
/// Starts at `start` and repeatedly appends the closest unvisited node.
/// Ties break toward the lowest index. Returns a permutation of `0..N`.
pub fn nearest_neighbor_tour(matrix: &[Vec<f64>], start: usize) -> Vec<usize> {
    let n = matrix.len();
    let mut visited = vec![false; n];
    visited[start] = true;

    let mut order = Vec::with_capacity(n);
    order.push(start);

    while order.len() < n {
        let last = order[order.len() - 1];

        let mut nearest: Option<(f64, usize)> = None;
        for (j, seen) in visited.iter().enumerate() {
            if *seen {
                continue;
            }
            let dist = matrix[last][j];
            // Strict < keeps the first (lowest-index) candidate on ties.
            if nearest.map_or(true, |(best_dist, _)| dist < best_dist) {
                nearest = Some((dist, j));
            }
        }

        // The unvisited set is non-empty whenever the loop runs.
        if let Some((_, next)) = nearest {
            visited[next] = true;
            order.push(next);
        }
    }

    order
}

/// 2-opt improvement loop.
///
/// Repeatedly scans all segment reversals `route[i..k]` with `i` in
/// `1..N-2` and `k` in `i+1..N`, adopting any candidate with strictly lower
/// cost, until a full pass finds no improving move. For N <= 3 the scan
/// window is empty and the input is returned unchanged.
pub fn two_opt(initial: Vec<usize>, matrix: &[Vec<f64>]) -> Vec<usize> {
    let n = initial.len();
    if n < 4 {
        return initial;
    }

    let mut best = initial;
    let mut best_cost = route_cost(&best, matrix);

    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 2 {
            for k in i + 1..n {
                let mut candidate = best.clone();
                candidate[i..k].reverse();
                let candidate_cost = route_cost(&candidate, matrix);
                if candidate_cost < best_cost {
                    best = candidate;
                    best_cost = candidate_cost;
                    improved = true;
                }
            }
        }
    }

    best
}

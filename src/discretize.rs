/// Finds Fayyad & Irani MDL cut points for one attribute. `pairs` holds `(value, class)` for
/// every training row where both are present; it is sorted in place.
/// The returned cut points are ascending.
pub fn cut_points(pairs: &mut [(f64, usize)], num_classes: usize) -> Vec<f64> {
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut cuts = Vec::new();
    split(pairs, num_classes, &mut cuts);
    cuts
}

/// Index of the interval `value` falls into: values equal to a cut point
/// belong to the interval below it.
pub fn interval(cuts: &[f64], value: f64) -> usize {
    cuts.partition_point(|&cut| cut < value)
}

struct Split {
    index: usize,
    cut: f64,
    entropy: f64,
    left: Vec<f64>,
    right: Vec<f64>,
}

fn split(pairs: &[(f64, usize)], num_classes: usize, cuts: &mut Vec<f64>) {
    if pairs.len() < 2 {
        return;
    }

    let prior = class_counts(pairs, num_classes);
    let prior_entropy = entropy(&prior);

    let mut left = vec![0.0; num_classes];
    let mut right = prior.clone();
    let mut best: Option<Split> = None;
    let mut best_entropy = prior_entropy;

    for (i, window) in pairs.windows(2).enumerate() {
        let (value, class) = window[0];
        let next = window[1].0;
        left[class] += 1.0;
        right[class] -= 1.0;

        if value < next {
            let current = conditional_entropy(&left, &right);
            if current < best_entropy {
                best_entropy = current;
                best = Some(Split {
                    index: i,
                    cut: (value + next) / 2.0,
                    entropy: current,
                    left: left.clone(),
                    right: right.clone(),
                });
            }
        }
    }

    let Some(best) = best else {
        return;
    };
    if prior_entropy - best.entropy <= 0.0 {
        return;
    }
    let num_cut_points = pairs.len() - 1;
    if !mdl_accepts(&prior, &best, pairs.len(), num_cut_points) {
        return;
    }

    split(&pairs[..=best.index], num_classes, cuts);
    cuts.push(best.cut);
    split(&pairs[best.index + 1..], num_classes, cuts);
}

fn mdl_accepts(prior: &[f64], best: &Split, num_instances: usize, num_cut_points: usize) -> bool {
    let classes = |counts: &[f64]| counts.iter().filter(|&&c| c > 0.0).count() as f64;
    let k = classes(prior);
    let k_left = classes(&best.left);
    let k_right = classes(&best.right);

    let prior_entropy = entropy(prior);
    let gain = prior_entropy - best.entropy;

    let delta = (3f64.powf(k) - 2.0).log2()
        - (k * prior_entropy - k_left * entropy(&best.left) - k_right * entropy(&best.right));

    gain > ((num_cut_points as f64).log2() + delta) / num_instances as f64
}

fn class_counts(pairs: &[(f64, usize)], num_classes: usize) -> Vec<f64> {
    let mut counts = vec![0.0; num_classes];
    for &(_, class) in pairs {
        counts[class] += 1.0;
    }
    counts
}

/// Entropy in bits of a class count vector.
fn entropy(counts: &[f64]) -> f64 {
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    counts
        .iter()
        .filter(|&&c| c > 0.0)
        .map(|&c| {
            let p = c / total;
            -p * p.log2()
        })
        .sum()
}

fn conditional_entropy(left: &[f64], right: &[f64]) -> f64 {
    let n_left: f64 = left.iter().sum();
    let n_right: f64 = right.iter().sum();
    let total = n_left + n_right;
    if total <= 0.0 {
        return 0.0;
    }
    (n_left * entropy(left) + n_right * entropy(right)) / total
}

use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

/// Permutes `items` in place so that every ordering is equally likely.
/// Walks from the last index down to 1, swapping each element with one chosen uniformly from those at or below it.
pub fn fisher_yates_shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
	for i in (1..items.len()).rev() {
		let j = rng.random_range(0..=i);
		items.swap(i, j);
	}
}

/// Buckets `nodes` by their parent, listing parents in the order they were first seen.
/// Nodes without a parent are left out.
pub fn group_by_parent<N: Clone + Eq + Hash>(nodes: &[N], parent_of: impl Fn(&N) -> Option<N>) -> Vec<(N, Vec<N>)> {
	let mut groups: Vec<(N, Vec<N>)> = Vec::new();
	let mut group_index: HashMap<N, usize> = HashMap::new();

	for node in nodes {
		let Some(parent) = parent_of(node) else { continue };
		match group_index.get(&parent) {
			Some(&index) => groups[index].1.push(node.clone()),
			None => {
				group_index.insert(parent.clone(), groups.len());
				groups.push((parent, vec![node.clone()]));
			}
		}
	}

	groups
}

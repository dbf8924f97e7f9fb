use super::*;

fn collect(pool: &BacktracePool<u32>, head: Option<CellId>) -> Vec<u32> {
	pool.chain(head).copied().collect()
}

#[test]
fn test_chain_reads_newest_first() {
	let mut pool = BacktracePool::new();
	let a = pool.push(1, None);
	let b = pool.push(2, Some(a));
	let c = pool.push(3, Some(b));
	assert_eq!(collect(&pool, Some(c)), vec![3, 2, 1]);
	assert_eq!(collect(&pool, None), Vec::<u32>::new());
}

#[test]
fn test_release_frees_unshared_chain() {
	let mut pool = BacktracePool::new();
	let a = pool.push(1, None);
	let b = pool.push(2, Some(a));
	// The chain now owns `a`; drop the caller's handle on it.
	pool.release(Some(a));
	assert_eq!(pool.live(), 2);

	pool.release(Some(b));
	assert_eq!(pool.live(), 0);
}

#[test]
fn test_shared_suffix_survives_one_branch() {
	let mut pool = BacktracePool::new();
	let root = pool.push(0, None);
	let left = pool.push(1, Some(root));
	let right = pool.push(2, Some(root));
	pool.release(Some(root));

	pool.release(Some(left));
	assert_eq!(pool.live(), 2);
	assert_eq!(collect(&pool, Some(right)), vec![2, 0]);

	pool.release(Some(right));
	assert_eq!(pool.live(), 0);
}

#[test]
fn test_retain_keeps_cell_alive() {
	let mut pool = BacktracePool::new();
	let a = pool.push(7, None);
	let shared = pool.retain(Some(a));
	assert_eq!(shared, Some(a));

	pool.release(Some(a));
	assert_eq!(pool.live(), 1);
	pool.release(shared);
	assert_eq!(pool.live(), 0);
}

#[test]
fn test_released_slots_are_reused() {
	let mut pool = BacktracePool::new();
	let a = pool.acquire(1);
	pool.release(Some(a));
	let b = pool.acquire(2);
	assert_eq!(a, b);
	assert_eq!(pool.peak(), 1);
	assert_eq!(collect(&pool, Some(b)), vec![2]);
}

#[test]
fn test_long_chain_release_is_iterative() {
	let mut pool = BacktracePool::with_capacity(16);
	let mut head = None;
	for i in 0..200_000 {
		let cell = pool.push(i, head);
		pool.release(head);
		head = Some(cell);
	}
	assert_eq!(pool.live(), 200_000);
	pool.release(head);
	assert_eq!(pool.live(), 0);
	assert_eq!(pool.peak(), 200_000);
}

#[test]
fn test_clear_resets_accounting() {
	let mut pool = BacktracePool::new();
	pool.acquire(1);
	pool.acquire(2);
	assert_eq!(pool.peak(), 2);
	pool.clear();
	assert_eq!(pool.live(), 0);
	assert_eq!(pool.peak(), 0);
}

#[test]
#[should_panic(expected = "already linked")]
fn test_relinking_panics() {
	let mut pool = BacktracePool::new();
	let a = pool.acquire(1);
	let b = pool.acquire(2);
	pool.link(b, Some(a));
	pool.link(b, None);
}

use guided_paths::queue::{indexed_queue::IndexedQueue, TieBreak};

#[test]
fn pops_in_ascending_priority_order() {
    let mut queue = IndexedQueue::new(TieBreak::LeastRecentFirst);
    queue.push(7.0, "g");
    queue.push(1.5, "b");
    queue.push(4.0, "e");
    queue.push(0.5, "a");
    queue.push(2.0, "c");

    let mut popped = Vec::new();
    while let Some((priority, key)) = queue.pop() {
        popped.push((priority, key));
    }

    assert_eq!(
        popped,
        vec![(0.5, "a"), (1.5, "b"), (2.0, "c"), (4.0, "e"), (7.0, "g")]
    );
}

#[test]
fn most_recent_first_treats_ties_as_a_stack() {
    let mut queue = IndexedQueue::new(TieBreak::MostRecentFirst);
    queue.push(15.0, 'a');
    queue.push(15.0, 'b');
    queue.push(15.0, 'c');
    queue.push(14.0, 'd');
    queue.push(16.0, 'e');

    let popped: Vec<char> = std::iter::from_fn(|| queue.pop().map(|(_, key)| key)).collect();
    assert_eq!(popped, vec!['d', 'c', 'b', 'a', 'e']);
}

#[test]
fn least_recent_first_treats_ties_as_a_queue() {
    let mut queue = IndexedQueue::new(TieBreak::LeastRecentFirst);
    queue.push(15.0, 'a');
    queue.push(15.0, 'b');
    queue.push(15.0, 'c');
    queue.push(14.0, 'd');
    queue.push(16.0, 'e');

    let popped: Vec<char> = std::iter::from_fn(|| queue.pop().map(|(_, key)| key)).collect();
    assert_eq!(popped, vec!['d', 'a', 'b', 'c', 'e']);
}

#[test]
fn push_overwrites_and_deduplicates() {
    let mut queue = IndexedQueue::new(TieBreak::MostRecentFirst);
    queue.push(15.0, 'a');
    queue.push(15.0, 'b');
    queue.push(15.0, 'c');
    queue.push(14.0, 'd');
    queue.push(16.0, 'e');
    queue.push(200.0, 'a');

    // 'a' still has exactly one live entry, now at priority 200.
    assert_eq!(queue.len(), 5);
    assert!(queue.contains(&'a'));

    let popped: Vec<char> = std::iter::from_fn(|| queue.pop().map(|(_, key)| key)).collect();
    assert_eq!(popped, vec!['d', 'c', 'b', 'e', 'a']);
}

#[test]
fn membership_follows_push_and_pop() {
    let mut queue = IndexedQueue::new(TieBreak::LeastRecentFirst);

    assert!(!queue.contains(&"a"));
    assert!(queue.is_empty());

    queue.push(1.0, "a");
    assert!(queue.contains(&"a"));
    assert_eq!(queue.len(), 1);

    assert_eq!(queue.pop(), Some((1.0, "a")));
    assert!(!queue.contains(&"a"));
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
}

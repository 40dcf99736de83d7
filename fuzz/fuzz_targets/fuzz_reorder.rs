#![no_main]

use libfuzzer_sys::fuzz_target;
use tinct_core::{DragSession, ReorderOutcome, reorder_in_place};

fuzz_target!(|data: &[u8]| {
    // First byte picks the list length (1..=32); the rest drive a drag session.
    let Some((&len, script)) = data.split_first() else {
        return;
    };
    let len = usize::from(len % 32) + 1;
    let original: Vec<String> = (0..len).map(|i| format!("item-{i}")).collect();
    let mut items = original.clone();
    let mut session = DragSession::new();

    for pair in script.chunks(2).take(1024) {
        let &[action, arg] = pair else {
            break;
        };
        // Indices past the end name identities that are not in the list.
        let name = format!("item-{}", usize::from(arg) % (len + 2));
        match action % 5 {
            0 => {
                session.begin(name);
            }
            1 => session.hover(name),
            2 => session.leave(),
            3 => session.cancel(),
            _ => {
                let before = items.clone();
                match session.finish(&mut items, |s: &String| s.as_str()) {
                    Some(ReorderOutcome::Moved { to, .. }) => {
                        assert_ne!(items, before);
                        assert!(to < items.len());
                    }
                    Some(_) | None => assert_eq!(items, before),
                }
                assert!(!session.is_dragging());
            }
        }
        if let (Some(source), Some(target)) = (session.source(), session.target()) {
            assert_ne!(source, target);
        }
    }

    // Always a permutation of the original list.
    let mut sorted = items.clone();
    sorted.sort();
    let mut expected = original;
    expected.sort();
    assert_eq!(sorted, expected);

    let mut scratch = items.clone();
    let first = scratch[0].clone();
    assert_eq!(
        reorder_in_place(&mut scratch, &first, &first, |s: &String| s.as_str()),
        ReorderOutcome::SelfTarget
    );
    assert_eq!(scratch, items);
});

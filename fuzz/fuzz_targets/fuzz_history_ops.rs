#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tinct_runtime::undo::{HistoryConfig, HistoryManager};

#[derive(Debug, Arbitrary)]
enum Op {
    Push(u16),
    Undo,
    Redo,
    Reset(u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    max_depth: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let max_depth = usize::from(input.max_depth);
    let mut history = HistoryManager::with_config(0u16, HistoryConfig::new(max_depth));

    for op in input.ops.iter().take(4096) {
        match *op {
            Op::Push(v) => {
                history.push(v);
                assert_eq!(*history.current(), v);
                assert!(!history.can_redo());
            }
            Op::Undo => {
                let before = history.current_index();
                let moved = history.undo().is_some();
                assert_eq!(moved, before > 0);
            }
            Op::Redo => {
                let could = history.can_redo();
                assert_eq!(history.redo().is_some(), could);
            }
            Op::Reset(v) => {
                history.reset(v);
                assert_eq!(history.len(), 1);
            }
        }

        // Post-conditions that must always hold:
        assert!(history.len() >= 1);
        assert!(history.len() <= max_depth.max(1));
        assert!(history.current_index() < history.len());
        assert_eq!(history.can_undo(), history.current_index() > 0);
        assert_eq!(history.get(history.current_index()), Some(history.current()));
    }
});

// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Synthetic line ordering across many injections.

use proptest::prelude::*;
use story_ast::{LineId, Token, Tree};
use story_desugar::Synthesizer;

fn block(line: u32, nested: bool) -> Tree {
    let statement = Tree::new("line", vec![Token::new("NAME", "x", line, 1, 2).into()]);
    let mut children = vec![statement.into()];
    if nested {
        let nested_line = Tree::new("line", vec![Token::new("NAME", "y", line + 1, 5, 6).into()]);
        let inner = Tree::new("block", vec![nested_line.into()]);
        children.push(Tree::new("nested_block", vec![inner.into()]).into());
    }
    Tree::new("block", children)
}

fn value(line: u32) -> Tree {
    Tree::new("entity", vec![Token::new("INT", "1", line, 5, 6).into()])
}

#[test]
fn two_injections_mint_dot_one_and_dot_two() {
    let mut b = block(12, false);
    let mut synth = Synthesizer::new(&mut b).unwrap();
    let first = synth.inject_assignment(value(12)).unwrap().line().unwrap().clone();
    let second = synth.inject_assignment(value(12)).unwrap().line().unwrap().clone();
    assert_eq!(first.to_string(), "12.1");
    assert_eq!(second.to_string(), "12.2");
}

#[test]
fn tenth_line_sorts_after_ninth() {
    let mut b = block(12, false);
    let mut synth = Synthesizer::new(&mut b).unwrap();
    let lines: Vec<LineId> = (0..12).map(|_| synth.fresh_line()).collect();
    assert_eq!(lines[9].to_string(), "12.10");
    assert!(lines[8] < lines[9]);
    assert!(lines[1] < lines[9]);
}

proptest! {
    #[test]
    fn minted_lines_strictly_increase(base in 1u32..10_000, count in 1usize..40) {
        let mut b = block(base, false);
        let mut synth = Synthesizer::new(&mut b).unwrap();
        let lines: Vec<LineId> = (0..count).map(|_| synth.fresh_line()).collect();
        for pair in lines.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        prop_assert!(lines.iter().all(|l| l.parent() == LineId::new(base)));
        prop_assert!(lines.iter().all(|l| *l > LineId::new(base) && *l < LineId::new(base + 1)));
    }

    #[test]
    fn injection_grows_block_by_one(base in 1u32..1000, nested in any::<bool>(), count in 1usize..6) {
        let mut b = block(base, nested);
        let before = b.children.len();
        {
            let mut synth = Synthesizer::new(&mut b).unwrap();
            for _ in 0..count {
                synth.inject_assignment(value(base)).unwrap();
            }
        }
        prop_assert_eq!(b.children.len(), before + count);
        let last = b.children.last().unwrap().as_tree().unwrap();
        prop_assert_eq!(last.data.as_str(), if nested { "nested_block" } else { "line" });
        if nested {
            prop_assert_eq!(b.children[0].as_tree().unwrap().data.as_str(), "line");
        }
    }
}

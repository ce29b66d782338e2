use proptest::prelude::*;

use unimark::editor::Command;
use unimark::transform::offsets::utf16_len;
use unimark::transform::{
    BlockKind, Edit, IndentDirection, Marker, Selection, apply_block_prefix, apply_code,
    reindent, toggle_inline,
};

const ALL_COMMANDS: [Command; 9] = [
    Command::Bold,
    Command::Italic,
    Command::Code,
    Command::Link,
    Command::List,
    Command::OrderedList,
    Command::Quote,
    Command::Indent,
    Command::Outdent,
];

fn marker() -> impl Strategy<Value = Marker> {
    prop_oneof![Just(Marker::Bold), Just(Marker::Italic), Just(Marker::Code)]
}

fn block_kind() -> impl Strategy<Value = BlockKind> {
    prop_oneof![
        Just(BlockKind::List),
        Just(BlockKind::OrderedList),
        Just(BlockKind::Quote)
    ]
}

fn assert_valid(edit: &Edit) {
    let Selection { start, end } = edit.selection;
    assert!(start <= end, "start {start} after end {end}");
    assert!(
        end <= utf16_len(&edit.text),
        "end {end} past text of {} units",
        utf16_len(&edit.text)
    );
}

proptest! {
    #[test]
    fn every_command_returns_a_valid_selection(
        text in "[a-z *`>\\-0-9.\\n 字かＡ😀]{0,30}",
        start in 0usize..40,
        end in 0usize..40,
        width in 0usize..6,
    ) {
        for command in ALL_COMMANDS {
            let edit = command.run(&text, Selection::new(start, end), width);
            assert_valid(&edit);
        }
    }

    #[test]
    fn toggling_twice_restores_plain_text(
        text in "(bold text|italic text|code|[a-z \\n]){0,12}",
        start in 0usize..60,
        end in 0usize..60,
        marker in marker(),
    ) {
        let selection = Selection::new(start, end).clamped(&text);
        // An empty selection gains a placeholder, which stays on unwrap.
        prop_assume!(!selection.is_empty());
        let first = toggle_inline(&text, selection, marker);
        let second = toggle_inline(&first.text, first.selection, marker);
        prop_assert_eq!(second.text, text);
        prop_assert_eq!(second.selection, selection);
    }

    #[test]
    fn block_prefix_is_idempotent(
        text in "[a-z \\n]{0,30}",
        start in 0usize..35,
        end in 0usize..35,
        kind in block_kind(),
    ) {
        let first = apply_block_prefix(&text, Selection::new(start, end), kind);
        let second = apply_block_prefix(&first.text, first.selection, kind);
        prop_assert_eq!(&second.text, &first.text);
        prop_assert_eq!(second.selection, first.selection);
    }

    #[test]
    fn indent_then_outdent_round_trips(
        text in "[a-z\\n]{0,30}",
        start in 0usize..35,
        end in 0usize..35,
    ) {
        let selection = Selection::new(start, end).clamped(&text);
        let indented = reindent(&text, selection, IndentDirection::Indent);
        let restored = reindent(&indented.text, indented.selection, IndentDirection::Outdent);
        prop_assert_eq!(restored.text, text);
        prop_assert_eq!(restored.selection, selection);
    }

    #[test]
    fn fenced_code_keeps_selected_text_selected(
        text in "[a-z\\n]{1,30}",
        start in 0usize..35,
        end in 0usize..35,
    ) {
        let selection = Selection::new(start, end).clamped(&text);
        let selected = &text[selection.start..selection.end];
        prop_assume!(selected.contains('\n'));

        let edit = apply_code(&text, selection);
        prop_assert_eq!(&edit.text[edit.selection.start..edit.selection.end], selected);
        prop_assert!(edit.text.contains("```\n"));
        prop_assert!(edit.text.contains("\n```"));
        let lead = usize::from(text[..selection.start].contains('\n'));
        let trail = usize::from(text[selection.end..].contains('\n'));
        prop_assert_eq!(edit.text.len(), text.len() + 8 + lead + trail);
    }
}

#[test]
fn cjk_bold_inserts_spaces_on_both_sides() {
    let edit = toggle_inline("これは太字です", Selection::new(3, 5), Marker::Bold);
    assert_eq!(edit.text, "これは **太字** です");
}

#[test]
fn ordered_list_rerun_is_stable() {
    let first = apply_block_prefix("a\nb\nc", Selection::new(0, 5), BlockKind::OrderedList);
    assert_eq!(first.text, "1. a\n2. b\n3. c");
    let second = apply_block_prefix(&first.text, first.selection, BlockKind::OrderedList);
    assert_eq!(second.text, first.text);
}

use super::*;
use crate::document::{self, Mapping, Node};

fn lines_of(node: impl Into<Node>) -> Vec<String> {
    render_lines(&node.into())
}

fn sample_project() -> Mapping {
    Mapping::new()
        .with_files(["Cargo.toml", "README.md"])
        .with_entry(
            "src",
            Mapping::new()
                .with_file_entry("main.rs")
                .with_file_entry("lib.rs")
                .with_entry("tree", Mapping::new().with_file_entry("mod.rs")),
        )
        .with_entry("assets", Node::files(["logo.png", "icon.svg"]))
        .with_file_entry("LICENSE")
        .with_file_entry(".gitignore")
}

#[test]
fn nested_listed_files_and_null_files() {
    let doc = Mapping::new().with_entry(
        "src",
        Mapping::new()
            .with_files(["main.go"])
            .with_file_entry("utils"),
    );

    assert_eq!(lines_of(doc), ["└─src/", "   └─ main.go", "   └─utils"]);
}

#[test]
fn empty_mapping_has_no_lines() {
    assert!(lines_of(Mapping::new()).is_empty());
}

#[test]
fn scalar_and_null_roots_have_no_lines() {
    assert!(lines_of(Node::leaf("lonely.txt")).is_empty());
    assert!(lines_of(Node::Null).is_empty());
}

#[test]
fn pure_sequence_keeps_input_order() {
    assert_eq!(lines_of(Node::files(["b.txt", "a.txt"])), ["├─ b.txt", "└─ a.txt"]);
}

#[test]
fn listed_files_render_before_sorted_groups() {
    let doc = Mapping::new()
        .with_files(["z.txt", "a.txt"])
        .with_entry("lib", Mapping::new())
        .with_file_entry("main.rs");

    assert_eq!(lines_of(doc), ["├─ z.txt", "└─ a.txt", "├─lib/", "└─main.rs"]);
}

#[test]
fn folders_before_files_and_never_last_when_files_follow() {
    let doc = Mapping::new()
        .with_file_entry("README.md")
        .with_entry("src", Mapping::new())
        .with_file_entry("LICENSE")
        .with_entry("docs", Mapping::new());

    assert_eq!(lines_of(doc), ["├─docs/", "├─src/", "├─LICENSE", "└─README.md"]);
}

#[test]
fn names_sort_byte_wise() {
    let doc = Mapping::new()
        .with_file_entry("beta")
        .with_file_entry("alpha")
        .with_file_entry("Zeta");

    assert_eq!(lines_of(doc), ["├─Zeta", "├─alpha", "└─beta"]);
}

#[test]
fn continuation_prefix_follows_non_last_folders() {
    let doc = Mapping::new()
        .with_entry(
            "a",
            Mapping::new().with_entry("b", Mapping::new().with_file_entry("x")),
        )
        .with_entry("c", Mapping::new().with_file_entry("y"));

    assert_eq!(
        lines_of(doc),
        ["├─a/", "│  └─b/", "│     └─x", "└─c/", "   └─y"]
    );
}

#[test]
fn scalar_valued_key_is_a_folder_without_children() {
    let doc = Mapping::new().with_entry("notes", Node::leaf("ignored"));
    assert_eq!(lines_of(doc), ["└─notes/"]);
}

#[test]
fn sequence_skips_non_leaf_items_when_choosing_last() {
    let doc = Node::Sequence(vec![
        Node::leaf("a.txt"),
        Node::leaf("b.txt"),
        Node::Mapping(Mapping::new()),
    ]);
    assert_eq!(lines_of(doc), ["├─ a.txt", "└─ b.txt"]);
}

#[test]
fn folders_precede_null_files_at_every_level() {
    let lines = flatten(&Node::Mapping(sample_project()));

    let mut groups: Vec<Vec<&TreeLine>> = Vec::new();
    for line in &lines {
        match groups.last_mut() {
            Some(group) if group[0].prefix == line.prefix => group.push(line),
            _ => groups.push(vec![line]),
        }
    }

    for group in groups {
        let first_file = group
            .iter()
            .position(|line| matches!(line.kind, LineKind::File(_)));
        if let Some(first_file) = first_file {
            assert!(
                group[first_file..]
                    .iter()
                    .all(|line| matches!(line.kind, LineKind::File(_))),
                "folder or listed file after a null-valued file"
            );
        }
    }
}

#[test]
fn each_sorted_group_ends_with_single_terminal_glyph() {
    let lines = flatten(&Node::Mapping(sample_project()));
    let root: Vec<&TreeLine> = lines.iter().filter(|line| line.prefix.is_empty()).collect();

    let listed: Vec<&&TreeLine> = root
        .iter()
        .filter(|line| matches!(line.kind, LineKind::Listed(_)))
        .collect();
    let named: Vec<&&TreeLine> = root
        .iter()
        .filter(|line| !matches!(line.kind, LineKind::Listed(_)))
        .collect();

    for group in [listed, named] {
        let terminal: Vec<usize> = group
            .iter()
            .enumerate()
            .filter(|(_, line)| line.glyph.is_last())
            .map(|(index, _)| index)
            .collect();
        assert_eq!(terminal, [group.len() - 1]);
    }
}

#[test]
fn child_prefix_extends_parent_by_three_columns() {
    let lines = flatten(&Node::Mapping(sample_project()));

    for pair in lines.windows(2) {
        let (parent, child) = (&pair[0], &pair[1]);
        if matches!(parent.kind, LineKind::Directory(_)) && child.depth() > parent.depth() {
            assert!(child.prefix.starts_with(&parent.prefix));
            assert_eq!(
                child.prefix.chars().count(),
                parent.prefix.chars().count() + 3
            );
            let extension = &child.prefix[parent.prefix.len()..];
            assert_eq!(extension, next_prefix(parent.glyph.is_last()));
        }
    }
}

#[test]
fn flattening_is_deterministic() {
    let source = "zeta:\n  b: ~\n  a: ~\nalpha:\n  __files__: [x, y]\nreadme: ~\n";
    let first = render_lines(&document::from_str(source).expect("decodes"));
    let second = render_lines(&document::from_str(source).expect("decodes"));
    assert_eq!(first, second);
    assert_eq!(
        first,
        [
            "├─alpha/",
            "│  ├─ x",
            "│  └─ y",
            "├─zeta/",
            "│  ├─a",
            "│  └─b",
            "└─readme",
        ]
    );
}

#[test]
fn glyph_helpers_match_constants() {
    assert_eq!(branch(true), "└─");
    assert_eq!(branch(false), "├─");
    assert_eq!(next_prefix(true), "   ");
    assert_eq!(next_prefix(false), "│  ");
}

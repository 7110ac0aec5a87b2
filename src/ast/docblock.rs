//! Docblock (`/** ... */`) extraction.

use super::NodePath;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn docblock_header() -> &'static Regex {
    static HEADER: OnceLock<Regex> = OnceLock::new();
    HEADER.get_or_init(|| Regex::new(r"^/\*\*\s").expect("static regex"))
}

fn line_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"^\s*\*\s?").expect("static regex"))
}

fn doclet() -> &'static Regex {
    static DOCLET: OnceLock<Regex> = OnceLock::new();
    DOCLET.get_or_init(|| Regex::new(r"(?m)^@(\w+)(?:[ \t]+(.*))?$").expect("static regex"))
}

/// Strip the comment delimiters and per-line `*` gutter.
pub fn parse_docblock(comment: &str) -> String {
    let body = comment
        .strip_prefix("/*")
        .unwrap_or(comment)
        .strip_suffix("*/")
        .unwrap_or(comment);
    body.lines()
        .map(|line| line_prefix().replace(line, "").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Node whose leading comments document `path`: declarations wrapped in
/// `export` or a variable statement carry their comment on the wrapper.
fn comment_anchor<'a>(path: &NodePath<'a>) -> NodePath<'a> {
    let mut anchor = *path;
    while let Some(parent) = anchor.parent() {
        let wraps = match parent.kind() {
            "export_statement" | "lexical_declaration" | "variable_declaration" => true,
            "variable_declarator" => anchor.is_field_of_parent("value"),
            _ => false,
        };
        if !wraps {
            break;
        }
        anchor = parent;
    }
    anchor
}

/// The docblock immediately preceding `path`, or following it when
/// `trailing` is set (used for members documented after the fact).
pub fn get_docblock(path: &NodePath, trailing: bool) -> Option<String> {
    let anchor = if trailing { *path } else { comment_anchor(path) };
    let mut comments = Vec::new();
    let mut sibling = if trailing {
        anchor.node().next_sibling()
    } else {
        anchor.node().prev_sibling()
    };

    while let Some(node) = sibling {
        if node.kind() != "comment" {
            // `,` and `;` separate members from their trailing comments.
            if trailing && matches!(node.kind(), "," | ";") {
                sibling = node.next_sibling();
                continue;
            }
            break;
        }
        if trailing && node.start_position().row != anchor.node().end_position().row {
            break;
        }
        let text = path.with(node).text();
        if docblock_header().is_match(text) {
            comments.push(text);
        }
        if trailing {
            // only comments on the same line count as trailing
            break;
        }
        sibling = node.prev_sibling();
    }

    // Leading comments were gathered nearest-first; the closest one wins.
    comments.first().map(|text| parse_docblock(text))
}

/// `@tag value` pairs from a parsed docblock. Later occurrences of a tag
/// are appended on a new line.
pub fn get_doclets(docblock: &str) -> BTreeMap<String, String> {
    let mut doclets: BTreeMap<String, String> = BTreeMap::new();
    for caps in doclet().captures_iter(docblock) {
        let tag = caps[1].to_string();
        let value = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
        doclets
            .entry(tag)
            .and_modify(|existing| {
                existing.push('\n');
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    doclets
}

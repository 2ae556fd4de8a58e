//! Element tables behind implicit-close behavior.
//!
//! These are the optional-tag rules from the HTML5 algorithm, reduced to
//! three lookups over canonical-lowercase names: elements that never take
//! content, elements a parent's end tag closes, and for each element the
//! set of sibling openers that close it.

/// Elements with no content and no end tag.
pub(crate) fn is_void(name: &str) -> bool {
    matches!(
        name,
        "area"
            | "base"
            | "br"
            | "col"
            | "command"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Elements whose open frame is closed by their parent's end tag.
pub(crate) fn closed_by_parent(name: &str) -> bool {
    matches!(
        name,
        "p" | "li"
            | "dd"
            | "rb"
            | "rt"
            | "rtc"
            | "rp"
            | "optgroup"
            | "option"
            | "tbody"
            | "tfoot"
            | "tr"
            | "td"
            | "th"
    )
}

/// Whether an `incoming` opener implicitly closes an `open` element on
/// top of the stack.
pub(crate) fn closed_by_sibling(open: &str, incoming: &str) -> bool {
    match open {
        "p" => matches!(
            incoming,
            "address"
                | "article"
                | "aside"
                | "blockquote"
                | "div"
                | "dl"
                | "fieldset"
                | "footer"
                | "form"
                | "h1"
                | "h2"
                | "h3"
                | "h4"
                | "h5"
                | "h6"
                | "header"
                | "hgroup"
                | "hr"
                | "main"
                | "nav"
                | "ol"
                | "p"
                | "pre"
                | "section"
                | "table"
                | "ul"
        ),
        "li" => incoming == "li",
        "dt" | "dd" => matches!(incoming, "dt" | "dd"),
        "rb" | "rt" | "rp" => matches!(incoming, "rb" | "rt" | "rtc" | "rp"),
        "rtc" => matches!(incoming, "rb" | "rtc" | "rp"),
        "optgroup" => incoming == "optgroup",
        "option" => matches!(incoming, "option" | "optgroup"),
        "thead" | "tbody" => matches!(incoming, "tbody" | "tfoot"),
        "tfoot" => incoming == "tbody",
        "tr" => incoming == "tr",
        "td" | "th" => matches!(incoming, "td" | "th"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn void_set_matches_html5() {
        for name in ["br", "img", "input", "meta", "wbr", "command", "keygen"] {
            assert!(is_void(name), "{name} should be void");
        }
        for name in ["div", "p", "script", "a", ""] {
            assert!(!is_void(name), "{name} should not be void");
        }
    }

    #[test]
    fn paragraph_closes_before_block_openers_only() {
        for incoming in ["div", "p", "ul", "table", "h1", "pre", "hr"] {
            assert!(closed_by_sibling("p", incoming), "p should yield to {incoming}");
        }
        for incoming in ["span", "a", "em", "li", "td"] {
            assert!(
                !closed_by_sibling("p", incoming),
                "p should not yield to {incoming}"
            );
        }
    }

    #[test]
    fn ruby_rows_differ_for_rtc() {
        assert!(closed_by_sibling("rb", "rt"));
        assert!(closed_by_sibling("rt", "rtc"));
        assert!(closed_by_sibling("rp", "rb"));
        assert!(closed_by_sibling("rtc", "rp"));
        // rtc is not closed by rt.
        assert!(!closed_by_sibling("rtc", "rt"));
    }

    #[test]
    fn table_section_rows_are_asymmetric() {
        assert!(closed_by_sibling("thead", "tbody"));
        assert!(closed_by_sibling("tbody", "tfoot"));
        assert!(closed_by_sibling("tfoot", "tbody"));
        assert!(!closed_by_sibling("tfoot", "tfoot"));
        assert!(!closed_by_sibling("thead", "thead"));
    }

    #[test]
    fn parent_close_list_is_exact() {
        for name in ["p", "li", "dd", "option", "tr", "td", "th", "rtc"] {
            assert!(closed_by_parent(name), "{name} should close with parent");
        }
        for name in ["dt", "thead", "div", "span", "table"] {
            assert!(
                !closed_by_parent(name),
                "{name} should not close with parent"
            );
        }
    }
}

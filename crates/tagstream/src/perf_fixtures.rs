//! Input generators shared by benches and scaling tests.

/// Repeated small element blocks with attributes, text, and a void tag.
pub fn make_blocks(blocks: usize) -> String {
    let mut out = String::with_capacity(blocks * 52);
    for _ in 0..blocks {
        out.push_str("<div class=box><span>hello</span><img src=x></div>");
    }
    out
}

/// An unclosed-item list; every item open implicitly closes the previous.
pub fn make_list(items: usize) -> String {
    let mut out = String::with_capacity(items * 14 + 16);
    out.push_str("<ul>");
    for _ in 0..items {
        out.push_str("<li>item");
    }
    out.push_str("</ul>");
    out
}

/// A script body dense with near-matches of the close tag.
pub fn make_rawtext(bytes: usize) -> String {
    let mut out = String::with_capacity(bytes + 32);
    out.push_str("<script>");
    while out.len() < bytes {
        out.push_str("</scri<pt;");
    }
    out.push_str("</script>");
    out
}

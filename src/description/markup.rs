//! Presentation markup removal
//!
//! Only `<span ...>` / `</span>` wrappers and the `&quot;` entity occur in
//! description data. Tag text is dropped, wrapped content is kept.
//!
//! Recognized tags, matched case-sensitively (`<SPAN>` is left as text):
//!
//! - `</span>`
//! - `<span>` and the self-closing `<span/>`
//! - `<span` + whitespace + anything up to the next `>`, which covers
//!   attributes and `<span class="x"/>`

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till};
use nom::character::complete::multispace1;
use nom::combinator::recognize;
use nom::{IResult, Parser};

fn closing_span(input: &str) -> IResult<&str, &str> {
    tag("</span>").parse(input)
}

/// `<span>`, `<span/>`, or `<span` + whitespace + attributes + `>`
fn opening_span(input: &str) -> IResult<&str, &str> {
    recognize((
        tag("<span"),
        alt((
            tag(">"),
            tag("/>"),
            recognize((multispace1, take_till(|c: char| c == '>'), tag(">"))),
        )),
    ))
    .parse(input)
}

fn span_tag(input: &str) -> IResult<&str, &str> {
    alt((closing_span, opening_span)).parse(input)
}

/// Remove span tags and decode `&quot;`
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('<') {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        match span_tag(candidate) {
            Ok((after, _)) => rest = after,
            Err(_) => {
                out.push('<');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);
    out.replace("&quot;", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_span_with_attributes() {
        assert_eq!(
            strip_markup("<span class=\"dmg\">{{DMG_MIN}}</span> damage"),
            "{{DMG_MIN}} damage"
        );
    }

    #[test]
    fn test_strips_bare_span() {
        assert_eq!(strip_markup("a<span>b</span>c"), "abc");
    }

    #[test]
    fn test_nested_spans() {
        assert_eq!(
            strip_markup("<span style='x'><span class=\"y\">hit</span></span>"),
            "hit"
        );
    }

    #[test]
    fn test_self_closing_span() {
        assert_eq!(strip_markup("<span/>hi"), "hi");
        assert_eq!(strip_markup("a<span />b"), "ab");
        assert_eq!(strip_markup("a<span class=\"x\"/>b"), "ab");
    }

    #[test]
    fn test_uppercase_span_untouched() {
        assert_eq!(strip_markup("<span/>hi<SPAN>"), "hi<SPAN>");
        assert_eq!(strip_markup("<SPAN>x</SPAN>"), "<SPAN>x</SPAN>");
    }

    #[test]
    fn test_other_tags_untouched() {
        assert_eq!(strip_markup("<b>bold</b>"), "<b>bold</b>");
        assert_eq!(strip_markup("<spanner>"), "<spanner>");
        assert_eq!(strip_markup("1 < 2"), "1 < 2");
    }

    #[test]
    fn test_unterminated_span_kept() {
        assert_eq!(strip_markup("x <span class"), "x <span class");
    }

    #[test]
    fn test_decodes_quot_only() {
        assert_eq!(strip_markup("say &quot;hi&quot;"), "say \"hi\"");
        assert_eq!(strip_markup("&amp; &lt;"), "&amp; &lt;");
    }

    #[test]
    fn test_no_markup_is_identity() {
        assert_eq!(strip_markup("  plain\ntext  "), "  plain\ntext  ");
        assert_eq!(strip_markup(""), "");
    }
}

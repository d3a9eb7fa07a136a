//! Split a template into literal runs and `{{TOKEN}}` placeholders

use nom::bytes::complete::{tag, take_while1};
use nom::sequence::delimited;
use nom::{IResult, Parser};

/// A slice of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Literal(&'a str),
    /// `name` is the token between the braces, `raw` the full `{{name}}`
    Placeholder { name: &'a str, raw: &'a str },
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn placeholder(input: &str) -> IResult<&str, &str> {
    delimited(tag("{{"), take_while1(is_word_char), tag("}}")).parse(input)
}

/// Scan `template` left to right
///
/// Token names are matched literally (no case folding). A `{{` that does
/// not open a well-formed placeholder stays part of the literal text.
pub fn scan(template: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut literal_from = 0;
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find("{{") {
        let start = cursor + found;
        match placeholder(&template[start..]) {
            Ok((rest, name)) => {
                let end = template.len() - rest.len();
                if literal_from < start {
                    pieces.push(Piece::Literal(&template[literal_from..start]));
                }
                pieces.push(Piece::Placeholder {
                    name,
                    raw: &template[start..end],
                });
                literal_from = end;
                cursor = end;
            }
            Err(_) => cursor = start + 1,
        }
    }

    if literal_from < template.len() {
        pieces.push(Piece::Literal(&template[literal_from..]));
    }
    pieces
}

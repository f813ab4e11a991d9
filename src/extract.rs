//! Pulls the raw component substrings out of a classified color string. Nothing here interprets
//! a number: the extractor's whole job is to hand the parser an ordered list of channel tokens
//! with their suffixes intact. Named colors are resolved through the keyword table and then
//! treated as hex; shorthand hex is widened by doubling each nibble before being cut into
//! two-character fragments.

use format::Format;
use named;

/// Extracts the ordered raw components of `text`, which must already have been classified as
/// `format` by the grammar. The last component is the alpha token when one is present.
pub fn extract(format: Format, text: &str) -> Vec<String> {
    let trimmed = text.trim();
    match format {
        Format::Named => match named::lookup(trimmed) {
            Some(hex) => extract(Format::Hex, hex),
            None => vec![],
        },
        Format::Hex => hex_fragments(trimmed),
        _ => functional_arguments(trimmed),
    }
}

// "#rgb" and "#rgba" widen to "#rrggbb(aa)" before splitting, per the CSS shorthand rule.
fn hex_fragments(text: &str) -> Vec<String> {
    let digits: Vec<char> = text.chars().skip(1).collect();
    let expanded: Vec<char> = if digits.len() == 3 || digits.len() == 4 {
        digits.iter().flat_map(|&c| vec![c, c]).collect()
    } else {
        digits
    };
    expanded.chunks(2).map(|pair| pair.iter().collect()).collect()
}

fn functional_arguments(text: &str) -> Vec<String> {
    let open = match text.find('(') {
        Some(index) => index,
        None => return vec![],
    };
    let close = text.rfind(')').unwrap_or(text.len());
    text[open + 1..close]
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_fragments() {
        assert_eq!(extract(Format::Hex, "#aabbcc"), vec!["aa", "bb", "cc"]);
        assert_eq!(extract(Format::Hex, "#abc"), vec!["aa", "bb", "cc"]);
        assert_eq!(extract(Format::Hex, "#abcd"), vec!["aa", "bb", "cc", "dd"]);
        assert_eq!(extract(Format::Hex, "#12345678"), vec!["12", "34", "56", "78"]);
    }

    #[test]
    fn test_named_resolves_through_hex() {
        assert_eq!(extract(Format::Named, "red"), vec!["ff", "00", "00"]);
        assert_eq!(extract(Format::Named, "SteelBlue"), vec!["46", "82", "b4"]);
    }

    #[test]
    fn test_functional_tokenization_keeps_suffixes() {
        assert_eq!(
            extract(Format::Hsl, "hsl(120deg, 50%, 50%)"),
            vec!["120deg", "50%", "50%"]
        );
        assert_eq!(
            extract(Format::OkLch, "oklch(0.6 0.1 30 / 50%)"),
            vec!["0.6", "0.1", "30", "50%"]
        );
        assert_eq!(
            extract(Format::Rgb, "rgba(1,2,3,0.5)"),
            vec!["1", "2", "3", "0.5"]
        );
    }
}

use chumsky::prelude::*;
use miette::*;

use crate::Vertex;

/// One `x,y` vertex per line. Blank lines are skipped.
pub fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vertex>, extra::Err<Rich<'a, char>>> {
    let coord = just::<_, &'a str, extra::Err<Rich<'a, char>>>('-')
        .or_not()
        .then(text::int(10))
        .to_slice()
        .try_map(|digits: &str, span| {
            digits
                .parse::<i64>()
                .map_err(|e| Rich::custom(span, format!("invalid coordinate `{digits}`: {e}")))
        });

    let vertex = coord
        .clone()
        .then_ignore(just(',').padded_by(text::inline_whitespace()))
        .then(coord)
        .map(|(x, y)| Vertex::new(x, y))
        .padded_by(text::inline_whitespace());

    let line_breaks = text::inline_whitespace()
        .then(text::newline())
        .repeated()
        .at_least(1);

    vertex
        .separated_by(line_breaks)
        .allow_leading()
        .allow_trailing()
        .collect()
        .padded()
}

pub fn parse_vertices(input: &str) -> Result<Vec<Vertex>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_the_example() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";
        let vertices = parse_vertices(input)?;
        assert_eq!(vertices.len(), 8);
        assert_eq!(vertices[0], Vertex::new(7, 1));
        assert_eq!(vertices[7], Vertex::new(7, 3));
        Ok(())
    }

    #[rstest]
    #[case("", vec![])]
    #[case("\n\n", vec![])]
    #[case("-3,4", vec![(-3, 4)])]
    #[case("1,2\n\n   \n3,4\n", vec![(1, 2), (3, 4)])]
    #[case("\r\n1,2\r\n3,-4\r\n", vec![(1, 2), (3, -4)])]
    #[case("  5 , 6  \n7,8", vec![(5, 6), (7, 8)])]
    fn skips_blank_lines_and_padding(
        #[case] input: &str,
        #[case] expected: Vec<(i64, i64)>,
    ) -> Result<()> {
        let expected: Vec<Vertex> = expected
            .into_iter()
            .map(|(x, y)| Vertex::new(x, y))
            .collect();
        assert_eq!(parse_vertices(input)?, expected);
        Ok(())
    }

    #[rstest]
    #[case("1;2")]
    #[case("1,2,3")]
    #[case("1,2 3,4")]
    #[case("a,b")]
    #[case("99999999999999999999,0")]
    fn rejects_malformed_lines(#[case] input: &str) {
        assert!(parse_vertices(input).is_err());
    }
}

use itertools::Itertools;
use miette::*;

use crate::evaluator::inclusive_area;
use crate::parser::parse_vertices;
use crate::Vertex;

/// Largest inclusive rectangle between any two red tiles, ignoring the loop.
pub fn largest_bounding_area(points: &[Vertex]) -> Result<u64> {
    points
        .iter()
        .tuple_combinations()
        .map(|(&p1, &p2)| {
            inclusive_area(p1, p2).ok_or_else(|| miette!("area between {p1} and {p2} overflows u64"))
        })
        .fold_ok(0, u64::max)
}

#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_vertices(input)?;
    let max_area = largest_bounding_area(&points)?;
    Ok(max_area.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn it_works() -> Result<()> {
        let input = "7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3";
        assert_eq!("50", process(input)?);
        Ok(())
    }

    #[rstest]
    #[case("", "0")]
    #[case("4,4", "0")]
    #[case("0,0\n0,0", "1")]
    #[case("-2,-2\n\n2,2\n", "25")]
    fn degenerate_inputs(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, process(input)?);
        Ok(())
    }

    #[test]
    fn overflow_is_an_error() {
        let points = [
            Vertex::new(i64::MIN, i64::MIN),
            Vertex::new(i64::MAX, i64::MAX),
        ];
        assert!(largest_bounding_area(&points).is_err());
    }
}

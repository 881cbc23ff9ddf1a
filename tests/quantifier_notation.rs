//! Quantifier shorthand notation

use rstest::rstest;
use simplex::simplex::grammar::{t, Bounds, Expression, GrammarError, Quantifier};

#[rstest]
#[case("?", 0, Some(1))]
#[case("*", 0, None)]
#[case("+", 1, None)]
#[case("{3}", 3, Some(3))]
#[case("{,4}", 0, Some(4))]
#[case("{2,}", 2, None)]
#[case("{2,5}", 2, Some(5))]
#[case("{ 2 , 5 }", 2, Some(5))]
#[case("{0}", 0, Some(0))]
fn test_valid_notation(#[case] notation: &str, #[case] min: usize, #[case] max: Option<usize>) {
    let bounds: Bounds = notation.parse().unwrap();
    assert_eq!(bounds.min(), min);
    assert_eq!(bounds.max(), max);
}

#[rstest]
#[case("")]
#[case("{}")]
#[case("{,}")]
#[case("{a}")]
#[case("{1,2,3}")]
#[case("**")]
#[case("1")]
fn test_unknown_notation(#[case] notation: &str) {
    assert_eq!(
        notation.parse::<Bounds>(),
        Err(GrammarError::UnknownQuantifier(notation.to_string()))
    );
}

#[test]
fn test_inverted_range() {
    assert_eq!(
        "{5,2}".parse::<Bounds>(),
        Err(GrammarError::InvalidBounds { min: 5, max: 2 })
    );
}

#[rstest]
#[case("?")]
#[case("*")]
#[case("+")]
#[case("{3}")]
#[case("{,4}")]
#[case("{2,}")]
#[case("{2,5}")]
fn test_display_is_the_shortest_notation(#[case] notation: &str) {
    let bounds: Bounds = notation.parse().unwrap();
    assert_eq!(bounds.to_string(), notation);
}

#[test]
fn test_quantifier_from_notation() {
    let quantifier = Quantifier::parse(Expression::new(vec![t('a')]), "{2,3}").unwrap();
    assert_eq!(quantifier.bounds(), Bounds::between(2, 3).unwrap());
    assert_eq!(quantifier.expression().len(), 1);

    let err = Quantifier::parse(Expression::new(vec![t('a')]), "~").unwrap_err();
    assert_eq!(err.to_string(), "Unknown quantifier '~'");
}

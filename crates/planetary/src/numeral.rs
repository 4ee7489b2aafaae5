/// Roman numeral for a 1-based ordinal: 1 → "I", 4 → "IV", 14 → "XIV".
///
/// Used as the suffix of generated planet and satellite names. An ordinal of
/// zero has no numeral and yields an empty string.
pub fn roman_numeral(ordinal: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    NUMERALS
        .iter()
        .fold(
            (String::new(), ordinal),
            |(acc, remaining), &(value, numeral)| {
                (acc + &numeral.repeat(remaining / value), remaining % value)
            },
        )
        .0
}

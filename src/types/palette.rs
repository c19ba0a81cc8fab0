//! Ordered palette of buildable colours.

use super::Colour;

/// An ordered collection of colours.
///
/// Entry order is significant: it fixes the letter code printed in the
/// legend and on every grid cell (index 0 is "A").
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    /// Create a palette from colours in code order.
    pub fn new(colours: Vec<Colour>) -> Self {
        Self { colours }
    }

    /// Get a colour by index.
    pub fn get(&self, index: usize) -> Option<Colour> {
        self.colours.get(index).copied()
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Iterate over the colours in code order.
    pub fn iter(&self) -> impl Iterator<Item = Colour> + '_ {
        self.colours.iter().copied()
    }

    /// Colours as a slice.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Index of the entry closest to `colour`.
    ///
    /// Uses squared Euclidean RGB distance. Ties resolve to the lowest index.
    /// Returns `None` only when the palette is empty.
    pub fn nearest(&self, colour: Colour) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;

        for (i, entry) in self.colours.iter().enumerate() {
            let dist = colour.distance_squared(*entry);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
            if dist == 0 {
                break;
            }
        }

        best.map(|(i, _)| i)
    }

    /// The palette colour closest to `colour`, or `colour` itself if empty.
    pub fn nearest_colour(&self, colour: Colour) -> Colour {
        self.nearest(colour)
            .and_then(|i| self.get(i))
            .unwrap_or(colour)
    }

    /// Letter code for the entry at `index`.
    pub fn code(index: usize) -> String {
        letter_code(index)
    }
}

/// Bijective base-26 letter code: 0 → "A", 25 → "Z", 26 → "AA", 701 → "ZZ".
pub fn letter_code(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_codes() {
        assert_eq!(letter_code(0), "A");
        assert_eq!(letter_code(1), "B");
        assert_eq!(letter_code(25), "Z");
        assert_eq!(letter_code(26), "AA");
        assert_eq!(letter_code(27), "AB");
        assert_eq!(letter_code(51), "AZ");
        assert_eq!(letter_code(52), "BA");
        assert_eq!(letter_code(701), "ZZ");
        assert_eq!(letter_code(702), "AAA");
    }

    #[test]
    fn test_letter_codes_are_unique() {
        use std::collections::HashSet;
        let codes: HashSet<String> = (0..2000).map(letter_code).collect();
        assert_eq!(codes.len(), 2000);
    }

    #[test]
    fn test_nearest_exact_match() {
        let palette = Palette::new(vec![Colour::BLACK, Colour::WHITE, Colour::rgb(255, 0, 0)]);
        assert_eq!(palette.nearest(Colour::rgb(255, 0, 0)), Some(2));
        assert_eq!(palette.nearest(Colour::rgb(250, 250, 250)), Some(1));
        assert_eq!(palette.nearest(Colour::rgb(5, 5, 5)), Some(0));
    }

    #[test]
    fn test_nearest_tie_goes_to_lowest_index() {
        let palette = Palette::new(vec![Colour::rgb(0, 0, 0), Colour::rgb(20, 0, 0)]);
        // 10 is equidistant from both entries
        assert_eq!(palette.nearest(Colour::rgb(10, 0, 0)), Some(0));

        let duplicated = Palette::new(vec![Colour::WHITE, Colour::BLACK, Colour::BLACK]);
        assert_eq!(duplicated.nearest(Colour::BLACK), Some(1));
    }

    #[test]
    fn test_nearest_is_deterministic() {
        let palette = Palette::new(vec![
            Colour::rgb(10, 200, 30),
            Colour::rgb(200, 10, 30),
            Colour::rgb(30, 10, 200),
        ]);
        let probe = Colour::rgb(100, 100, 100);
        let first = palette.nearest(probe);
        for _ in 0..10 {
            assert_eq!(palette.nearest(probe), first);
        }
    }

    #[test]
    fn test_nearest_empty_palette() {
        let palette = Palette::default();
        assert_eq!(palette.nearest(Colour::BLACK), None);
        assert_eq!(palette.nearest_colour(Colour::WHITE), Colour::WHITE);
    }
}

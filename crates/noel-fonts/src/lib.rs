//! ASCII art letters for the noel greeting card title.

/// Block letters A-Z (7 lines tall, mostly 6 chars wide).
pub const LETTERS: [[&str; 7]; 26] = [
    // A
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██████",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // B
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
    ],
    // C
    [
        " ████ ",
        "██  ██",
        "██    ",
        "██    ",
        "██    ",
        "██  ██",
        " ████ ",
    ],
    // D
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "█████ ",
    ],
    // E
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "██    ",
        "██    ",
        "██████",
    ],
    // F
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "██    ",
        "██    ",
        "██    ",
    ],
    // G
    [
        " ████ ",
        "██  ██",
        "██    ",
        "██ ███",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // H
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██████",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // I
    [
        "██████",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "██████",
    ],
    // J
    [
        "██████",
        "    ██",
        "    ██",
        "    ██",
        "    ██",
        "██  ██",
        " ████ ",
    ],
    // K
    [
        "██  ██",
        "██ ██ ",
        "████  ",
        "███   ",
        "████  ",
        "██ ██ ",
        "██  ██",
    ],
    // L
    [
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██████",
    ],
    // M
    [
        "██   ██",
        "███ ███",
        "███████",
        "██ █ ██",
        "██   ██",
        "██   ██",
        "██   ██",
    ],
    // N
    [
        "██  ██",
        "███ ██",
        "██████",
        "██ ███",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // O
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // P
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "██    ",
        "██    ",
        "██    ",
    ],
    // Q
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██ ███",
        " ████ ",
        "    ██",
    ],
    // R
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "████  ",
        "██ ██ ",
        "██  ██",
    ],
    // S
    [
        " █████",
        "██    ",
        "██    ",
        " ████ ",
        "    ██",
        "    ██",
        "█████ ",
    ],
    // T
    [
        "██████",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // U
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // V
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
    ],
    // W
    [
        "██   ██",
        "██   ██",
        "██   ██",
        "██ █ ██",
        "███████",
        "███ ███",
        "██   ██",
    ],
    // X
    [
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
        " ████ ",
        "██  ██",
        "██  ██",
    ],
    // Y
    [
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // Z
    [
        "██████",
        "    ██",
        "   ██ ",
        "  ██  ",
        " ██   ",
        "██    ",
        "██████",
    ],
];

/// Word gap (7 lines tall, 3 chars wide).
pub const SPACE: [&str; 7] = ["   ", "   ", "   ", "   ", "   ", "   ", "   "];

/// Look up the glyph for a character, uppercasing ASCII letters.
fn glyph(c: char) -> Option<&'static [&'static str; 7]> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(&LETTERS[(upper as u8 - b'A') as usize])
    } else if upper == ' ' {
        Some(&SPACE)
    } else {
        None
    }
}

/// Build large ASCII art for a title string.
///
/// Characters outside A-Z and space are skipped. Returns exactly 7 lines of
/// equal width.
pub fn build_title_art(text: &str) -> Vec<String> {
    let glyphs: Vec<&[&str; 7]> = text.chars().filter_map(glyph).collect();

    (0..7)
        .map(|row| {
            let mut line = String::new();
            for (i, g) in glyphs.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(g[row]);
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_art_is_seven_equal_width_rows() {
        let lines = build_title_art("Merry Christmas");
        assert_eq!(lines.len(), 7);
        let width = lines[0].chars().count();
        assert!(width > 0);
        for line in &lines {
            assert_eq!(line.chars().count(), width);
        }
    }

    #[test]
    fn every_letter_has_consistent_row_widths() {
        for letter in &LETTERS {
            let width = letter[0].chars().count();
            for row in letter {
                assert_eq!(row.chars().count(), width);
            }
        }
    }

    #[test]
    fn unknown_characters_are_skipped() {
        assert_eq!(build_title_art("A!"), build_title_art("A"));
        assert_eq!(build_title_art("2024"), vec![String::new(); 7]);
    }

    #[test]
    fn lowercase_maps_to_uppercase() {
        assert_eq!(build_title_art("noel"), build_title_art("NOEL"));
    }
}

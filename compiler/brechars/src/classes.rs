//! Named POSIX character classes.
//!
//! Members are listed in table order, not sorted, and are not yet
//! filtered by bounds; the generator does that.

use crate::bounds::Bounds;

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT: &str = "0123456789";
const SPACE: &str = " \t\n\r\u{000C}\u{000B}";
const BLANK: &str = " \t";
const XDIGIT: &str = "abcdefABCDEF0123456789";
// The trailing `]` duplicates the one after `\`; generated output keeps it.
const PUNCT: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~]";

/// One of the named classes accepted inside a bracket expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PosixClass {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Word,
    Xdigit,
}

impl PosixClass {
    pub const ALL: [PosixClass; 13] = [
        PosixClass::Alnum,
        PosixClass::Alpha,
        PosixClass::Blank,
        PosixClass::Cntrl,
        PosixClass::Digit,
        PosixClass::Graph,
        PosixClass::Lower,
        PosixClass::Print,
        PosixClass::Punct,
        PosixClass::Space,
        PosixClass::Upper,
        PosixClass::Word,
        PosixClass::Xdigit,
    ];

    /// Look up a class by its token text, colons included (`":digit:"`).
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            ":alnum:" => PosixClass::Alnum,
            ":alpha:" => PosixClass::Alpha,
            ":blank:" => PosixClass::Blank,
            ":cntrl:" => PosixClass::Cntrl,
            ":digit:" => PosixClass::Digit,
            ":graph:" => PosixClass::Graph,
            ":lower:" => PosixClass::Lower,
            ":print:" => PosixClass::Print,
            ":punct:" => PosixClass::Punct,
            ":space:" => PosixClass::Space,
            ":upper:" => PosixClass::Upper,
            ":word:" => PosixClass::Word,
            ":xdigit:" => PosixClass::Xdigit,
            _ => return None,
        })
    }

    /// The token text for this class, colons included.
    pub const fn name(self) -> &'static str {
        match self {
            PosixClass::Alnum => ":alnum:",
            PosixClass::Alpha => ":alpha:",
            PosixClass::Blank => ":blank:",
            PosixClass::Cntrl => ":cntrl:",
            PosixClass::Digit => ":digit:",
            PosixClass::Graph => ":graph:",
            PosixClass::Lower => ":lower:",
            PosixClass::Print => ":print:",
            PosixClass::Punct => ":punct:",
            PosixClass::Space => ":space:",
            PosixClass::Upper => ":upper:",
            PosixClass::Word => ":word:",
            PosixClass::Xdigit => ":xdigit:",
        }
    }

    /// Members of the class in table order.
    ///
    /// `bounds` only matters for `:print:` and `:graph:`, which are the
    /// bounded alphabet minus the control characters.
    pub fn members(self, bounds: Bounds) -> Vec<char> {
        match self {
            PosixClass::Alnum => chain(&[DIGIT, UPPER, LOWER]),
            PosixClass::Alpha => chain(&[UPPER, LOWER]),
            PosixClass::Blank => BLANK.chars().collect(),
            PosixClass::Cntrl => control_chars().collect(),
            PosixClass::Digit => DIGIT.chars().collect(),
            PosixClass::Graph | PosixClass::Print => {
                bounds.alphabet().filter(|c| !is_cntrl(*c)).collect()
            }
            PosixClass::Lower => LOWER.chars().collect(),
            PosixClass::Punct => PUNCT.chars().collect(),
            PosixClass::Space => SPACE.chars().collect(),
            PosixClass::Upper => UPPER.chars().collect(),
            PosixClass::Word => chain(&[DIGIT, UPPER, LOWER, "_"]),
            PosixClass::Xdigit => XDIGIT.chars().collect(),
        }
    }
}

fn chain(parts: &[&str]) -> Vec<char> {
    parts.iter().flat_map(|part| part.chars()).collect()
}

fn control_chars() -> impl Iterator<Item = char> {
    ('\u{0000}'..='\u{001F}').chain(std::iter::once('\u{007F}'))
}

fn is_cntrl(c: char) -> bool {
    c <= '\u{001F}' || c == '\u{007F}'
}

//! Fixed column layout of the question import CSV.

pub const COLUMN_COUNT: usize = 12;

pub const QUESTION_BODY: usize = 0;
pub const HINT: usize = 9;
pub const CORRECT_OPTION: usize = 10;
pub const DIFFICULTY: usize = 11;

/// `(text, explanation)` column pairs for options a, b, c and d.
pub const OPTION_COLUMNS: [(usize, usize); 4] = [(1, 2), (3, 4), (5, 6), (7, 8)];

/// Number of leading options every row must fill in.
pub const REQUIRED_OPTIONS: usize = 2;

pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = [
    "Question body",
    "Option 1",
    "Option 1 explanation",
    "Option 2",
    "Option 2 explanation",
    "Option 3",
    "Option 3 explanation",
    "Option 4",
    "Option 4 explanation",
    "Hint",
    "Correct option",
    "Difficulty",
];
